//! Error types for octagon operations.

use std::error::Error;
use std::fmt;

/// Errors arising from octagon queries and mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OctagonError {
    /// The operation needs a concrete bound, but the octagon is empty
    /// (unpopulated, or populated with jointly unsatisfiable bounds).
    EmptyDomain,
    /// A caller-supplied direction is outside the public 1-indexed
    /// range `[1, 8]`.
    InvalidDirection {
        /// The offending direction argument.
        dir: i32,
    },
}

impl fmt::Display for OctagonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain => write!(f, "octagon is empty"),
            Self::InvalidDirection { dir } => {
                write!(f, "direction {dir} outside valid range [1, 8]")
            }
        }
    }
}

impl Error for OctagonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_direction() {
        assert_eq!(
            OctagonError::InvalidDirection { dir: 9 }.to_string(),
            "direction 9 outside valid range [1, 8]"
        );
        assert_eq!(OctagonError::EmptyDomain.to_string(), "octagon is empty");
    }
}
