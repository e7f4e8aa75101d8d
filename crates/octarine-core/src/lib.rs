//! Core types for the octarine constraint domain.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the integer [`Point`] type and the fixed eight-direction template
//! ([`dir`]) that every octagon shares: four axis directions and four
//! diagonals, indexed counter-clockwise from `+x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dir;
pub mod point;

pub use point::Point;
