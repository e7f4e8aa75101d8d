//! Octarine: bounded planar constraint regions over eight fixed directions.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the octarine sub-crates. For most users, adding `octarine` as
//! a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use octarine::prelude::*;
//!
//! // Tightest octagon covering three points.
//! let mut region = Octagon::from_points(&[
//!     Point::new(0, 0),
//!     Point::new(8, 2),
//!     Point::new(3, 9),
//! ]);
//! assert_eq!(region.classify(Point::new(3, 3)), Placement::Inside);
//!
//! // Grow it by one unit in every direction, then probe a bound.
//! region.inflate(1).unwrap();
//! assert_eq!(region.limit(1), Ok(9));
//!
//! // Meet it with another region.
//! let other = Octagon::from_points(&[Point::new(2, 2), Point::new(20, 20)]);
//! assert!(has_intersection(&region, &other));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `octarine-core` | [`prelude::Point`] and the direction template |
//! | [`domain`] | `octarine-domain` | [`prelude::Octagon`] and the set operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core planar types (`octarine-core`): the integer point and the
/// eight-direction template.
pub use octarine_core as types;

/// The octagon engine (`octarine-domain`): construction, closure,
/// classification, inflation, and intersection.
pub use octarine_domain as domain;

/// Common imports for typical octarine usage.
///
/// ```rust
/// use octarine::prelude::*;
/// ```
pub mod prelude {
    pub use octarine_core::{dir, Point};
    pub use octarine_domain::{
        has_intersection, intersection, Octagon, OctagonError, Placement,
    };
}
