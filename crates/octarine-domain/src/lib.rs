//! The octagon constraint engine for the octarine domain.
//!
//! An [`Octagon`] describes a convex region of the integer plane as
//! eight half-plane bounds along the fixed direction template of
//! [`octarine_core::dir`]: `±x <= c`, `±y <= c`, and `±x±y <= c`.
//!
//! Every mutating operation that changes bounds re-runs the closure
//! (normalization) pass before the octagon answers queries, so a
//! populated octagon is always in closed form: no bound can be
//! tightened without shrinking the region, and two octagons describing
//! the same region through the same constructor path carry identical
//! bounds. Emptiness is a derived predicate computed from the bounds,
//! never a stored flag.
//!
//! Operations that need a concrete bound ([`Octagon::limit`],
//! [`Octagon::vertex`], [`Octagon::inflate`]) return
//! [`OctagonError::EmptyDomain`] on an empty octagon instead of
//! panicking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod intersect;
pub mod octagon;

mod closure;

pub use error::OctagonError;
pub use intersect::{has_intersection, intersection};
pub use octagon::{Octagon, Placement};
