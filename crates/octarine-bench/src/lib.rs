//! Benchmark-only crate; see `benches/octagon_ops.rs`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
