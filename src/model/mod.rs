//! Typed record models.
//!
//! The NMA model mirrors the aggregator record shape produced by the parser;
//! the production model mirrors the deposition repository shape produced by
//! the transform. Both serialize into the plain nested JSON records the
//! downstream repositories ingest; the generic representation exists only at
//! that boundary.

pub mod nma;
pub mod production;
