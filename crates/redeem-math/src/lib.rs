//! redeem-math: vector primitives for the ReDeeM machine-learning crates.
//!
//! Classifiers, clustering and recommenders build on one vector contract
//! (`math::Vector`) with uniform arithmetic, iteration and comparison
//! semantics. The crate ships the dense realisation, live views, the
//! outer-product matrix and a JSON text form.
//!
//! Nothing here is synchronized; a vector and its views are meant to be
//! mutated by one thread at a time.
pub mod config;
pub mod error;
pub mod math;

pub use error::{Result, VectorError};
