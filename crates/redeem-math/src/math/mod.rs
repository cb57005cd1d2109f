//! Vector primitives used throughout the ReDeeM machine-learning crates.
//!
//! `Vector` is the shared contract; `DenseVector` is the array-backed
//! realisation and `VectorView` a live window over any other vector.
//! Arithmetic returns fresh vectors; only the `assign_*` family and the
//! `set*` accessors mutate in place.
pub mod codec;
pub mod dense;
pub mod element;
pub mod equivalence;
pub mod functions;
pub mod matrix;
pub mod vector;
pub mod view;

pub use dense::DenseVector;
pub use element::{Element, ElementMut};
pub use equivalence::{equivalent, hash_code, strict_equivalence};
pub use matrix::DenseMatrix;
pub use vector::{LabelBindings, LengthSquaredCache, Vector};
pub use view::VectorView;
