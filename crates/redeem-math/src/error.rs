use thiserror::Error;

/// Failures raised by checked vector and matrix operations.
///
/// Every variant is reported at the point of violation; nothing is clamped
/// or resized to make an operation succeed.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Operand sizes disagree where equality is required.
    #[error("cardinality mismatch: expected {expected}, got {actual}")]
    Cardinality { expected: usize, actual: usize },

    /// Checked index outside `[0, size)`.
    #[error("index {index} out of bounds for size {size}")]
    Index { index: usize, size: usize },

    /// Label lookup with no binding map, or a map without this label.
    #[error("no binding for label '{0}'")]
    UnboundLabel(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Matrix buffer does not match the requested shape.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    Shape { rows: usize, cols: usize, len: usize },

    #[error("malformed vector encoding: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

impl VectorError {
    pub(crate) fn cardinality(expected: usize, actual: usize) -> Self {
        VectorError::Cardinality { expected, actual }
    }
}
