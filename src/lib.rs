pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Undefined Direction: zero vector has no direction")]
    UndefinedDirection,
    #[error("Index Error: index {index} out of range for dimension {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{generate_random_vectors, random_vector};
pub use vector::Vector;
