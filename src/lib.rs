//! Fixed-precision mathematical vectors.
//!
//! [`Vector`] is an immutable value type over `f64` components with the usual
//! linear-algebra operations: norm, dot and cross products, angle, projection,
//! element-wise addition/subtraction, scalar multiplication and division.
//! Every operation returns a new value; operands are never mutated.

pub mod operand;
pub mod ops;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Invalid element type at index {index}: expected integer or float, found {found}")]
    InvalidElementType { index: usize, found: String },
    #[error("Non-finite element at index {index}")]
    NonFiniteElement { index: usize },
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Invalid operand type: {0}")]
    InvalidOperandType(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Domain error: {0} is outside [-1, 1]")]
    DomainError(f64),
    #[error("Parse Error: {0}")]
    Parse(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use operand::{Operand, Product};
pub use ops::ANGLE_TOLERANCE;
pub use vector::{Vector, DEFAULT_EPSILON};
