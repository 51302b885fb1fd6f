use std::error::Error;
use std::fmt;

/// Reasons an engine operation can refuse to produce a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Rows or columns requested as zero.
    InvalidDimensions { rows: usize, columns: usize },
    /// The backing store could not be reserved.
    AllocationFailure { rows: usize, columns: usize },
    /// Buffer length does not match the requested shape.
    ShapeMismatch { rows: usize, columns: usize, len: usize },
    /// Nested input where one row differs in length from the first.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// An operand is the invalid sentinel, is empty or holds NaN.
    OperandInvalid,
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Determinant or inverse requested on a non-square matrix.
    NonSquare { rows: usize, columns: usize },
    /// Inverse requested on a matrix whose determinant is below tolerance.
    Singular { determinant: f64 },
    /// The computed result holds NaN and classified as invalid.
    NotANumber,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, columns } => {
                write!(f, "invalid dimensions {}x{}: rows and columns must be positive", rows, columns)
            }
            MatrixError::AllocationFailure { rows, columns } => {
                write!(f, "failed to allocate storage for a {}x{} matrix", rows, columns)
            }
            MatrixError::ShapeMismatch { rows, columns, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, columns, len
            ),
            MatrixError::RaggedRows { row, expected, found } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            MatrixError::OperandInvalid => write!(f, "operand is not a valid matrix"),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "incompatible shapes {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NonSquare { rows, columns } => {
                write!(f, "matrix must be square, got {}x{}", rows, columns)
            }
            MatrixError::Singular { determinant } => {
                write!(f, "matrix is singular (determinant {})", determinant)
            }
            MatrixError::NotANumber => write!(f, "result contains NaN values"),
        }
    }
}

impl Error for MatrixError {}
