//! matrix-engine: dense real-valued matrix arithmetic.
//!
//! Construction, tolerance-based comparison, sum/difference, scalar and
//! matrix products, transpose, cofactors, determinant and adjugate-based
//! inverse over arbitrary-size `f64` matrices.
//!
//! Every operation that builds a matrix returns `Result<Matrix, MatrixError>`
//! and classifies its result as zero, identity or generic. Callers that want
//! the invalid-sentinel style can fold errors away with
//! [`MatrixResultExt::or_invalid`]. The determinant reports failure as NaN
//! and [`Matrix::equals`] as `false`.
pub mod error;
pub mod math;

pub use error::MatrixError;
pub use math::{Matrix, MatrixKind, MatrixResultExt, ACCURACY};
