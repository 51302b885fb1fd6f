//! Dense `f64` matrix type and the operations defined on it.
//!
//! `Matrix` keeps its cells in one row-major buffer and carries a derived
//! [`MatrixKind`] tag. Operations live in separate modules as inherent
//! methods so the type stays in one place.
pub mod adjugate;
pub mod arithmetic;
pub mod determinant;
pub mod matrix;

pub use matrix::{approx_eq, validate_pair, Matrix, MatrixKind, MatrixResultExt, ACCURACY};
