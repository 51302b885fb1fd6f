//! Elementwise comparison, sum/difference, scaling, matrix product and transpose.
//!
//! Every operation runs the operands through [`validate_pair`], writes into a
//! freshly allocated result and reclassifies it before handing it back.

use std::ops::{Add, Mul, Sub};

use crate::error::MatrixError;
use crate::math::matrix::{approx_eq, validate_pair, Matrix};

impl Matrix {
    /// Cell-by-cell comparison within tolerance. Returns `false` both for
    /// unequal matrices and for operands that cannot be compared.
    pub fn equals(&self, other: &Matrix) -> bool {
        if validate_pair(self, Some(other)).is_err() || self.shape() != other.shape() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| approx_eq(*a, *b))
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.combine(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.combine(other, |a, b| a - b)
    }

    fn combine<F>(&self, other: &Matrix, op: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        validate_pair(self, Some(other))?;
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Matrix::from_fn(self.nrows(), self.ncols(), |row, col| {
            op(self[(row, col)], other[(row, col)])
        })?
        .into_checked()
    }

    /// Multiplies every cell by `factor`. A NaN factor is not rejected up
    /// front; it surfaces as [`MatrixError::NotANumber`] once the result is
    /// classified.
    pub fn scale_by(&self, factor: f64) -> Result<Matrix, MatrixError> {
        validate_pair(self, None)?;
        Matrix::from_fn(self.nrows(), self.ncols(), |row, col| self[(row, col)] * factor)?
            .into_checked()
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        validate_pair(self, Some(other))?;
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Matrix::from_fn(self.nrows(), other.ncols(), |row, col| {
            let mut acc = 0.0;
            for k in 0..self.ncols() {
                acc += self[(row, k)] * other[(k, col)];
            }
            acc
        })?
        .into_checked()
    }

    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        validate_pair(self, None)?;
        Matrix::from_fn(self.ncols(), self.nrows(), |row, col| self[(col, row)])?.into_checked()
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale_by(rhs)
    }
}
