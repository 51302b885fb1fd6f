//! Minors, cofactors and the adjugate-based inverse.

use crate::error::MatrixError;
use crate::math::matrix::{validate_pair, Matrix, ACCURACY};

impl Matrix {
    /// Copy of `self` without `row` and `col`. The caller guarantees a valid
    /// matrix with at least two rows and two columns.
    pub(crate) fn minor_of(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        Matrix::from_fn(self.nrows() - 1, self.ncols() - 1, |r, c| {
            let src_row = if r < row { r } else { r + 1 };
            let src_col = if c < col { c } else { c + 1 };
            self[(src_row, src_col)]
        })
    }

    /// Signed determinant of the minor at (`row`, `col`). NaN when the cell is
    /// out of range, the matrix has a single row or column, or the minor is
    /// not square.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        if self.nrows() < 2 || self.ncols() < 2 || row >= self.nrows() || col >= self.ncols() {
            return f64::NAN;
        }
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        match self.minor_of(row, col) {
            Ok(minor) => minor.determinant() * sign,
            Err(_) => f64::NAN,
        }
    }

    /// Matrix of cofactors.
    ///
    /// Only validity is checked. A single-row or single-column input yields a
    /// 1x1 matrix holding `self[(0, 0)]`; any other non-square input produces
    /// NaN cofactors and fails with [`MatrixError::NotANumber`].
    pub fn complements(&self) -> Result<Matrix, MatrixError> {
        validate_pair(self, None)?;
        if self.nrows() == 1 || self.ncols() == 1 {
            return Matrix::from_shape_vec((1, 1), vec![self[(0, 0)]])?.into_checked();
        }
        Matrix::from_fn(self.nrows(), self.ncols(), |row, col| self.cofactor(row, col))?
            .into_checked()
    }

    /// Inverse as `complements(transpose(self)) / det(self)`.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        validate_pair(self, None)?;
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.nrows(),
                columns: self.ncols(),
            });
        }
        let determinant = self.try_determinant()?;
        if determinant.abs() < ACCURACY {
            log::debug!("refusing to invert singular matrix (det = {})", determinant);
            return Err(MatrixError::Singular { determinant });
        }
        if self.nrows() == 1 {
            // the adjugate of a 1x1 matrix is [1]
            return Matrix::from_shape_vec((1, 1), vec![1.0 / determinant])?.into_checked();
        }
        self.transpose()?.complements()?.scale_by(1.0 / determinant)
    }
}
