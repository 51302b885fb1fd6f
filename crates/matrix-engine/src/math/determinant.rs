//! Determinant with three branches: closed forms up to 3x3 and a restricted
//! Gaussian elimination for anything larger.
//!
//! The elimination only combines a row with the row directly above it. When
//! that pivot is exactly zero, the first row (scanning from the bottom) with a
//! non-negligible entry in the column is added into the pivot row; it never
//! swaps rows. Results on near-singular input depend on this exact order.

use crate::error::MatrixError;
use crate::math::matrix::{validate_pair, Matrix, ACCURACY};

impl Matrix {
    /// Determinant, or NaN when the matrix is invalid or not square.
    pub fn determinant(&self) -> f64 {
        self.try_determinant().unwrap_or_else(|err| {
            log::debug!("determinant unavailable: {}", err);
            f64::NAN
        })
    }

    /// Checked form of [`Matrix::determinant`].
    pub fn try_determinant(&self) -> Result<f64, MatrixError> {
        validate_pair(self, None)?;
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.nrows(),
                columns: self.ncols(),
            });
        }
        let det = match self.nrows() {
            1 => self[(0, 0)],
            2 => determinant_2x2(self),
            3 => determinant_3x3(self),
            n => {
                log::trace!("gaussian elimination for {}x{} determinant", n, n);
                gauss_determinant(self)
            }
        };
        Ok(det)
    }
}

fn determinant_2x2(a: &Matrix) -> f64 {
    a[(0, 0)] * a[(1, 1)] - a[(1, 0)] * a[(0, 1)]
}

fn determinant_3x3(a: &Matrix) -> f64 {
    let mut det = 0.0;
    det += a[(0, 0)] * (a[(1, 1)] * a[(2, 2)] - a[(2, 1)] * a[(1, 2)]);
    det -= a[(0, 1)] * (a[(1, 0)] * a[(2, 2)] - a[(2, 0)] * a[(1, 2)]);
    det += a[(0, 2)] * (a[(1, 0)] * a[(2, 1)] - a[(2, 0)] * a[(1, 1)]);
    det
}

fn gauss_determinant(a: &Matrix) -> f64 {
    let mut b = a.clone();
    let size = b.ncols();
    let mut singular = false;

    for col in 0..size {
        if singular {
            break;
        }
        // rows above `col` are already reduced for this column
        for row in (col + 1..b.nrows()).rev() {
            if eliminate_below(&mut b, row, col) {
                singular = true;
                break;
            }
        }
    }

    if singular {
        0.0
    } else {
        (0..size).map(|i| b[(i, i)]).product()
    }
}

/// Zeroes `b[row][col]` using `row - 1` as pivot row. Returns `true` when the
/// pivot was zero and no row could supply a replacement.
fn eliminate_below(b: &mut Matrix, row: usize, col: usize) -> bool {
    let mut pivot = b[(row - 1, col)];
    let factor = -b[(row, col)];
    let mut singular = false;

    for k in col..b.ncols() {
        if singular {
            break;
        }
        if pivot == 0.0 {
            singular = !borrow_nonzero_row(b, row - 1, k);
            pivot = b[(row - 1, col)];
        }
        let value = (factor / pivot) * b[(row - 1, k)] + b[(row, k)];
        b.set(row, k, value);
    }
    b.set(row, col, 0.0);
    singular
}

/// Adds into `target` the bottom-most row whose entry in `col` is at least
/// `ACCURACY` in magnitude. Returns `false` if there is none.
fn borrow_nonzero_row(b: &mut Matrix, target: usize, col: usize) -> bool {
    let source = (0..b.nrows())
        .rev()
        .find(|&row| b[(row, col)].abs() >= ACCURACY);
    match source {
        Some(source) => {
            let addend = b.row_slice(source).to_vec();
            for (cell, add) in b.row_mut(target).iter_mut().zip(addend) {
                *cell += add;
            }
            true
        }
        None => false,
    }
}
