use std::fmt;
use std::ops::Index;

use crate::error::MatrixError;

/// Threshold below which two cells are treated as equal.
pub const ACCURACY: f64 = 1e-7;

/// Derived classification of a matrix's content, recomputed after every
/// operation that produces a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MatrixKind {
    /// Sentinel state: no store, or a store holding NaN.
    #[default]
    Invalid,
    Zero,
    Identity,
    Generic,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixKind::Invalid => "invalid",
            MatrixKind::Zero => "zero",
            MatrixKind::Identity => "identity",
            MatrixKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// `|lhs - rhs| < ACCURACY`, strict.
#[inline]
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < ACCURACY
}

/// Dense row-major matrix of `f64` cells.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    kind: MatrixKind,
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix classified as `Zero`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let data = zeroed_store(rows, cols)?;
        Ok(Self {
            data,
            rows,
            cols,
            kind: MatrixKind::Zero,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, columns: cols });
        }
        if Some(data.len()) != rows.checked_mul(cols) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                columns: cols,
                len: data.len(),
            });
        }
        let mut matrix = Self {
            data,
            rows,
            cols,
            kind: MatrixKind::Generic,
        };
        matrix.reclassify();
        Ok(matrix)
    }

    /// Builds a matrix from nested rows; every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimensions {
                rows: nrows,
                columns: ncols,
            });
        }
        let mut data = zeroed_store(nrows, ncols)?;
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: row_idx,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data[row_idx * ncols..(row_idx + 1) * ncols].copy_from_slice(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut matrix = Self::new(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                matrix.data[row * cols + col] = f(row, col);
            }
        }
        matrix.reclassify();
        Ok(matrix)
    }

    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix.kind = MatrixKind::Identity;
        Ok(matrix)
    }

    /// The invalid sentinel: no store, zero dimensions.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Frees the store and resets the matrix to the invalid sentinel.
    /// Calling it again is a no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
        self.kind = MatrixKind::Invalid;
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.row_slice(row).to_vec()).collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// True when the matrix has a store of the advertised size, is not
    /// classified invalid and holds no NaN.
    pub fn is_valid(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && !self.data.is_empty()
            && self.data.len() == self.rows * self.cols
            && self.kind != MatrixKind::Invalid
            && self.data.iter().all(|v| !v.is_nan())
    }

    /// Recomputes `kind` from the cells. NaN wins over every other class,
    /// then identity, then zero.
    pub fn reclassify(&mut self) {
        self.kind = self.classify();
    }

    fn classify(&self) -> MatrixKind {
        if self.data.is_empty() {
            return MatrixKind::Invalid;
        }
        let mut identity = self.is_square();
        let mut zero = true;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = self.data[self.offset(row, col)];
                if value.is_nan() {
                    return MatrixKind::Invalid;
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                identity = identity && approx_eq(value, expected);
                zero = zero && approx_eq(value, 0.0);
            }
        }
        if identity {
            MatrixKind::Identity
        } else if zero {
            MatrixKind::Zero
        } else {
            MatrixKind::Generic
        }
    }

    /// Maps a freshly computed result to an error when it classified as invalid.
    pub(crate) fn into_checked(self) -> Result<Self, MatrixError> {
        match self.kind {
            MatrixKind::Invalid => Err(MatrixError::NotANumber),
            _ => Ok(self),
        }
    }
}

/// Entry gate for every operation: `a` must be valid and so must `b` when given.
pub fn validate_pair(a: &Matrix, b: Option<&Matrix>) -> Result<(), MatrixError> {
    if !a.is_valid() || b.map_or(false, |b| !b.is_valid()) {
        log::trace!("rejecting operand pair: {:?} / {:?}", a.shape(), b.map(Matrix::shape));
        return Err(MatrixError::OperandInvalid);
    }
    Ok(())
}

fn zeroed_store(rows: usize, cols: usize) -> Result<Vec<f64>, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimensions { rows, columns: cols });
    }
    let alloc_err = MatrixError::AllocationFailure { rows, columns: cols };
    let len = rows.checked_mul(cols).ok_or_else(|| alloc_err.clone())?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| alloc_err)?;
    data.resize(len, 0.0);
    Ok(data)
}

/// Folds an operation outcome into the sentinel form: any error becomes
/// [`Matrix::invalid`].
pub trait MatrixResultExt {
    fn or_invalid(self) -> Matrix;
}

impl MatrixResultExt for Result<Matrix, MatrixError> {
    fn or_invalid(self) -> Matrix {
        self.unwrap_or_else(|err| {
            log::debug!("operation failed, returning invalid matrix: {}", err);
            Matrix::invalid()
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "[]");
        }
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
