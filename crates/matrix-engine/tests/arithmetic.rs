//! Integration tests for comparison, sum/difference, scaling, products and transpose.

use matrix_engine::{Matrix, MatrixError, MatrixKind, MatrixResultExt};

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).expect("failed to build test matrix")
}

/// 1..=rows*cols laid out row by row.
fn counting(rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |r, c| (r * cols + c + 1) as f64).unwrap()
}

// ---------------------------------------------------------------------------
// equals
// ---------------------------------------------------------------------------

#[test]
fn equals_identical_and_different() {
    let a = m(vec![vec![1.3455, 4.2, 3.4334], vec![2.33, 5.345, 6.1]]);
    let b = a.clone();
    let c = m(vec![vec![1.345, 4.2, 3.4334], vec![2.33, 5.345, 6.1]]);
    let d = m(vec![vec![1.35, 4.2, 3.44]]);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    assert!(!a.equals(&d));
}

#[test]
fn equals_uses_strict_tolerance() {
    let a = m(vec![vec![2.0]]);
    assert!(a.equals(&m(vec![vec![2.000000001]])));
    assert!(a.equals(&m(vec![vec![2.00000002]])));
    assert!(!a.equals(&m(vec![vec![2.0000002]])));
    assert!(!a.equals(&m(vec![vec![2.0], vec![0.0]])));
}

#[test]
fn equals_ignores_kind() {
    let zero = m(vec![vec![9e-8]]);
    let generic = m(vec![vec![1.1e-7]]);
    assert_eq!(zero.kind(), MatrixKind::Zero);
    assert_eq!(generic.kind(), MatrixKind::Generic);
    assert!(zero.equals(&generic));

    let id = Matrix::identity(2).unwrap();
    let near = m(vec![vec![1.00000001, 0.0], vec![0.0, 1.0]]);
    assert!(id.equals(&near));
}

#[test]
fn equals_is_false_for_invalid_operands() {
    let a = Matrix::identity(2).unwrap();
    assert!(!a.equals(&Matrix::invalid()));
    assert!(!Matrix::invalid().equals(&Matrix::invalid()));
}

// ---------------------------------------------------------------------------
// add / subtract
// ---------------------------------------------------------------------------

#[test]
fn add_matches_expected() {
    let a = counting(3, 3);
    let b = m(vec![vec![9.0, 8.0, 7.0], vec![6.0, 5.0, 4.0], vec![3.0, 2.0, 1.0]]);
    let sum = a.add(&b).unwrap();
    assert!(sum.equals(&Matrix::from_fn(3, 3, |_, _| 10.0).unwrap()));
    assert_eq!(sum.kind(), MatrixKind::Generic);
}

#[test]
fn add_identity_and_zero_stays_identity() {
    let id = Matrix::identity(3).unwrap();
    let zero = Matrix::new(3, 3).unwrap();
    assert_eq!(id.add(&zero).unwrap().kind(), MatrixKind::Identity);
}

#[test]
fn add_mismatched_shapes() {
    let a = counting(2, 3);
    let b = counting(3, 2);
    assert_eq!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch { left: (2, 3), right: (3, 2) })
    );
    assert_eq!(a.subtract(&b).or_invalid().kind(), MatrixKind::Invalid);
}

#[test]
fn add_rejects_invalid_operand() {
    let a = counting(2, 2);
    assert_eq!(a.add(&Matrix::invalid()), Err(MatrixError::OperandInvalid));
    let nan = m(vec![vec![f64::NAN, 1.0], vec![1.0, 1.0]]);
    assert_eq!(nan.add(&a), Err(MatrixError::OperandInvalid));
}

#[test]
fn subtract_self_is_zero() {
    let a = m(vec![vec![0.4244828, 0.2825884], vec![-1.2964430, 2.6818946]]);
    let diff = a.subtract(&a).unwrap();
    assert_eq!(diff.kind(), MatrixKind::Zero);
}

#[test]
fn subtract_matches_expected() {
    let a = counting(2, 2);
    let b = m(vec![vec![4.0, 3.0], vec![2.0, 1.0]]);
    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff.to_rows(), vec![vec![-3.0, -1.0], vec![1.0, 3.0]]);
}

#[test]
fn operator_sugar_delegates() {
    let a = counting(2, 2);
    let b = Matrix::identity(2).unwrap();
    assert!((&a + &b).unwrap().equals(&a.add(&b).unwrap()));
    assert!((&a - &b).unwrap().equals(&a.subtract(&b).unwrap()));
    assert!((&a * &b).unwrap().equals(&a));
    assert!((&a * 2.0).unwrap().equals(&a.scale_by(2.0).unwrap()));
}

// ---------------------------------------------------------------------------
// scale_by
// ---------------------------------------------------------------------------

#[test]
fn scale_by_multiplies_every_cell() {
    let a = m(vec![
        vec![0.4244828, 0.2825884, -2.5368773],
        vec![-1.2964430, 2.6818946, 2.6017167],
    ]);
    let k = 2.528973;
    let expected = Matrix::from_fn(2, 3, |r, c| a[(r, c)] * k).unwrap();
    assert!(a.scale_by(k).unwrap().equals(&expected));
}

#[test]
fn scale_by_zero_is_zero_kind() {
    let a = counting(2, 2);
    assert_eq!(a.scale_by(0.0).unwrap().kind(), MatrixKind::Zero);
}

#[test]
fn scale_by_nan_is_rejected_after_classification() {
    let a = counting(3, 3);
    assert_eq!(a.scale_by(f64::NAN), Err(MatrixError::NotANumber));
}

#[test]
fn scale_by_invalid_operand() {
    assert_eq!(Matrix::invalid().scale_by(2.0), Err(MatrixError::OperandInvalid));
}

// ---------------------------------------------------------------------------
// multiply
// ---------------------------------------------------------------------------

#[test]
fn multiply_square() {
    let a = counting(3, 3);
    let b = Matrix::from_fn(3, 3, |r, c| (9 - (r * 3 + c)) as f64).unwrap();
    let expected = m(vec![
        vec![30.0, 24.0, 18.0],
        vec![84.0, 69.0, 54.0],
        vec![138.0, 114.0, 90.0],
    ]);
    assert!(a.multiply(&b).unwrap().equals(&expected));
}

#[test]
fn multiply_rectangular() {
    let a = counting(2, 3);
    let b = m(vec![vec![3.0], vec![2.0], vec![1.0]]);
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.shape(), (2, 1));
    assert!(product.equals(&m(vec![vec![10.0], vec![28.0]])));
}

#[test]
fn multiply_fractional() {
    let a = m(vec![vec![0.4800344, -2.0621914], vec![2.7496997, 2.2021934]]);
    let b = m(vec![vec![-1.7362543, 2.7740213], vec![2.9751503, -0.6493745]]);
    let expected = m(vec![
        vec![-6.96879115351534, 2.67076015961202],
        vec![1.77767842683431, 6.19767729837531],
    ]);
    assert!(a.multiply(&b).unwrap().equals(&expected));
}

#[test]
fn multiply_inner_dimension_mismatch() {
    let a = counting(3, 1);
    let b = counting(3, 3);
    assert_eq!(
        a.multiply(&b),
        Err(MatrixError::DimensionMismatch { left: (3, 1), right: (3, 3) })
    );
}

#[test]
fn multiply_with_invalid_operand() {
    let b = counting(3, 3);
    assert_eq!(Matrix::invalid().multiply(&b), Err(MatrixError::OperandInvalid));
}

// ---------------------------------------------------------------------------
// transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_square() {
    let a = counting(3, 3);
    let expected = m(vec![vec![1.0, 4.0, 7.0], vec![2.0, 5.0, 8.0], vec![3.0, 6.0, 9.0]]);
    assert!(a.transpose().unwrap().equals(&expected));
}

#[test]
fn transpose_column_vector() {
    let a = counting(3, 1);
    let t = a.transpose().unwrap();
    assert_eq!(t.shape(), (1, 3));
    assert_eq!(t.row_slice(0), &[1.0, 2.0, 3.0]);
}

#[test]
fn transpose_invalid_operand() {
    assert_eq!(Matrix::invalid().transpose(), Err(MatrixError::OperandInvalid));
}
