use minoris::{Matrix, MatrixError};

// Fixture shared by several scenarios; each test builds its own copy.
const GRID_3X3: [f64; 9] = [
    0.15, 0.0, -3.64,
    8.53, -4.1321, 123.32,
    0.0, 12.5, -78.321,
];

fn grid() -> Matrix<f64> {
    Matrix::from_rows(3, 3, &GRID_3X3)
}

// ── Equality ─────────────────────────────────────────────────────────

#[test]
fn equality_is_reflexive() {
    let a = grid();
    assert!(a.approx_eq(&a));
}

#[test]
fn fresh_zero_matrices_are_equal() {
    let a = Matrix::<f64>::zeros(3, 3);
    let b = Matrix::<f64>::zeros(3, 3);
    assert!(a.approx_eq(&b));
}

#[test]
fn equality_rejects_shape_mismatch_quietly() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(3, 2);
    assert!(!a.approx_eq(&b));
}

// ── Elementwise round trips ──────────────────────────────────────────

#[test]
fn add_then_sub_returns_to_start() {
    let a = grid();
    let b = Matrix::from_fn(3, 3, |i, j| (i as f64) * 0.5 - (j as f64) * 1.25);
    let round_trip = a.try_add(&b).unwrap().try_sub(&b).unwrap();
    assert!(round_trip.approx_eq(&a));
}

#[test]
fn sum_of_matrix_with_itself_doubles_cells() {
    let a = grid();
    let s = a.try_add(&a).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(s[(i, j)], a[(i, j)] * 2.0);
        }
    }
}

#[test]
fn difference_of_matrix_with_itself_is_zero() {
    let a = grid();
    let d = a.try_sub(&a).unwrap();
    assert!(d.approx_eq(&Matrix::zeros(3, 3)));
}

// ── Scalar multiplication ────────────────────────────────────────────

#[test]
fn scale_by_3_69_matches_reference_grid() {
    let expected = Matrix::from_rows(3, 3, &[
        0.5535, 0.0, -13.4316,
        31.4757, -15.247449, 455.0508,
        0.0, 46.125, -289.00449,
    ]);
    let scaled = grid().try_scale(3.69).unwrap();
    assert!(scaled.approx_eq_within(&expected, 1e-6));
}

// ── Matrix product ───────────────────────────────────────────────────

#[test]
fn product_matches_reference_grid() {
    let b = Matrix::from_rows(3, 3, &[
        0.5535, 0.0, -13.4316,
        31.4757, -15.247449, 455.0508,
        0.0, 46.125, -289.00449,
    ]);
    let expected = Matrix::from_rows(3, 3, &[
        0.083025, -167.895, 1049.9616036,
        -125.33938497, 5751.1389840129, -37634.92066548,
        393.44625, -3803.1492375, 28323.25566129,
    ]);
    let product = grid().try_mul(&b).unwrap();
    assert!(product.approx_eq_within(&expected, 1e-6));
}

#[test]
fn product_is_associative_within_tolerance() {
    let a = Matrix::from_fn(2, 3, |i, j| (i * 3 + j + 1) as f64 * 0.75);
    let b = Matrix::from_fn(3, 4, |i, j| (i as f64) - (j as f64) * 1.5);
    let c = Matrix::from_fn(4, 2, |i, j| ((i + 1) * (j + 2)) as f64 / 3.0);

    let left = a.try_mul(&b).unwrap().try_mul(&c).unwrap();
    let right = a.try_mul(&b.try_mul(&c).unwrap()).unwrap();
    assert!(left.approx_eq(&right));
}

#[test]
fn incompatible_product_yields_shape_mismatch_and_no_result() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(2, 3);
    assert_eq!(a.try_mul(&b), Err(MatrixError::ShapeMismatch));
}

// ── Transpose ────────────────────────────────────────────────────────

#[test]
fn transpose_is_an_involution() {
    let a = grid();
    assert!(a.transpose().transpose().approx_eq(&a));
}

#[test]
fn transpose_mirrors_cells() {
    let a = grid();
    let t = a.transpose();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(t[(j, i)], a[(i, j)]);
        }
    }
}

// ── Determinant ──────────────────────────────────────────────────────

#[test]
fn determinant_of_1x1_is_the_cell() {
    let a = Matrix::from_rows(1, 1, &[21.125_f64]);
    assert_eq!(a.determinant().unwrap(), 21.125);
}

#[test]
fn determinant_of_linearly_dependent_5x5_is_zero() {
    // Every row is [0, 1, 2, 3, 4].
    let a = Matrix::from_fn(5, 5, |_, j| j as f64);
    let det = a.determinant().unwrap();
    assert!(det.abs() <= 1e-6);
}

#[test]
fn determinant_rejects_rectangles() {
    let a = Matrix::<f64>::zeros(4, 3);
    assert_eq!(a.determinant(), Err(MatrixError::ShapeMismatch));
}

// ── Cofactors ────────────────────────────────────────────────────────

#[test]
fn cofactors_match_reference_grid_exactly() {
    let a = Matrix::from_rows(3, 3, &[
        1.0_f64, 2.0, 3.0,
        0.0, 4.0, 2.0,
        5.0, 2.0, 1.0,
    ]);
    let expected = Matrix::from_rows(3, 3, &[
        0.0, 10.0, -20.0,
        4.0, -14.0, 8.0,
        -8.0, -2.0, 4.0,
    ]);
    assert_eq!(a.cofactors().unwrap(), expected);
}

// ── Inverse ──────────────────────────────────────────────────────────

#[test]
fn inverse_matches_reference_grid() {
    let a = Matrix::from_rows(3, 3, &[
        3.0_f64, 27.0, 18.0,
        0.0, 18.0, 15.0,
        24.0, 9.0, 9.0,
    ]);
    let expected = Matrix::from_rows(3, 3, &[
        0.01333333333, -0.04, 0.04,
        0.1777777778, -0.2, -0.02222222222,
        -0.2133333333, 0.3066666667, 0.02666666667,
    ]);
    let inv = a.inverse().unwrap();
    assert!(inv.approx_eq_within(&expected, 1e-6));
}

#[test]
fn matrix_times_its_inverse_is_identity() {
    let a = Matrix::from_rows(3, 3, &[
        3.0_f64, 27.0, 18.0,
        0.0, 18.0, 15.0,
        24.0, 9.0, 9.0,
    ]);
    let inv = a.inverse().unwrap();
    let product = a.try_mul(&inv).unwrap();
    assert!(product.approx_eq(&Matrix::identity(3)));
}

#[test]
fn singular_inverse_is_a_computation_failure() {
    let a = Matrix::from_fn(3, 3, |_, j| j as f64 + 1.0);
    assert_eq!(a.inverse(), Err(MatrixError::Computation));
}

#[test]
fn inverse_of_1x1_zero_matrix_fails() {
    let z = Matrix::<f64>::zeros(1, 1);
    assert_eq!(z.inverse(), Err(MatrixError::Computation));
}

// ── Degenerate shapes ────────────────────────────────────────────────

#[test]
fn degenerate_matrices_are_rejected_everywhere() {
    for (r, c) in [(0usize, 3usize), (3, 0), (0, 0)] {
        let bad = Matrix::<f64>::zeros(r, c);
        let good = Matrix::<f64>::zeros(3, 3);
        assert!(!bad.is_well_formed());
        assert_eq!(bad.try_add(&good), Err(MatrixError::Invalid));
        assert_eq!(bad.try_sub(&good), Err(MatrixError::Invalid));
        assert_eq!(bad.try_scale(2.0), Err(MatrixError::Invalid));
        assert_eq!(bad.try_mul(&good), Err(MatrixError::Invalid));
        assert_eq!(bad.determinant(), Err(MatrixError::Invalid));
        assert_eq!(bad.cofactors(), Err(MatrixError::Invalid));
        assert_eq!(bad.inverse(), Err(MatrixError::Invalid));
        assert!(!bad.approx_eq(&good));
    }
}
