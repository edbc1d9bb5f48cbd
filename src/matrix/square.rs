use crate::error::MatrixError;
use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// The `(n-1) x (n-1)` submatrix obtained by deleting `row` and `col`.
    ///
    /// Cells keep their relative order. Panics if the matrix is not
    /// square, is smaller than 2x2, or the indices are out of range; the
    /// checked callers ([`Matrix::determinant`], [`Matrix::cofactors`])
    /// validate before reaching here.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// ]);
    /// let m = a.minor(1, 1);
    /// assert_eq!(m, Matrix::from_rows(2, 2, &[1.0, 3.0, 7.0, 9.0]));
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(self.is_square(), "minor requires a square matrix");
        let n = self.rows;
        assert!(n > 1, "a 1x1 matrix has no minors");
        assert!(
            row < n && col < n,
            "minor ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            n,
            n,
        );
        Matrix::from_fn(n - 1, n - 1, |i, j| {
            let src_i = if i < row { i } else { i + 1 };
            let src_j = if j < col { j } else { j + 1 };
            self.data[src_i * n + src_j]
        })
    }

    /// Determinant by recursive Laplace expansion along the first row.
    ///
    /// The matrix must be well-formed ([`MatrixError::Invalid`]) and
    /// square ([`MatrixError::ShapeMismatch`]). A 1x1 determinant is the
    /// single cell value; for `n > 1` the expansion sums
    /// `sign * a[0][i] * det(minor(0, i))` over the first row, with the
    /// sign alternating `+, -, +, ...` from column 0.
    ///
    /// Cost grows factorially with the matrix size. That is inherent to
    /// cofactor expansion and acceptable for the small matrices this
    /// crate targets; there is no pivoting fallback for larger inputs.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     6.0_f64, 1.0, 1.0,
    ///     4.0, -2.0, 5.0,
    ///     2.0, 8.0, 7.0,
    /// ]);
    /// assert_eq!(a.determinant().unwrap(), -306.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.check_square()?;
        Ok(self.det_expand())
    }

    /// Expansion recursion. Shape is already validated; every minor built
    /// here is dropped before the frame returns.
    fn det_expand(&self) -> T {
        let n = self.rows;
        if n == 1 {
            return self.data[0];
        }
        let mut det = T::zero();
        let mut sign = T::one();
        for col in 0..n {
            let minor = self.minor(0, col);
            det = det + sign * self.data[col] * minor.det_expand();
            sign = -sign;
        }
        det
    }

    /// Matrix of cofactors: `result[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The sign comes from the integer parity of `i + j`, never from a
    /// floating-point power. A 1x1 input yields `[[1]]`: the cofactor of
    /// the sole cell is 1 by convention, not its determinant.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 2.0, 3.0,
    ///     0.0, 4.0, 2.0,
    ///     5.0, 2.0, 1.0,
    /// ]);
    /// let c = a.cofactors().unwrap();
    /// assert_eq!(c, Matrix::from_rows(3, 3, &[
    ///     0.0, 10.0, -20.0,
    ///     4.0, -14.0, 8.0,
    ///     -8.0, -2.0, 4.0,
    /// ]));
    /// ```
    pub fn cofactors(&self) -> Result<Self, MatrixError> {
        self.check_square()?;
        let n = self.rows;
        if n == 1 {
            return Ok(Matrix::from_rows(1, 1, &[T::one()]));
        }
        Ok(Matrix::from_fn(n, n, |i, j| {
            let det = self.minor(i, j).det_expand();
            if (i + j) % 2 == 0 {
                det
            } else {
                -det
            }
        }))
    }

    /// Inverse via the adjugate: `A^-1 = adj(A) / det(A)`.
    ///
    /// Fails with [`MatrixError::Invalid`] on a malformed operand,
    /// [`MatrixError::ShapeMismatch`] on a non-square one, and
    /// [`MatrixError::Computation`] when the determinant is exactly zero
    /// (singular matrix). The determinant comparison is exact, not
    /// tolerance-based: a nearly-singular matrix inverts, with the usual
    /// loss of accuracy.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let inv = a.inverse().unwrap();
    /// assert!((&a * &inv).approx_eq(&Matrix::identity(2)));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.check_well_formed()?;
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatrixError::Computation);
        }
        let adjugate = self.cofactors()?.transpose();
        Ok(adjugate / det)
    }
}
