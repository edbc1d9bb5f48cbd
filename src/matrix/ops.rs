use alloc::vec;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum. Both operands must be well-formed and share the
    /// same shape.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    /// let c = a.try_add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 6.0);
    /// assert_eq!(c[(1, 1)], 12.0);
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference. Both operands must be well-formed and
    /// share the same shape.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[5.0_f64, 6.0, 7.0, 8.0]);
    /// let b = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let c = a.try_sub(&b).unwrap();
    /// assert_eq!(c[(1, 1)], 4.0);
    /// ```
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product: `(M x N) * (N x P) -> (M x P)`.
    ///
    /// Both operands must be well-formed, and the left operand's column
    /// count must equal the right operand's row count. The kernel is the
    /// plain triple loop; cost is `O(M * N * P)`.
    ///
    /// ```
    /// use minoris::{Matrix, MatrixError};
    /// let a = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c.rows(), 2);
    /// assert_eq!(c.cols(), 2);
    /// assert_eq!(c[(0, 0)], 58.0);
    ///
    /// assert_eq!(a.try_mul(&a).unwrap_err(), MatrixError::ShapeMismatch);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_mul_compatible(rhs)?;
        Ok(self.mul_kernel(rhs))
    }

    /// Transpose: `(M x N) -> (N x M)` with `result[j][i] = self[i][j]`.
    ///
    /// A pure index remap; never fails.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.cols(), 2);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i])
    }

    /// Shared element-wise kernel. Callers have already matched shapes.
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Shared product kernel. Callers have already matched the inner
    /// dimension.
    fn mul_kernel(&self, rhs: &Self) -> Self {
        let m = self.rows;
        let n = self.cols;
        let p = rhs.cols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Matrix {
            data,
            rows: m,
            cols: p,
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Multiply every cell by `factor`.
    ///
    /// A NaN factor is rejected with [`MatrixError::Computation`] before
    /// the operand is examined; the `*` operator skips that guard and
    /// lets NaN propagate IEEE-style.
    ///
    /// ```
    /// use minoris::{Matrix, MatrixError};
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let b = a.try_scale(3.0).unwrap();
    /// assert_eq!(b[(1, 1)], 12.0);
    ///
    /// assert_eq!(a.try_scale(f64::NAN).unwrap_err(), MatrixError::Computation);
    /// ```
    pub fn try_scale(&self, factor: T) -> Result<Self, MatrixError> {
        if factor.is_nan() {
            return Err(MatrixError::Computation);
        }
        self.check_well_formed()?;
        Ok(self.map(|x| x * factor))
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "dimension mismatch: {}x{} + {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols,
        );
        self.zip_with(rhs, |a, b| a + b)
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "dimension mismatch: {}x{} - {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols,
        );
        self.zip_with(rhs, |a, b| a - b)
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map(|x| T::zero() - x)
    }
}

// ── Matrix multiplication: (M x N) * (N x P) -> (M x P) ─────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.cols, rhs.rows,
            "dimension mismatch: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols,
        );
        self.mul_kernel(rhs)
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Scalar division: matrix / scalar ────────────────────────────────

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}
