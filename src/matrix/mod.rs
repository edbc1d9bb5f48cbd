pub mod aliases;
mod ops;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::Scalar;

/// Dense matrix with runtime dimensions.
///
/// Row-major flat `Vec<T>` storage: cell `(i, j)` lives at
/// `i * cols + j`. Dimensions are fixed at construction; operations that
/// change shape (transpose, multiply, cofactors, inverse) return a new
/// matrix and leave their inputs untouched.
///
/// Constructors are total: a matrix with a zero dimension can be built,
/// but every checked operation rejects it with [`MatrixError::Invalid`].
/// See [`Matrix::is_well_formed`].
///
/// # Examples
///
/// ```
/// use minoris::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.cols(), 2);
///
/// let id = Matrix::<f64>::identity(3);
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix with every cell zero.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// assert_eq!(id[(2, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != rows * cols`.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(rows: usize, cols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            rows * cols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            rows,
            cols,
        );
        Self {
            data: row_major.to_vec(),
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each cell.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix can be operated on.
    ///
    /// A matrix is well-formed when both dimensions are at least 1 and
    /// its storage holds exactly `rows * cols` cells. Checked operations
    /// reject anything else with [`MatrixError::Invalid`].
    ///
    /// ```
    /// use minoris::Matrix;
    /// assert!(Matrix::<f64>::zeros(2, 2).is_well_formed());
    /// assert!(!Matrix::<f64>::zeros(0, 4).is_well_formed());
    /// ```
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.rows >= 1 && self.cols >= 1 && self.data.len() == self.rows * self.cols
    }

    /// The cells as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols,
        );
        row * self.cols + col
    }
}

// ── Shape checks ────────────────────────────────────────────────────
//
// Every checked operation funnels through these. Individual operand
// validity is always established before shapes are compared, so a
// malformed operand reports Invalid rather than ShapeMismatch.

impl<T> Matrix<T> {
    pub(crate) fn check_well_formed(&self) -> Result<(), MatrixError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(MatrixError::Invalid)
        }
    }

    pub(crate) fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_well_formed()?;
        rhs.check_well_formed()?;
        if self.rows == rhs.rows && self.cols == rhs.cols {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch)
        }
    }

    pub(crate) fn check_mul_compatible(&self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_well_formed()?;
        rhs.check_well_formed()?;
        if self.cols == rhs.rows {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch)
        }
    }

    pub(crate) fn check_square(&self) -> Result<(), MatrixError> {
        self.check_well_formed()?;
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch)
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let i = self.offset(row, col);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn identity() {
        let m = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        // (0, 5) on a 2x3 matrix must not alias a cell of a later row.
        let m = Matrix::<f64>::zeros(2, 3);
        let _ = m[(0, 5)];
    }

    #[test]
    fn is_square() {
        assert!(Matrix::<f64>::zeros(3, 3).is_square());
        assert!(!Matrix::<f64>::zeros(2, 3).is_square());
    }

    #[test]
    fn well_formed() {
        assert!(Matrix::<f64>::zeros(1, 1).is_well_formed());
        assert!(!Matrix::<f64>::zeros(0, 3).is_well_formed());
        assert!(!Matrix::<f64>::zeros(3, 0).is_well_formed());
        assert!(!Matrix::<f64>::zeros(0, 0).is_well_formed());
    }

    #[test]
    fn shape_check_precedence() {
        // A malformed operand reports Invalid even when shapes also differ.
        let bad = Matrix::<f64>::zeros(0, 2);
        let good = Matrix::<f64>::zeros(3, 3);
        assert_eq!(bad.check_same_shape(&good), Err(MatrixError::Invalid));
        assert_eq!(good.check_same_shape(&bad), Err(MatrixError::Invalid));

        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(good.check_same_shape(&a), Err(MatrixError::ShapeMismatch));
        assert_eq!(good.check_same_shape(&good), Ok(()));
    }

    #[test]
    fn clone_eq() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
