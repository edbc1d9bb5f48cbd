//! Failure taxonomy for checked matrix operations.

/// Error returned by every checked (`try_*` / `Result`) matrix operation.
///
/// The three kinds are mutually exclusive for any single call: an
/// operation reports the first failure it observes and returns
/// immediately. Nothing substitutes a default value.
///
/// ```
/// use minoris::{Matrix, MatrixError};
///
/// let a = Matrix::<f64>::zeros(2, 3);
/// let b = Matrix::<f64>::zeros(2, 2);
/// assert_eq!(a.try_add(&b).unwrap_err(), MatrixError::ShapeMismatch);
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Computation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// An operand is malformed: a zero dimension, or storage inconsistent
    /// with the declared shape.
    Invalid,
    /// All operands are well-formed but their dimensions are incompatible
    /// for the requested operation (unequal shapes for elementwise
    /// arithmetic, inner-dimension mismatch for the matrix product,
    /// non-square input for the determinant family).
    ShapeMismatch,
    /// Operands are well-formed and shape-compatible, but the result is
    /// mathematically undefined (NaN scale factor, zero determinant in
    /// the inverse).
    Computation,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Invalid => write!(f, "matrix operand is malformed"),
            MatrixError::ShapeMismatch => write!(f, "matrix shapes are incompatible"),
            MatrixError::Computation => write!(f, "operation has no defined result"),
        }
    }
}
