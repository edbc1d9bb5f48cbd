use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the arithmetic and algebra operations: scalar scaling
/// rejects NaN factors, the cofactor sign needs negation, and the
/// inverse divides by the determinant. Also supplies the absolute
/// tolerance used by [`Matrix::approx_eq`](crate::Matrix::approx_eq).
///
/// ```
/// use minoris::FloatScalar;
/// assert_eq!(f64::tolerance(), 1e-7);
/// ```
pub trait FloatScalar: Scalar + Float {
    /// Default absolute comparison tolerance for this element type.
    ///
    /// Two cells `a`, `b` compare equal when `|a - b| <= tolerance()`.
    /// The tolerance is absolute, not relative.
    fn tolerance() -> Self;
}

/// Concrete impls for real floats. `f32` gets a coarser default since
/// `1e-7` sits at its machine epsilon.
macro_rules! impl_float_scalar {
    ($($t:ty => $tol:expr),* $(,)?) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn tolerance() -> $t {
                    $tol
                }
            }
        )*
    };
}

impl_float_scalar!(f32 => 1e-5, f64 => 1e-7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerances() {
        assert_eq!(f64::tolerance(), 1e-7);
        assert_eq!(f32::tolerance(), 1e-5);
    }

    #[test]
    fn scalar_is_blanket() {
        fn takes_scalar<T: Scalar>(x: T) -> T {
            x + T::one()
        }
        assert_eq!(takes_scalar(1.0_f64), 2.0);
        assert_eq!(takes_scalar(1_i32), 2);
    }
}
