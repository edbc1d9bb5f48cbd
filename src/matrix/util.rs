use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::traits::FloatScalar;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every cell, producing a new matrix.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

// ── Tolerance-based comparison ──────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Cell-wise comparison within the element type's default absolute
    /// tolerance ([`FloatScalar::tolerance`], `1e-7` for `f64`).
    ///
    /// Returns `false` (never an error) when either operand is malformed
    /// or the shapes differ.
    ///
    /// ```
    /// use minoris::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0 + 1e-9]);
    /// assert!(a.approx_eq(&b));
    ///
    /// let c = Matrix::<f64>::zeros(2, 3);
    /// assert!(!a.approx_eq(&c));
    /// ```
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        self.approx_eq_within(rhs, T::tolerance())
    }

    /// Cell-wise comparison within an explicit absolute tolerance.
    ///
    /// The comparison is `|a - b| <= tol` per cell; a NaN cell on either
    /// side compares unequal.
    pub fn approx_eq_within(&self, rhs: &Self, tol: T) -> bool {
        if self.check_same_shape(rhs).is_err() {
            return false;
        }
        self.data
            .iter()
            .zip(rhs.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Measure column widths so cells line up.
        let mut widths: Vec<usize> = alloc::vec![0; self.cols];
        for j in 0..self.cols {
            for i in 0..self.rows {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..self.rows {
            write!(f, "│")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.len();
        Ok(())
    }
}
