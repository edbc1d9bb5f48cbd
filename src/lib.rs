//! # minoris
//!
//! Dense matrix arithmetic over floating-point elements, no-std compatible.
//! Small-matrix algebra in the classical style: elementwise operations,
//! the naive matrix product, transpose, recursive cofactor-expansion
//! determinants, cofactor matrices, and inverses via the adjugate.
//!
//! ## Quick start
//!
//! ```
//! use minoris::Matrix;
//!
//! let a = Matrix::from_rows(3, 3, &[
//!     3.0_f64, 27.0, 18.0,
//!     0.0, 18.0, 15.0,
//!     24.0, 9.0, 9.0,
//! ]);
//! let inv = a.inverse().unwrap();
//! assert!((&a * &inv).approx_eq(&Matrix::identity(3)));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix<T>`] with runtime dimensions and row-major
//!   `Vec<T>` storage. Constructors, indexing, operator sugar, and the
//!   checked `try_*` arithmetic API. Square-matrix algebra
//!   ([`Matrix::determinant`], [`Matrix::cofactors`], [`Matrix::inverse`])
//!   uses recursive Laplace expansion — exponential in the matrix size,
//!   intended for small matrices only.
//!
//! - [`error`] — [`MatrixError`], the three-kind failure taxonomy shared
//!   by every checked operation: a malformed operand, incompatible
//!   shapes, or a mathematically undefined result.
//!
//! - [`traits`] — element trait tier:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats; required by the algebra and by
//!     tolerance-based comparison
//!
//! ## Checked vs. operator API
//!
//! The `try_*` methods return `Result` and never panic on expected bad
//! input; the operator impls (`+`, `-`, `*`, `/`) are panicking sugar
//! over the same kernels, matching the convention of fixed-size matrix
//! libraries. Use the checked API at trust boundaries.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via the system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use matrix::aliases::{Matrixf32, Matrixf64};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
