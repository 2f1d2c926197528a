/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-shape matrices of `f64`, from 1x1 through 4x4.
//!
//! Shapes are written columns first: a [`Matrix1x3`] has one column and three
//! rows.  Storage is an array of rows, so the elements are laid out in
//! row-major order and `(col, row)` sits at flat offset `row * C + col`.
//!
//! Everything about shapes is checked at compile time.  Adding or
//! subtracting matrices of different shapes, or multiplying a pair whose
//! inner dimensions disagree, is a type error rather than a panic.
//! A `Matrix<C, R>` times a `Matrix<K, C>` is a `Matrix<K, R>`, and the
//! transpose of a `Matrix<C, R>` is a `Matrix<R, C>`.
//!
//! ```
//! use fixmat_array_types::{Matrix1x3, Matrix2x1, Matrix2x3};
//!
//! let column = Matrix1x3::from_rows([[2.0], [3.0], [5.0]]);
//! let row = Matrix2x1::from_rows([[7.0, 11.0]]);
//!
//! let product: Matrix2x3 = column * row;
//! assert_eq!(product.get(1, 2), Ok(55.0));
//! ```

#[macro_use]
mod macros;

mod shape;
mod types;
mod methods;
mod ops;
mod algebra;
mod display;
mod error;

pub use crate::shape::{Dims, Supported};
pub use crate::types::*;
pub use crate::algebra::{Transpose, TransposeT, ProductT};
pub use crate::error::{Axis, OutOfRange};
