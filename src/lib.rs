/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-shape `f64` matrices, 1x1 through 4x4, with shape-checked algebra.
//!
//! Every shape is an instance of the one generic type [`Matrix`], written
//! columns first: [`Matrix1x3`] is `Matrix<1, 3>`, one column and three rows.
//!
//! ```
//! use fixmat::{Matrix1x3, Matrix2x1, Matrix2x3, Matrix3x1};
//!
//! let a = Matrix1x3::from_rows([[2.0], [3.0], [5.0]]);
//!
//! // transpose flips the shape
//! let t: Matrix3x1 = a.transpose();
//! assert_eq!(t, Matrix3x1::from_rows([[2.0, 3.0, 5.0]]));
//!
//! // (1 column x 3 rows) * (2 columns x 1 row) = (2 columns x 3 rows)
//! let b = Matrix2x1::from_rows([[7.0, 11.0]]);
//! let ab: Matrix2x3 = &a * &b;
//! assert_eq!(ab.into_array(), [[14.0, 22.0], [21.0, 33.0], [35.0, 55.0]]);
//!
//! // equality is within fixmat::EPSILON
//! assert_eq!(a * 0.1 * 10.0, a);
//! ```
//!
//! Shape errors are compile errors.  Multiplication needs the left operand's
//! column count to match the right operand's row count:
//!
//! ```compile_fail
//! use fixmat::Matrix1x3;
//!
//! let a = Matrix1x3::splat(1.0);
//! let _ = a * a;
//! ```
//!
//! Addition needs identical shapes:
//!
//! ```compile_fail
//! use fixmat::{Matrix1x3, Matrix3x1};
//!
//! let _ = Matrix1x3::splat(1.0) + Matrix3x1::splat(1.0);
//! ```
//!
//! And the family stops at four in either direction:
//!
//! ```compile_fail
//! use fixmat::Matrix;
//!
//! let _ = Matrix::<5, 5>::splat(0.0);
//! ```
//!
//! Indexing is the one fallible operation:
//!
//! ```
//! use fixmat::{Axis, Matrix1x3, OutOfRange};
//!
//! let mut a = Matrix1x3::ZERO;
//! a.set(0, 2, 4.0)?;
//! assert_eq!(a.get(0, 2)?, 4.0);
//! assert_eq!(a.get(1, 0), Err(OutOfRange { axis: Axis::Col, len: 1, value: 1 }));
//! # Ok::<(), OutOfRange>(())
//! ```

pub use fixmat_array_types::*;
pub use fixmat_tolerance::{are_equal, not_equal, EPSILON};
pub use fixmat_tolerance::{assert_close, debug_assert_close, CheckClose, CheckCloseError, Tolerances};
