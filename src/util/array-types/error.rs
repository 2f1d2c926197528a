/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Fail;
use std::fmt;

/// Which index of a `(col, row)` pair was at fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Col,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Col => write!(f, "col"),
            Axis::Row => write!(f, "row"),
        }
    }
}

/// Error from indexing a matrix outside of its shape.
///
/// `value` is the raw index the caller supplied and `len` is the extent of
/// the matrix along `axis`, so the valid range is `0..len`.
#[derive(Debug, Fail, Copy, Clone, PartialEq, Eq)]
#[fail(display = "argument `{}` out of range: expected a value in 0..{}, got {}", axis, len, value)]
pub struct OutOfRange {
    pub axis: Axis,
    pub len: usize,
    pub value: usize,
}

/// Validate a `(col, row)` pair against a `C x R` shape.
///
/// The column is checked first.
#[inline]
pub(crate) fn check_index<const C: usize, const R: usize>(col: usize, row: usize) -> Result<(), OutOfRange> {
    if col >= C {
        return Err(OutOfRange { axis: Axis::Col, len: C, value: col });
    }
    if row >= R {
        return Err(OutOfRange { axis: Axis::Row, len: R, value: row });
    }
    Ok(())
}
