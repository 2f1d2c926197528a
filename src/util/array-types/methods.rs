/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::algebra::{Transpose, TransposeT};
use crate::error::{check_index, OutOfRange};
use crate::shape::{Dims, Supported};
use crate::types::*;

use num_traits::{One, Zero};

use std::ops::{Index, IndexMut};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<const C: usize, const R: usize> Matrix<C, R>
where Dims<C, R>: Supported,
{
    /// Number of columns.
    pub const COLUMNS: usize = C;

    /// Number of rows.
    pub const ROWS: usize = R;

    /// The matrix with every element equal to zero.
    pub const ZERO: Self = Matrix([[0.0; C]; R]);

    /// Construct a matrix from an array of rows.
    ///
    /// Note that the outer array is indexed by row, so `rows[r][c]` is the
    /// element at `(c, r)`.
    #[inline(always)]
    pub fn from_rows(rows: [[f64; C]; R]) -> Self
    { Matrix(rows) }

    /// Construct a matrix with every element set to `value`.
    #[inline(always)]
    pub fn splat(value: f64) -> Self
    { Matrix([[value; C]; R]) }

    /// Construct the zero matrix.
    ///
    /// This is the same as [`Matrix::ZERO`]; the function form is just easier
    /// to pass around.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::ZERO }

    /// Construct a matrix from a function of `(col, row)`.
    ///
    /// The function is called in row-major order.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> f64,
    {
        Matrix(std::array::from_fn(|row| {
            std::array::from_fn(|col| f(col, row))
        }))
    }

    /// Number of columns.  Same as [`Matrix::COLUMNS`].
    #[inline(always)]
    pub fn columns(&self) -> usize
    { C }

    /// Number of rows.  Same as [`Matrix::ROWS`].
    #[inline(always)]
    pub fn rows(&self) -> usize
    { R }

    /// The absolute tolerance used by `==`.
    #[inline(always)]
    pub fn epsilon(&self) -> f64
    { fixmat_tolerance::EPSILON }

    /// Read the element at `(col, row)`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Result<f64, OutOfRange> {
        check_index::<C, R>(col, row)?;
        Ok(self.0[row][col])
    }

    /// Borrow the element at `(col, row)` mutably.
    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> Result<&mut f64, OutOfRange> {
        check_index::<C, R>(col, row)?;
        Ok(&mut self.0[row][col])
    }

    /// Overwrite the element at `(col, row)`.
    ///
    /// The matrix is left untouched on error.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f64) -> Result<(), OutOfRange> {
        *self.get_mut(col, row)? = value;
        Ok(())
    }

    /// Iterate over the elements in row-major order.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, C>
    { self.into_iter() }

    /// Mutably iterate over the elements in row-major order.
    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, C>
    { self.into_iter() }

    /// Map each element of the matrix.
    #[inline]
    pub fn map<F>(self, mut f: F) -> Self
    where F: FnMut(f64) -> f64,
    { Self::from_fn(|col, row| f(self.0[row][col])) }

    /// Matrix transpose.
    #[inline(always)]
    pub fn transpose(&self) -> TransposeT<Self>
    where Self: Transpose,
    { Transpose::transpose(self) }

    /// Unwrap into a plain `[[f64; C]; R]` of rows.
    #[inline(always)]
    pub fn into_array(self) -> [[f64; C]; R]
    { self.0 }

    /// Borrow as a plain `&[[f64; C]; R]` of rows.
    #[inline(always)]
    pub fn as_array(&self) -> &[[f64; C]; R]
    { &self.0 }

    /// Borrow as a plain `&mut [[f64; C]; R]` of rows.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[f64; C]; R]
    { &mut self.0 }
}

// Square matrices
impl<const N: usize> Matrix<N, N>
where Dims<N, N>: Supported,
{
    /// Construct the identity matrix.
    #[inline]
    pub fn identity() -> Self
    { Self::from_fn(|col, row| if col == row { 1.0 } else { 0.0 }) }
}

// -------------------------- END PUBLIC API ---------------------------------

// Indexing by `(col, row)`, panicking like slice indexing does.
impl<const C: usize, const R: usize> Index<(usize, usize)> for Matrix<C, R>
where Dims<C, R>: Supported,
{
    type Output = f64;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &f64 {
        if let Err(e) = check_index::<C, R>(col, row) {
            panic!("{}", e);
        }
        &self.0[row][col]
    }
}

impl<const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut f64 {
        match self.get_mut(col, row) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

// ---------------------------------------------------------------------------

// NOTE: `is_zero` goes through the tolerant `==`, for consistency with how
//       every other comparison on matrices behaves.
impl<const C: usize, const R: usize> Zero for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline(always)]
    fn zero() -> Self
    { Self::ZERO }

    #[inline]
    fn is_zero(&self) -> bool
    { *self == Self::ZERO }
}

impl<const N: usize> One for Matrix<N, N>
where Dims<N, N>: Supported,
{
    #[inline(always)]
    fn one() -> Self
    { Self::identity() }
}

// ---------------------------------------------------------------------------
