/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::shape::{Dims, Supported};

use fixmat_tolerance::{CheckClose, CheckCloseError, Tolerances};

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------

/// A dense matrix of `f64` with `C` columns and `R` rows.
///
/// The matrix is stored as an array of `R` rows, so the flat (row-major)
/// offset of the element at `(col, row)` is `row * C + col`.  Methods that
/// take a pair of indices always take the column first.
///
/// Only the shapes from 1x1 through 4x4 exist; see [`Supported`].
///
/// # Equality and hashing
///
/// `==` compares elements with [`fixmat_tolerance::are_equal`], so it is
/// not transitive and there is no `Eq` impl.  `Hash`, on the other hand,
/// hashes the exact bit patterns of the elements.  Two matrices that compare
/// equal may therefore hash differently (`0.0` and `-0.0` are the simplest
/// example).  Don't use matrices as keys where that matters.
#[derive(Copy, Clone)]
pub struct Matrix<const C: usize, const R: usize>(pub [[f64; C]; R])
where Dims<C, R>: Supported;

/// A matrix with 1 column and 1 row.
pub type Matrix1x1 = Matrix<1, 1>;
/// A matrix with 1 column and 2 rows.
pub type Matrix1x2 = Matrix<1, 2>;
/// A matrix with 1 column and 3 rows.
pub type Matrix1x3 = Matrix<1, 3>;
/// A matrix with 1 column and 4 rows.
pub type Matrix1x4 = Matrix<1, 4>;
/// A matrix with 2 columns and 1 row.
pub type Matrix2x1 = Matrix<2, 1>;
/// A square 2x2 matrix.
pub type Matrix2x2 = Matrix<2, 2>;
/// A matrix with 2 columns and 3 rows.
pub type Matrix2x3 = Matrix<2, 3>;
/// A matrix with 2 columns and 4 rows.
pub type Matrix2x4 = Matrix<2, 4>;
/// A matrix with 3 columns and 1 row.
pub type Matrix3x1 = Matrix<3, 1>;
/// A matrix with 3 columns and 2 rows.
pub type Matrix3x2 = Matrix<3, 2>;
/// A square 3x3 matrix.
pub type Matrix3x3 = Matrix<3, 3>;
/// A matrix with 3 columns and 4 rows.
pub type Matrix3x4 = Matrix<3, 4>;
/// A matrix with 4 columns and 1 row.
pub type Matrix4x1 = Matrix<4, 1>;
/// A matrix with 4 columns and 2 rows.
pub type Matrix4x2 = Matrix<4, 2>;
/// A matrix with 4 columns and 3 rows.
pub type Matrix4x3 = Matrix<4, 3>;
/// A square 4x4 matrix.
pub type Matrix4x4 = Matrix<4, 4>;

// ---------------------------------------------------------------------------
// Iteration is over the flattened elements, in row-major order.

pub type Iter<'a, const C: usize> = std::iter::Flatten<std::slice::Iter<'a, [f64; C]>>;
pub type IterMut<'a, const C: usize> = std::iter::Flatten<std::slice::IterMut<'a, [f64; C]>>;

impl<'a, const C: usize, const R: usize> IntoIterator for &'a Matrix<C, R>
where Dims<C, R>: Supported,
{
    type Item = &'a f64;
    type IntoIter = Iter<'a, C>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter().flatten() }
}

impl<'a, const C: usize, const R: usize> IntoIterator for &'a mut Matrix<C, R>
where Dims<C, R>: Supported,
{
    type Item = &'a mut f64;
    type IntoIter = IterMut<'a, C>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut().flatten() }
}

// ---------------------------------------------------------------------------

impl<const C: usize, const R: usize> PartialEq for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip(other)
            .all(|(&a, &b)| fixmat_tolerance::are_equal(a, b))
    }
}

// NOTE: Deliberately exact, unlike `eq`.  See the type-level docs.
impl<const C: usize, const R: usize> Hash for Matrix<C, R>
where Dims<C, R>: Supported,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        for x in self {
            x.to_bits().hash(state);
        }
    }
}

impl<const C: usize, const R: usize> Default for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline(always)]
    fn default() -> Self
    { Self::ZERO }
}

impl<const C: usize, const R: usize> CheckClose for Matrix<C, R>
where Dims<C, R>: Supported,
{
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

// forward the debug impl without a surrounding "Matrix(...)", so that the
// output is a plain nested list of rows (valid JSON and Python)
impl<const C: usize, const R: usize> fmt::Debug for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------

impl<const C: usize, const R: usize> From<[[f64; C]; R]> for Matrix<C, R>
where Dims<C, R>: Supported,
{
    #[inline(always)]
    fn from(rows: [[f64; C]; R]) -> Self
    { Matrix(rows) }
}

impl<const C: usize, const R: usize> From<Matrix<C, R>> for [[f64; C]; R]
where Dims<C, R>: Supported,
{
    #[inline(always)]
    fn from(matrix: Matrix<C, R>) -> Self
    { matrix.0 }
}

// ---------------------------------------------------------------------------
