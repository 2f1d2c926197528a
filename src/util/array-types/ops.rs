/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::shape::{Dims, Supported};
use crate::types::Matrix;

use std::ops::{Add, Sub, Neg, AddAssign, SubAssign};
use std::ops::{Mul, Div, MulAssign, DivAssign};

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

// NOTE: Both operands always have the same shape.  There is no runtime shape
//       check anywhere in this crate; `Matrix1x3 + Matrix3x1` simply has no
//       impl.
gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* const C: usize, const R: usize> Add<$($ref_b)* Matrix<C, R>> for $($ref_a)* Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<C, R>) -> Self::Output
            { Matrix::from_fn(|c, r| self.0[r][c] + other.0[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* const C: usize, const R: usize> Sub<$($ref_b)* Matrix<C, R>> for $($ref_a)* Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<C, R>) -> Self::Output
            { Matrix::from_fn(|c, r| self.0[r][c] - other.0[r][c]) }
        }
    }
}

// ---------------------------------------------------------------------------
// unary ops and matrix-scalar ops

gen_each!{
    @{by_ref}
    impl_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* const C: usize, const R: usize> Neg for $($ref_a)* Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline]
            fn neg(self) -> Self::Output
            { Matrix::from_fn(|c, r| -self.0[r][c]) }
        }

        // matrix * scalar
        impl<$($lt_a)* const C: usize, const R: usize> Mul<f64> for $($ref_a)* Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline]
            fn mul(self, scalar: f64) -> Self::Output
            { Matrix::from_fn(|c, r| self.0[r][c] * scalar) }
        }

        // scalar * matrix
        impl<$($lt_a)* const C: usize, const R: usize> Mul<$($ref_a)* Matrix<C, R>> for f64
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<C, R>) -> Self::Output
            { matrix * self }
        }

        // matrix / scalar
        impl<$($lt_a)* const C: usize, const R: usize> Div<f64> for $($ref_a)* Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            type Output = Matrix<C, R>;

            #[inline]
            fn div(self, scalar: f64) -> Self::Output
            { Matrix::from_fn(|c, r| self.0[r][c] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

// matrix += matrix;
impl<B, const C: usize, const R: usize> AddAssign<B> for Matrix<C, R>
where
    Dims<C, R>: Supported,
    for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<B, const C: usize, const R: usize> SubAssign<B> for Matrix<C, R>
where
    Dims<C, R>: Supported,
    for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= matrix;   (square right-hand side only, since the shape can't change)
impl<B, const C: usize, const R: usize> MulAssign<B> for Matrix<C, R>
where
    Dims<C, R>: Supported,
    for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<B, const C: usize, const R: usize> DivAssign<B> for Matrix<C, R>
where
    Dims<C, R>: Supported,
    for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------
