/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Relations between shapes: which product and which transpose each shape has.
//!
//! Multiplication `a * b` exists exactly when `a` has as many columns as `b`
//! has rows.  With `a: Matrix<C, R>` and `b: Matrix<K, C>`, the product is a
//! `Matrix<K, R>` whose element at `(col, row)` is
//!
//! ```text
//! sum(a[(i, row)] * b[(col, i)] for i in 0..C)
//! ```
//!
//! Any other pairing fails to compile.  Transpose maps `Matrix<C, R>` to
//! `Matrix<R, C>`, and applying it twice gives back the original shape.

use crate::shape::{Dims, Supported};
use crate::types::Matrix;

use std::ops::Mul;

// ---------------------------------------------------------------------------

/// Output of `transpose`: the same matrix with its dimensions flipped.
pub type TransposeT<A> = <A as Transpose>::Output;

/// Output of `a * b`.
pub type ProductT<A, B> = <A as Mul<B>>::Output;

/// Matrix transpose, as a trait so that the transposed shape can be named
/// in generic code through [`TransposeT`].
pub trait Transpose {
    type Output;

    fn transpose(&self) -> Self::Output;
}

impl<const C: usize, const R: usize> Transpose for Matrix<C, R>
where
    Dims<C, R>: Supported,
    Dims<R, C>: Supported,
{
    type Output = Matrix<R, C>;

    #[inline]
    fn transpose(&self) -> Self::Output
    { Matrix::from_fn(|col, row| self.0[col][row]) }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_mat_mat_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix * matrix
        //
        // `C` is the shared inner dimension.
        impl<$($lt_a)* $($lt_b)* const C: usize, const R: usize, const K: usize>
            Mul<$($ref_b)* Matrix<K, C>> for $($ref_a)* Matrix<C, R>
        where
            Dims<C, R>: Supported,
            Dims<K, C>: Supported,
            Dims<K, R>: Supported,
        {
            type Output = Matrix<K, R>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<K, C>) -> Self::Output {
                Matrix::from_fn(|col, row| {
                    (0..C).map(|i| self.0[row][i] * other.0[i][col]).sum()
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    #[test]
    fn transpose_flips_shape() {
        let m = Matrix3x2::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let t: Matrix2x3 = m.transpose();
        assert_eq!(t.into_array(), [
            [1.0, 4.0],
            [2.0, 5.0],
            [3.0, 6.0],
        ]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn transpose_of_column_is_row() {
        let m = Matrix1x3::from_rows([[2.0], [3.0], [5.0]]);
        let t: TransposeT<Matrix1x3> = m.transpose();
        assert_eq!(t, Matrix3x1::from_rows([[2.0, 3.0, 5.0]]));
        assert_eq!(t.iter().cloned().collect::<Vec<_>>(), vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn mat_mat() {
        let eye2 = Matrix2x2::identity();
        let eye3 = Matrix3x3::identity();

        let a = Matrix3x2::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);

        let b = Matrix2x3::from_rows([
            [1.0,  1.0],
            [1.0, -1.0],
            [0.0,  1.0],
        ]);

        let a_dot_b = Matrix2x2::from_rows([
            [3.0, 2.0],
            [9.0, 5.0],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);
    }

    #[test]
    fn outer_product() {
        let column = Matrix1x3::from_rows([[2.0], [3.0], [5.0]]);
        let row = Matrix2x1::from_rows([[7.0, 11.0]]);

        let product: ProductT<Matrix1x3, Matrix2x1> = column * row;
        assert_eq!(product, Matrix2x3::from_rows([
            [14.0, 22.0],
            [21.0, 33.0],
            [35.0, 55.0],
        ]));
    }

    #[test]
    fn inner_product() {
        let row = Matrix3x1::from_rows([[1.0, 2.0, 3.0]]);
        let column = Matrix1x3::from_rows([[4.0], [-3.0], [1.0]]);
        let product: Matrix1x1 = &row * &column;
        assert_eq!(product[(0, 0)], 1.0);
    }

    #[test]
    fn product_transposes() {
        // (AB)^T == B^T A^T
        let a = Matrix4x2::from_fn(|c, r| (c + 2 * r) as f64 - 1.5);
        let b = Matrix3x4::from_fn(|c, r| (3 * c) as f64 - (r * r) as f64);
        let lhs = (&a * &b).transpose();
        let rhs = b.transpose() * a.transpose();
        assert_eq!(lhs, rhs);
    }
}
