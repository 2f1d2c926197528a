/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::shape::{Dims, Supported};
use crate::types::Matrix;

use std::fmt;

// `Display` names the shape and every element, e.g.
//
//     Matrix2x1 { M11: 07.00, M21: 11.00 }
//
// Elements are listed in row-major order as `M{col+1}{row+1}` and padded to
// two integer digits.  The precision defaults to 2 and can be overridden
// with the usual `{:.4}`.
impl<const C: usize, const R: usize> fmt::Display for Matrix<C, R>
where Dims<C, R>: Supported,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);

        write!(f, "Matrix{}x{} {{ ", C, R)?;
        for (offset, &x) in self.iter().enumerate() {
            let (col, row) = (offset % C, offset / C);
            if offset > 0 {
                write!(f, ", ")?;
            }
            write!(f, "M{}{}: ", col + 1, row + 1)?;
            write_padded(f, x, prec)?;
        }
        write!(f, " }}")
    }
}

// The sign is written separately so that it doesn't eat into the two
// integer digits.  NaN and the infinities are written as-is.
fn write_padded(f: &mut fmt::Formatter<'_>, x: f64, prec: usize) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{}", x);
    }
    if x.is_sign_negative() {
        write!(f, "-")?;
    }
    write!(f, "{:0width$.prec$}", x.abs(), width = padded_width(prec), prec = prec)
}

// two integer digits, then the point and the fraction if there is one
fn padded_width(prec: usize) -> usize {
    match prec {
        0 => 2,
        _ => prec.saturating_add(3),
    }
}

// The exponent formats apply to each element and print nested rows,
// like `Debug` does.
gen_each!{
    [ {LowerExp} {UpperExp} ]
    impl_elementwise_fmt!(
        {$Format:ident}
    ) => {
        impl<const C: usize, const R: usize> fmt::$Format for Matrix<C, R>
        where Dims<C, R>: Supported,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (r, row) in self.0.iter().enumerate() {
                    if r > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (c, x) in row.iter().enumerate() {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        fmt::$Format::fmt(x, f)?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    }
}
