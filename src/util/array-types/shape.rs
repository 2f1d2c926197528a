/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// The matrix family is closed: rather than accept any `const C, const R`,
// every impl in this crate is bounded on `Dims<C, R>: Supported`, which is
// implemented on a finite set of shapes.  This keeps `Matrix<0, 3>` and
// `Matrix<17, 2>` out of the public API without any runtime check.

/// A pair of matrix extents, lifted to the type level.
///
/// `C` is the number of columns and `R` the number of rows, in that order,
/// matching the naming of `Matrix1x3` (one column, three rows).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dims<const C: usize, const R: usize>;

/// Marker for the shapes that belong to the matrix family.
///
/// Implemented for `Dims<C, R>` with both `C` and `R` in `1..=4`.
/// This trait is sealed; the family cannot be extended downstream.
pub trait Supported: private::Sealed { }

mod private {
    pub trait Sealed { }
}

gen_each!{
    @{dim}
    @{dim}
    impl_supported!(
        {$c:tt}
        {$r:tt}
    ) => {
        impl Supported for Dims<$c, $r> { }
        impl private::Sealed for Dims<$c, $r> { }
    }
}
