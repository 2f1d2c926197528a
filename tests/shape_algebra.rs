// Properties that must hold for every shape in the family, and for every
// pair of shapes that can be multiplied.

use fixmat::{assert_close, Dims, Matrix, Supported, Transpose};
use fixmat::{Matrix1x3, Matrix2x1, Matrix2x3, Matrix3x1, Matrix3x3};

use itertools::iproduct;
use pretty_assertions::assert_eq;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Call `$func::<C, R>()` for all 16 shapes.
macro_rules! each_shape {
    ($func:ident) => {
        each_shape!(@cols $func [1 2 3 4]);
    };
    (@cols $func:ident [$($c:tt)*]) => {
        $( each_shape!(@rows $func $c [1 2 3 4]); )*
    };
    (@rows $func:ident $c:tt [$($r:tt)*]) => {
        $( $func::<$c, $r>(); )*
    };
}

/// Call `$func::<C, R, K>()` for all 64 multiplication-compatible pairs
/// `Matrix<C, R> * Matrix<K, C>`.
macro_rules! each_product {
    ($func:ident) => {
        each_product!(@inner $func [1 2 3 4]);
    };
    (@inner $func:ident [$($c:tt)*]) => {
        $( each_product!(@rows $func $c [1 2 3 4]); )*
    };
    (@rows $func:ident $c:tt [$($r:tt)*]) => {
        $( each_product!(@cols $func $c $r [1 2 3 4]); )*
    };
    (@cols $func:ident $c:tt $r:tt [$($k:tt)*]) => {
        $( $func::<$c, $r, $k>(); )*
    };
}

fn random<const C: usize, const R: usize>() -> Matrix<C, R>
where Dims<C, R>: Supported,
{ Matrix::from_fn(|_, _| 20.0 * rand::random::<f64>() - 10.0) }

fn hash_of<T: Hash>(x: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------

fn check_shape<const C: usize, const R: usize>()
where
    Dims<C, R>: Supported,
    Dims<R, C>: Supported,
{
    let a = random::<C, R>();
    let b = random::<C, R>();
    let k = 20.0 * rand::random::<f64>() - 10.0;

    assert_eq!(Matrix::<C, R>::COLUMNS, C);
    assert_eq!(Matrix::<C, R>::ROWS, R);
    assert_eq!((a.columns(), a.rows()), (C, R));
    assert_eq!(a.iter().count(), C * R);

    // transpose
    let t = a.transpose();
    assert_eq!((t.columns(), t.rows()), (R, C));
    for (col, row) in iproduct!(0..C, 0..R) {
        assert_eq!(t.get(row, col), a.get(col, row));
    }
    assert_eq!(t.transpose(), a);
    assert_eq!(Transpose::transpose(&t), a);

    // elementwise
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&a + &b - &b, a);
    assert_eq!(Matrix::<C, R>::ZERO + a, a);
    assert_eq!(a - Matrix::<C, R>::ZERO, a);
    for (col, row) in iproduct!(0..C, 0..R) {
        assert_eq!((a + b)[(col, row)], a[(col, row)] + b[(col, row)]);
        assert_eq!((a - b)[(col, row)], a[(col, row)] - b[(col, row)]);
    }

    // scalars
    assert_eq!(&a * k, k * &a);
    assert_eq!(Matrix::<C, R>::ZERO * k, Matrix::<C, R>::ZERO);
    for (col, row) in iproduct!(0..C, 0..R) {
        assert_eq!((a * k)[(col, row)].to_bits(), (a[(col, row)] * k).to_bits());
    }

    // flat offsets
    let flat: Vec<f64> = a.iter().cloned().collect();
    for (col, row) in iproduct!(0..C, 0..R) {
        assert_eq!(a.get(col, row).unwrap(), flat[row * C + col]);
    }

    // indexed set/get round trip, bit for bit
    let mut m = Matrix::<C, R>::ZERO;
    for (col, row) in iproduct!(0..C, 0..R) {
        let value = rand::random::<f64>();
        m.set(col, row, value).unwrap();
        assert_eq!(m.get(col, row).unwrap().to_bits(), value.to_bits());
    }

    // bounds
    let minus_one = 0usize.wrapping_sub(1);
    assert!(a.get(minus_one, 0).is_err());
    assert!(a.get(C, 0).is_err());
    assert!(a.get(0, minus_one).is_err());
    assert!(a.get(0, R).is_err());
    assert!(m.set(C, 0, 1.0).is_err());
    assert!(m.set(0, R, 1.0).is_err());

    // hashing is exact and repeatable
    let copy = a;
    assert_eq!(hash_of(&a), hash_of(&a));
    assert_eq!(hash_of(&a), hash_of(&copy));
}

#[test]
fn every_shape() {
    each_shape!(check_shape);
}

// ---------------------------------------------------------------------------

fn check_product<const C: usize, const R: usize, const K: usize>()
where
    Dims<C, R>: Supported,
    Dims<K, C>: Supported,
    Dims<K, R>: Supported,
{
    let a = random::<C, R>();
    let b = random::<K, C>();

    let product: Matrix<K, R> = &a * &b;
    assert_eq!((product.columns(), product.rows()), (K, R));

    for (col, row) in iproduct!(0..K, 0..R) {
        let expected: f64 = (0..C).map(|i| a[(i, row)] * b[(col, i)]).sum();
        assert_close!(expected, product[(col, row)]);
    }

    assert_eq!(a * b, product);
    assert_eq!(&a * b, product);
    assert_eq!(a * &b, product);
}

#[test]
fn every_product() {
    each_product!(check_product);
}

// ---------------------------------------------------------------------------

#[test]
fn column_times_row() {
    let a = Matrix1x3::from_rows([[2.0], [3.0], [5.0]]);

    let t = a.transpose();
    assert_eq!(t, Matrix3x1::from_rows([[2.0, 3.0, 5.0]]));
    assert_eq!(t.iter().cloned().collect::<Vec<_>>(), vec![2.0, 3.0, 5.0]);

    let b = Matrix2x1::from_rows([[7.0, 11.0]]);
    let product: Matrix2x3 = a * b;
    assert_eq!(product, Matrix2x3::from_rows([
        [14.0, 22.0],
        [21.0, 33.0],
        [35.0, 55.0],
    ]));
    assert_eq!(
        product.to_string(),
        "Matrix2x3 { M11: 14.00, M21: 22.00, M12: 21.00, M22: 33.00, M13: 35.00, M23: 55.00 }",
    );
}

#[test]
fn identity_is_neutral() {
    let a = random::<3, 3>();
    let tall = random::<2, 3>();
    let wide = random::<3, 4>();

    assert_eq!(&Matrix3x3::identity() * &a, a);
    assert_eq!(&a * &Matrix3x3::identity(), a);
    assert_eq!(&Matrix3x3::identity() * &tall, tall);
    assert_eq!(&wide * &Matrix3x3::identity(), wide);
}

#[test]
fn tolerance_is_shared() {
    let a = Matrix2x3::splat(1.0);
    assert_eq!(a.epsilon(), fixmat::EPSILON);

    let nudged = a + Matrix2x3::splat(fixmat::EPSILON / 4.0);
    assert_eq!(a, nudged);
    assert!(fixmat::are_equal(a[(0, 0)], nudged[(0, 0)]));

    let pushed = a + Matrix2x3::splat(fixmat::EPSILON * 4.0);
    assert!(a != pushed);
    assert!(fixmat::not_equal(a[(0, 0)], pushed[(0, 0)]));
}

#[test]
fn equal_values_may_hash_differently() {
    let a = Matrix2x1::from_rows([[1.0, 0.0]]);
    let b = Matrix2x1::from_rows([[1.0 + fixmat::EPSILON / 4.0, -0.0]]);
    assert_eq!(a, b);
    assert!(hash_of(&a) != hash_of(&b));
}

#[test]
fn zero_constant_is_stable() {
    let before = Matrix3x3::ZERO;
    let mut scratch = Matrix3x3::ZERO;
    scratch.set(1, 1, 9.0).unwrap();
    scratch += Matrix3x3::splat(2.0);

    assert_eq!(Matrix3x3::ZERO, before);
    assert!(Matrix3x3::ZERO.iter().all(|&x| x.to_bits() == 0.0f64.to_bits()));
}
