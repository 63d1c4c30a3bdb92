//! Checkers for algebraic laws.
//!
//! Each checker panics with a descriptive message on the first law that does
//! not hold. Comparisons use `tolerance` both as an absolute and as a relative
//! bound, so that results which cancel to zero are still compared sensibly.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::RelativeEq;
use num_traits::Zero;

/// Asserts that `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_close<T>(actual: T, expected: T, tolerance: f64)
where
    T: fmt::Debug + RelativeEq<Epsilon = f64>,
{
    assert!(
        actual.relative_eq(&expected, tolerance, tolerance),
        "{actual:?} is not within {tolerance} of {expected:?}",
    );
}

/// Checks that `==` and `!=` are consistent for two distinct values.
#[track_caller]
pub fn test_equality<T: PartialEq + fmt::Debug>(a: T, b: T) {
    assert_eq!(a, a);
    assert_eq!(b, b);
    assert_ne!(a, b);
    assert_ne!(b, a);
    assert!(!(a != a));
    assert!(!(a == b));
}

/// Checks the axioms of an abelian group under addition, along with
/// subtraction and the compound assignment operators.
#[track_caller]
pub fn test_additive_group<T>(zero: T, a: T, b: T, c: T, tolerance: f64)
where
    T: Copy
        + fmt::Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + RelativeEq<Epsilon = f64>,
{
    assert_eq!(a, a + zero);
    assert_eq!(b, zero + b);
    assert_eq!(zero, a - a);
    assert_eq!(zero, -a + a);
    assert_eq!(-zero, zero);
    assert_eq!(a, -(-a));
    assert_eq!(a + b, b + a);
    assert_close((a + b) + c, a + (b + c), tolerance);
    assert_close(a - b, a + (-b), tolerance);
    assert_close(-(a + b), -a - b, tolerance);

    let mut x = a;
    x += b;
    assert_eq!(a + b, x);
    x -= c;
    assert_eq!(a + b - c, x);
}

/// Checks the axioms of a real vector space, with `lambda` and `mu` as
/// sample scalars. `lambda` must be nonzero.
#[track_caller]
pub fn test_vector_space<T>(zero: T, a: T, b: T, c: T, lambda: f64, mu: f64, tolerance: f64)
where
    T: Copy
        + fmt::Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
        + MulAssign<f64>
        + DivAssign<f64>
        + RelativeEq<Epsilon = f64>,
    f64: Mul<T, Output = T>,
{
    test_additive_group(zero, a, b, c, tolerance);

    assert_eq!(a, 1.0 * a);
    assert_eq!(a, a * 1.0);
    assert_eq!(zero, 0.0 * a);
    assert_eq!(-a, -1.0 * a);
    assert_eq!(lambda * a, a * lambda);
    assert_close(lambda * (a + b), lambda * a + lambda * b, tolerance);
    assert_close((lambda + mu) * a, lambda * a + mu * a, tolerance);
    // Spelled out, since `f64: Mul<T>` in scope shadows `f64: Mul<f64>`.
    let lambda_mu = Mul::<f64>::mul(lambda, mu);
    assert_close(lambda_mu * a, lambda * (mu * a), tolerance);
    assert_close((a * lambda) / lambda, a, tolerance);

    let mut x = a;
    x *= lambda;
    assert_eq!(a * lambda, x);
    x /= lambda;
    assert_eq!(a * lambda / lambda, x);
}

/// Checks that `map` is linear in each argument.
#[track_caller]
pub fn test_bilinear_map<T1, T2, U>(
    map: impl Fn(T1, T2) -> U,
    a1: T1,
    b1: T1,
    a2: T2,
    b2: T2,
    lambda: f64,
    tolerance: f64,
) where
    T1: Copy + Add<Output = T1> + Mul<f64, Output = T1>,
    T2: Copy + Add<Output = T2> + Mul<f64, Output = T2>,
    U: fmt::Debug + Add<Output = U> + Mul<f64, Output = U> + RelativeEq<Epsilon = f64>,
{
    assert_close(map(a1 + b1, a2), map(a1, a2) + map(b1, a2), tolerance);
    assert_close(map(a1, a2 + b2), map(a1, a2) + map(a1, b2), tolerance);
    assert_close(map(a1 * lambda, a2), map(a1, a2) * lambda, tolerance);
    assert_close(map(a1, a2 * lambda), map(a1, a2) * lambda, tolerance);
}

/// Checks that `map` is bilinear and symmetric.
#[track_caller]
pub fn test_symmetric_bilinear_map<T, U>(
    map: impl Fn(T, T) -> U,
    a: T,
    b: T,
    c: T,
    d: T,
    lambda: f64,
    tolerance: f64,
) where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
    U: fmt::Debug + Add<Output = U> + Mul<f64, Output = U> + RelativeEq<Epsilon = f64>,
{
    test_bilinear_map(&map, a, b, c, d, lambda, tolerance);
    assert_close(map(a, b), map(b, a), tolerance);
    assert_close(map(c, d), map(d, c), tolerance);
}

/// Checks that `map` is bilinear, symmetric, and positive-definite. The
/// sample values must be nonzero.
#[track_caller]
pub fn test_symmetric_positive_definite_bilinear_map<T, U>(
    map: impl Fn(T, T) -> U,
    a: T,
    b: T,
    c: T,
    d: T,
    lambda: f64,
    tolerance: f64,
) where
    T: Copy + PartialEq + Zero + Mul<f64, Output = T>,
    U: fmt::Debug + PartialOrd + Zero + Mul<f64, Output = U> + RelativeEq<Epsilon = f64>,
{
    test_symmetric_bilinear_map(&map, a, b, c, d, lambda, tolerance);
    assert_eq!(U::zero(), map(T::zero(), T::zero()));
    for x in [a, b, c, d] {
        assert!(x != T::zero(), "sample values must be nonzero");
        assert!(map(x, x) > U::zero(), "{:?} is not positive", map(x, x));
    }
}

/// Checks that `map` is bilinear and alternating: it vanishes on equal
/// arguments and is antisymmetric.
#[track_caller]
pub fn test_alternating_bilinear_map<T, U>(
    map: impl Fn(T, T) -> U,
    a: T,
    b: T,
    c: T,
    d: T,
    lambda: f64,
    tolerance: f64,
) where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
    U: fmt::Debug
        + Zero
        + Neg<Output = U>
        + Add<Output = U>
        + Mul<f64, Output = U>
        + RelativeEq<Epsilon = f64>,
{
    test_bilinear_map(&map, a, b, c, d, lambda, tolerance);
    for x in [a, b, c, d] {
        assert_eq!(U::zero(), map(x, x));
    }
    assert_close(map(a, b), -map(b, a), tolerance);
    assert_close(map(c, d), -map(d, c), tolerance);
}

/// Checks that `bracket` is a Lie bracket: alternating, bilinear, and
/// satisfying the Jacobi identity.
#[track_caller]
pub fn test_lie_bracket<T>(
    bracket: impl Fn(T, T) -> T,
    a: T,
    b: T,
    c: T,
    d: T,
    lambda: f64,
    tolerance: f64,
) where
    T: Copy
        + fmt::Debug
        + Zero
        + Neg<Output = T>
        + Add<Output = T>
        + Mul<f64, Output = T>
        + RelativeEq<Epsilon = f64>,
{
    test_alternating_bilinear_map(&bracket, a, b, c, d, lambda, tolerance);
    let jacobi = |a, b, c| {
        bracket(a, bracket(b, c)) + bracket(b, bracket(c, a)) + bracket(c, bracket(a, b))
    };
    assert_close(jacobi(a, b, c), T::zero(), tolerance);
    assert_close(jacobi(b, c, d), T::zero(), tolerance);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Pair(f64, f64);

    #[test]
    fn test_float_laws() {
        test_equality(1.0, 2.0);
        test_vector_space(0.0, 1.5, -2.0, 3.25, 4.0, -0.5, 1e-12);
        let product = |a: f64, b: f64| a * b;
        test_symmetric_positive_definite_bilinear_map(product, 1.0, 2.0, -3.0, 4.0, 5.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "is not within")]
    fn test_assert_close_fails() {
        assert_close(1.0, 1.1, 1e-3);
    }

    #[test]
    #[should_panic]
    fn test_equality_fails_on_equal_values() {
        test_equality(Pair(1.0, 2.0), Pair(1.0, 2.0));
    }
}
