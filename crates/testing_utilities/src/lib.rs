//! Assertions and algebraic-law checkers shared by the tests of the
//! workspace.
//!
//! Everything here is generic over `std::ops` and [`approx`] traits, so the
//! checkers apply equally to plain floats, dimensioned quantities, triples and
//! multivectors.

pub use approx;

pub mod algebra;

/// Default tolerance used by [`assert_approx_eq!`], both as an absolute bound
/// and as a relative bound.
pub const EPSILON: f64 = 1e-9;

/// Asserts that both arguments are approximately equal, either within
/// [`EPSILON`] of each other or within a relative error of [`EPSILON`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_relative_eq!(
            $a,
            $b,
            epsilon = $crate::EPSILON,
            max_relative = $crate::EPSILON
        )
    };
}

/// Asserts that both arguments are within `max_ulps` units in the last place
/// of each other.
#[macro_export]
macro_rules! assert_almost_equals {
    ($a:expr, $b:expr, $max_ulps:expr $(,)?) => {
        $crate::approx::assert_ulps_eq!($a, $b, epsilon = 0.0, max_ulps = $max_ulps)
    };
}
