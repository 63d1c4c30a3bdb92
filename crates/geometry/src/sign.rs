//! Simple `Sign` type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use num_traits::Signed;
use quantities::{Dimension, Quantity};

use crate::GeometryError;

/// Positive or negative. Used for the orientation of bivectors and
/// trivectors.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive
    #[default]
    Pos = 0,
    /// Negative
    Neg = 1,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_num::<i8>().cmp(&other.to_num::<i8>())
    }
}

impl Sign {
    /// Returns the sign of a nonzero number.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroSign`] if `value` is zero, or
    /// [`GeometryError::NanSign`] if it is NaN.
    pub fn new<T: Signed>(value: T) -> Result<Self, GeometryError> {
        if value.is_zero() {
            return Err(GeometryError::ZeroSign);
        }
        // NaN has a sign bit but its `signum` is NaN.
        let signum = value.signum();
        if signum == T::one() {
            Ok(Sign::Pos)
        } else if signum == -T::one() {
            Ok(Sign::Neg)
        } else {
            Err(GeometryError::NanSign)
        }
    }

    /// Returns whether the sign is positive.
    pub fn is_positive(self) -> bool {
        self == Sign::Pos
    }
    /// Returns whether the sign is negative.
    pub fn is_negative(self) -> bool {
        self == Sign::Neg
    }

    /// Returns `1` or `-1`.
    pub fn to_num<T: Signed>(self) -> T {
        match self {
            Sign::Pos => T::one(),
            Sign::Neg => -T::one(),
        }
    }
}

/// Implements `Mul<Sign>` for a type that implements `Neg<Output = Self>`.
///
/// ```rust
/// use std::ops::{Mul, MulAssign, Neg};
///
/// use geometry::{Sign, impl_mul_sign, impl_mulassign_sign};
///
/// #[derive(Debug, Copy, Clone, PartialEq)]
/// struct Charge(f64);
/// impl Neg for Charge {
///     type Output = Self;
///
///     fn neg(self) -> Self::Output {
///         Self(-self.0)
///     }
/// }
/// impl_mul_sign!(impl Mul<Sign> for Charge);
/// impl_mulassign_sign!(impl MulAssign<Sign> for Charge);
///
/// assert_eq!(Charge(-2.0), Charge(2.0) * Sign::Neg);
/// ```
#[macro_export]
macro_rules! impl_mul_sign {
    (impl $($tok:tt)*) => {
        impl $($tok)* {
            type Output = Self;

            fn mul(self, rhs: $crate::Sign) -> Self {
                match rhs {
                    $crate::Sign::Pos => self,
                    $crate::Sign::Neg => -self,
                }
            }
        }
    };
}
/// Implements `MulAssign<Sign>` for a type. See [`impl_mul_sign`] for an
/// example.
#[macro_export]
macro_rules! impl_mulassign_sign {
    (impl $($tok:tt)*) => {
        impl $($tok)* {
            fn mul_assign(&mut self, rhs: $crate::Sign) {
                match rhs {
                    $crate::Sign::Pos => (),
                    $crate::Sign::Neg => *self = -self.clone(),
                }
            }
        }
    };
}

impl_mul_sign!(impl Mul<Sign> for Sign);
impl_mulassign_sign!(impl MulAssign<Sign> for Sign);

impl_mul_sign!(impl Mul<Sign> for f64);
impl_mulassign_sign!(impl MulAssign<Sign> for f64);
impl_mul_sign!(impl<D: Dimension> Mul<Sign> for Quantity<D>);
impl_mulassign_sign!(impl<D: Dimension> MulAssign<Sign> for Quantity<D>);
