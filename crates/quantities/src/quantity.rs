//! Dimensioned scalar type.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;

use crate::dimensions::{
    Dimension, DimensionProduct, DimensionQuotient, DimensionSqrt, NoDimensions, unit_symbols,
};

/// Scalar quantity with compile-time dimensions `D`, stored as a magnitude in
/// SI base units.
pub struct Quantity<D> {
    magnitude: f64,
    dimensions: PhantomData<D>,
}

/// Product of two scalar types.
pub type Product<L, R> = <L as Mul<R>>::Output;
/// Quotient of two scalar types.
pub type Quotient<L, R> = <L as Div<R>>::Output;
/// Square root of a scalar type.
pub type SquareRootOf<T> = <T as SquareRoot>::Output;

/// Quantity of dimension one. Converts losslessly into `f64`.
pub type Dimensionless = Quantity<NoDimensions>;

impl<D: Dimension> Quantity<D> {
    /// Constructs a quantity from its magnitude in SI base units.
    pub const fn from_si(magnitude: f64) -> Self {
        Self {
            magnitude,
            dimensions: PhantomData,
        }
    }

    /// Returns the magnitude of the quantity in SI base units.
    pub const fn si_magnitude(self) -> f64 {
        self.magnitude
    }

    /// Returns the magnitude of the quantity expressed in `unit`.
    pub fn in_units_of(self, unit: Self) -> f64 {
        self.magnitude / unit.magnitude
    }

    /// Returns the absolute value of the quantity.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_si(self.magnitude.abs())
    }

    /// Returns the packed dimension code of `D`.
    pub const fn dimensions() -> i64 {
        D::REPRESENTATION
    }
}

impl<D: DimensionSqrt> Quantity<D> {
    /// Returns the square root of the quantity.
    #[must_use]
    pub fn sqrt(self) -> Quantity<D::Output> {
        Quantity::from_si(self.magnitude.sqrt())
    }
}

/// Square root that is aware of dimensions.
pub trait SquareRoot {
    /// Type of the square root.
    type Output;

    /// Returns the square root.
    fn square_root(self) -> Self::Output;
}
impl SquareRoot for f64 {
    type Output = f64;

    fn square_root(self) -> f64 {
        self.sqrt()
    }
}
impl<D: DimensionSqrt> SquareRoot for Quantity<D> {
    type Output = Quantity<D::Output>;

    fn square_root(self) -> Self::Output {
        self.sqrt()
    }
}

impl From<Dimensionless> for f64 {
    fn from(value: Dimensionless) -> Self {
        value.magnitude
    }
}
impl From<f64> for Dimensionless {
    fn from(value: f64) -> Self {
        Self::from_si(value)
    }
}

impl<D> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D> Copy for Quantity<D> {}

impl<D> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}
impl<D> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude.partial_cmp(&other.magnitude)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::from_si(0.0)
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude, f)?;
        let units = unit_symbols(D::REPRESENTATION);
        if !units.is_empty() {
            write!(f, " {units}")?;
        }
        Ok(())
    }
}
impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_si(-self.magnitude)
    }
}

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_si(self.magnitude + rhs.magnitude)
    }
}
impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_si(self.magnitude - rhs.magnitude)
    }
}
impl<D: Dimension> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.magnitude += rhs.magnitude;
    }
}
impl<D: Dimension> SubAssign for Quantity<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.magnitude -= rhs.magnitude;
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_si(self.magnitude * rhs)
    }
}
impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_si(self.magnitude / rhs)
    }
}
impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    fn mul_assign(&mut self, rhs: f64) {
        self.magnitude *= rhs;
    }
}
impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    fn div_assign(&mut self, rhs: f64) {
        self.magnitude /= rhs;
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::from_si(self * rhs.magnitude)
    }
}
impl<D> Div<Quantity<D>> for f64
where
    D: Dimension,
    NoDimensions: DimensionQuotient<D>,
{
    type Output = Quantity<<NoDimensions as DimensionQuotient<D>>::Output>;

    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::from_si(self / rhs.magnitude)
    }
}

impl<L, R> Mul<Quantity<R>> for Quantity<L>
where
    L: DimensionProduct<R>,
    R: Dimension,
{
    type Output = Quantity<L::Output>;

    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::from_si(self.magnitude * rhs.magnitude)
    }
}
impl<L, R> Div<Quantity<R>> for Quantity<L>
where
    L: DimensionQuotient<R>,
    R: Dimension,
{
    type Output = Quantity<L::Output>;

    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::from_si(self.magnitude / rhs.magnitude)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_si(iter.map(|q| q.magnitude).sum())
    }
}

impl<D: Dimension> Zero for Quantity<D> {
    fn zero() -> Self {
        Self::from_si(0.0)
    }

    fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}

impl<D: Dimension> AbsDiffEq for Quantity<D> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.magnitude.abs_diff_eq(&other.magnitude, epsilon)
    }
}
impl<D: Dimension> RelativeEq for Quantity<D> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.magnitude
            .relative_eq(&other.magnitude, epsilon, max_relative)
    }
}
impl<D: Dimension> UlpsEq for Quantity<D> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.magnitude.ulps_eq(&other.magnitude, epsilon, max_ulps)
    }
}
