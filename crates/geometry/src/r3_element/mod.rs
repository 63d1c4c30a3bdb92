//! Homogeneous triples of scalars, the storage of vectors and bivectors.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;
use quantities::{Dimension, Product, Quantity, Quotient};

use crate::{GeometryError, Sign, impl_mul_sign, impl_mulassign_sign};


/// Triple of scalars of a single type `S`.
///
/// Equality and ordering are exact and componentwise (lexicographic for
/// ordering). Use the [`approx`] traits for tolerance-aware comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct R3Element<S> {
    /// First component.
    pub x: S,
    /// Second component.
    pub y: S,
    /// Third component.
    pub z: S,
}

impl<S> R3Element<S> {
    /// Constructs a triple from its components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    /// Returns a reference to a component, or `None` if `index` is not 0, 1,
    /// or 2.
    pub fn get(&self, index: usize) -> Option<&S> {
        match index {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }

    /// Returns a mutable reference to a component, or `None` if `index` is
    /// not 0, 1, or 2.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut S> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }

    /// Applies `f` to each component.
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> R3Element<T> {
        R3Element {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        [&self.x, &self.y, &self.z].into_iter()
    }
}

impl<S: Copy> R3Element<S> {
    /// Returns the dot product of `self` and `rhs`.
    pub fn dot<R>(self, rhs: R3Element<R>) -> Product<S, R>
    where
        S: Mul<R>,
        Product<S, R>: Add<Output = Product<S, R>>,
    {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product of `self` and `rhs`.
    pub fn cross<R: Copy>(self, rhs: R3Element<R>) -> R3Element<Product<S, R>>
    where
        S: Mul<R>,
        Product<S, R>: Sub<Output = Product<S, R>>,
    {
        R3Element {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Returns the component with the largest absolute value, made positive.
    fn max_abs_component(self) -> S
    where
        S: PartialOrd + Zero + Neg<Output = S>,
    {
        let abs = |c: S| if c < S::zero() { -c } else { c };
        let (x, y, z) = (abs(self.x), abs(self.y), abs(self.z));
        let xy = if x < y { y } else { x };
        if xy < z { z } else { xy }
    }

    /// Returns the Euclidean norm, which has the same dimensions as the
    /// components.
    ///
    /// The components are scaled by the largest of them before squaring, so
    /// the result neither overflows nor underflows unless the norm itself
    /// does.
    pub fn norm(self) -> S
    where
        S: PartialOrd + Zero + Neg<Output = S> + Div<S> + Mul<f64, Output = S>,
        Quotient<S, S>: Into<f64>,
    {
        let scale = self.max_abs_component();
        if scale.is_zero() {
            return scale;
        }
        let unit: R3Element<f64> = self.map(|c| (c / scale).into());
        scale * unit.dot(unit).sqrt()
    }

    /// Replaces `other` with its component orthogonal to `self`, using one
    /// step of the Gram-Schmidt process.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NullVectorOrthogonalization`] and leaves
    /// `other` unchanged if `self` has zero norm.
    pub fn orthogonalize<R>(&self, other: &mut R3Element<R>) -> Result<(), GeometryError>
    where
        R: Copy + Add<Output = R> + Sub<Output = R> + Mul<f64, Output = R>,
        S: PartialOrd + Zero + Neg<Output = S> + Div<S> + Mul<f64, Output = S>,
        Quotient<S, S>: Into<f64>,
    {
        let unit = normalize(*self).map_err(|_| GeometryError::NullVectorOrthogonalization)?;
        let projection = other.x * unit.x + other.y * unit.y + other.z * unit.z;
        *other = *other - unit.map(|c| projection * c);
        Ok(())
    }
}

/// Returns the dot product of `a` and `b`.
pub fn dot<L, R>(a: R3Element<L>, b: R3Element<R>) -> Product<L, R>
where
    L: Copy + Mul<R>,
    Product<L, R>: Add<Output = Product<L, R>>,
{
    a.dot(b)
}

/// Returns the cross product of `a` and `b`.
pub fn cross<L, R>(a: R3Element<L>, b: R3Element<R>) -> R3Element<Product<L, R>>
where
    L: Copy + Mul<R>,
    R: Copy,
    Product<L, R>: Sub<Output = Product<L, R>>,
{
    a.cross(b)
}

/// Returns the dimensionless unit triple in the direction of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::NullVectorNormalization`] if `v` has zero norm.
pub fn normalize<S>(v: R3Element<S>) -> Result<R3Element<f64>, GeometryError>
where
    S: Copy + PartialOrd + Zero + Neg<Output = S> + Div<S> + Mul<f64, Output = S>,
    Quotient<S, S>: Into<f64>,
{
    let norm = v.norm();
    if norm.is_zero() {
        return Err(GeometryError::NullVectorNormalization);
    }
    Ok(v.map(|component| (component / norm).into()))
}

impl<S> Index<usize> for R3Element<S> {
    type Output = S;

    #[track_caller]
    fn index(&self, index: usize) -> &S {
        match self.get(index) {
            Some(component) => component,
            None => panic!("index {index} out of range for R3Element"),
        }
    }
}
impl<S> IndexMut<usize> for R3Element<S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut S {
        match self.get_mut(index) {
            Some(component) => component,
            None => panic!("mutable index {index} out of range for R3Element"),
        }
    }
}

impl<S> From<[S; 3]> for R3Element<S> {
    fn from([x, y, z]: [S; 3]) -> Self {
        Self { x, y, z }
    }
}
impl<S> From<R3Element<S>> for [S; 3] {
    fn from(value: R3Element<S>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<S: fmt::Display> fmt::Display for R3Element<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Display::fmt(&self.x, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.z, f)?;
        write!(f, ")")
    }
}

impl<S: Neg> Neg for R3Element<S> {
    type Output = R3Element<S::Output>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<S: Add<Output = S>> Add for R3Element<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        R3Element {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl<S: Sub<Output = S>> Sub for R3Element<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        R3Element {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl<S: AddAssign> AddAssign for R3Element<S> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl<S: SubAssign> SubAssign for R3Element<S> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<S: Mul<f64>> Mul<f64> for R3Element<S> {
    type Output = R3Element<S::Output>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|c| c * rhs)
    }
}
impl<S: Div<f64>> Div<f64> for R3Element<S> {
    type Output = R3Element<S::Output>;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|c| c / rhs)
    }
}
impl<S: MulAssign<f64>> MulAssign<f64> for R3Element<S> {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
impl<S: DivAssign<f64>> DivAssign<f64> for R3Element<S> {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<S: Mul<Quantity<D>>, D: Dimension> Mul<Quantity<D>> for R3Element<S> {
    type Output = R3Element<S::Output>;

    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        self.map(|c| c * rhs)
    }
}
impl<S: Div<Quantity<D>>, D: Dimension> Div<Quantity<D>> for R3Element<S> {
    type Output = R3Element<S::Output>;

    fn div(self, rhs: Quantity<D>) -> Self::Output {
        self.map(|c| c / rhs)
    }
}

impl<S> Mul<R3Element<S>> for f64
where
    f64: Mul<S>,
{
    type Output = R3Element<Product<f64, S>>;

    fn mul(self, rhs: R3Element<S>) -> Self::Output {
        rhs.map(|c| self * c)
    }
}
impl<S, D: Dimension> Mul<R3Element<S>> for Quantity<D>
where
    Quantity<D>: Mul<S>,
{
    type Output = R3Element<Product<Quantity<D>, S>>;

    fn mul(self, rhs: R3Element<S>) -> Self::Output {
        rhs.map(|c| self * c)
    }
}

impl_mul_sign!(impl<S: Neg<Output = S>> Mul<Sign> for R3Element<S>);
impl_mulassign_sign!(impl<S: Copy + Neg<Output = S>> MulAssign<Sign> for R3Element<S>);

impl<S: Zero> Zero for R3Element<S> {
    fn zero() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<S: AbsDiffEq> AbsDiffEq for R3Element<S>
where
    S::Epsilon: Copy,
{
    type Epsilon = S::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
impl<S: RelativeEq> RelativeEq for R3Element<S>
where
    S::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        S::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
impl<S: UlpsEq> UlpsEq for R3Element<S>
where
    S::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
