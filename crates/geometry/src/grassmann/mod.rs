//! Multivectors of the exterior algebra over a three-dimensional oriented
//! inner-product space.
//!
//! A [`Vector`] and a [`Bivector`] each have three coordinates; a
//! [`Trivector`] has the single coordinate of the pseudoscalar. Bivectors are
//! stored by their Hodge duals, so the wedge product of two vectors is
//! computed as a cross product and the wedge product of a bivector and a
//! vector as a dot product.
//!
//! Multivectors only combine when their frames, scalar types, and ranks agree.
//! Adding vectors in different frames does not compile:
//!
//! ```compile_fail
//! use geometry::quantities::si::METRE;
//! use geometry::{Vector, frame};
//!
//! frame!(Sky, inertial = true);
//! frame!(Ground, inertial = false);
//!
//! let a = Vector::<_, Sky>::new(METRE, METRE, METRE);
//! let b = Vector::<_, Ground>::new(METRE, METRE, METRE);
//! let _ = a + b;
//! ```
//!
//! Neither does adding a length to a duration:
//!
//! ```compile_fail
//! use geometry::quantities::si::{METRE, SECOND};
//! use geometry::{Vector, frame};
//!
//! frame!(Sky, inertial = true);
//!
//! let a = Vector::<_, Sky>::new(METRE, METRE, METRE);
//! let b = Vector::<_, Sky>::new(SECOND, SECOND, SECOND);
//! let _ = a + b;
//! ```
//!
//! Nor adding a vector to a bivector:
//!
//! ```compile_fail
//! use geometry::{Bivector, Vector, frame};
//!
//! frame!(Sky, inertial = true);
//!
//! let a = Vector::<f64, Sky>::new(1.0, 0.0, 0.0);
//! let b = Bivector::<f64, Sky>::new(0.0, 1.0, 0.0);
//! let _ = a + b;
//! ```
//!
//! The same operations with matching types are fine:
//!
//! ```
//! use geometry::{Bivector, Vector, frame, wedge};
//!
//! frame!(Sky, inertial = true);
//!
//! let a = Vector::<f64, Sky>::new(1.0, 0.0, 0.0);
//! let b = Vector::<f64, Sky>::new(0.0, 1.0, 0.0);
//! let c: Bivector<f64, Sky> = wedge(a, b);
//! assert_eq!(Vector::new(1.0, 1.0, 0.0), a + b);
//! assert_eq!(Bivector::new(0.0, 0.0, 2.0), c + c);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;
use quantities::{Dimension, Product, Quantity, Quotient};

use crate::{Frame, R3Element, Sign, impl_mul_sign, impl_mulassign_sign};

#[cfg(test)]
mod tests;

/// Vector with scalar type `S` in the frame `F`.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Vector<S, F> {
    coordinates: R3Element<S>,
    frame: PhantomData<F>,
}

/// Bivector with scalar type `S` in the frame `F`, stored by its Hodge dual.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Bivector<S, F> {
    coordinates: R3Element<S>,
    frame: PhantomData<F>,
}

/// Trivector with scalar type `S` in the frame `F`, stored as the coefficient
/// of the oriented unit volume.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Trivector<S, F> {
    coordinates: S,
    frame: PhantomData<F>,
}

impl<S, F: Frame> Vector<S, F> {
    /// Constructs a vector from its coordinates in `F`.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self::from_coordinates(R3Element::new(x, y, z))
    }
    /// Wraps coordinates in `F`.
    pub const fn from_coordinates(coordinates: R3Element<S>) -> Self {
        Self {
            coordinates,
            frame: PhantomData,
        }
    }

    fn map_coordinates<T>(self, f: impl FnMut(S) -> T) -> Vector<T, F> {
        Vector::from_coordinates(self.coordinates.map(f))
    }
}
impl<S, F: Frame> Bivector<S, F> {
    /// Constructs a bivector from the coordinates of its Hodge dual in `F`.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self::from_coordinates(R3Element::new(x, y, z))
    }
    /// Wraps coordinates in `F`.
    pub const fn from_coordinates(coordinates: R3Element<S>) -> Self {
        Self {
            coordinates,
            frame: PhantomData,
        }
    }

    fn map_coordinates<T>(self, f: impl FnMut(S) -> T) -> Bivector<T, F> {
        Bivector::from_coordinates(self.coordinates.map(f))
    }
}
impl<S, F: Frame> Trivector<S, F> {
    /// Constructs a trivector from its single coordinate in `F`.
    pub const fn new(coordinate: S) -> Self {
        Self::from_coordinates(coordinate)
    }
    /// Wraps a coordinate in `F`.
    pub const fn from_coordinates(coordinates: S) -> Self {
        Self {
            coordinates,
            frame: PhantomData,
        }
    }

    fn map_coordinates<T>(self, mut f: impl FnMut(S) -> T) -> Trivector<T, F> {
        Trivector::from_coordinates(f(self.coordinates))
    }
}

impl<S: Copy, F: Frame> Vector<S, F> {
    /// Returns the coordinates in `F`.
    pub fn coordinates(&self) -> R3Element<S> {
        self.coordinates
    }

    /// Returns the Euclidean norm.
    pub fn norm(&self) -> S
    where
        S: PartialOrd + Zero + Neg<Output = S> + Div<S> + Mul<f64, Output = S>,
        Quotient<S, S>: Into<f64>,
    {
        self.coordinates.norm()
    }
}
impl<S: Copy, F: Frame> Bivector<S, F> {
    /// Returns the coordinates of the Hodge dual in `F`.
    pub fn coordinates(&self) -> R3Element<S> {
        self.coordinates
    }

    /// Returns the norm induced by the inner product.
    pub fn norm(&self) -> S
    where
        S: PartialOrd + Zero + Neg<Output = S> + Div<S> + Mul<f64, Output = S>,
        Quotient<S, S>: Into<f64>,
    {
        self.coordinates.norm()
    }
}
impl<S: Copy, F: Frame> Trivector<S, F> {
    /// Returns the coefficient of the oriented unit volume in `F`.
    pub fn coordinates(&self) -> S {
        self.coordinates
    }

    /// Returns the absolute value of the coefficient.
    pub fn norm(&self) -> S
    where
        S: PartialOrd + Zero + Neg<Output = S>,
    {
        if self.coordinates < S::zero() {
            -self.coordinates
        } else {
            self.coordinates
        }
    }
}

impl_multivector_ops!(Vector);
impl_multivector_ops!(Bivector);
impl_multivector_ops!(Trivector);

/// Symmetric bilinear contraction of two multivectors of the same rank to a
/// scalar.
pub trait InnerProduct<Rhs = Self> {
    /// Scalar type of the result.
    type Output;

    /// Returns the inner product of `self` and `rhs`.
    fn inner_product(self, rhs: Rhs) -> Self::Output;
}

/// Exterior product.
pub trait Wedge<Rhs> {
    /// Multivector type of the result.
    type Output;

    /// Returns the exterior product of `self` and `rhs`.
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// Returns the inner product of `lhs` and `rhs`.
pub fn inner_product<L: InnerProduct<R>, R>(lhs: L, rhs: R) -> L::Output {
    lhs.inner_product(rhs)
}

/// Returns the exterior product of `lhs` and `rhs`.
pub fn wedge<L: Wedge<R>, R>(lhs: L, rhs: R) -> L::Output {
    lhs.wedge(rhs)
}

/// Returns the Lie bracket of two bivectors, which realizes the Lie algebra
/// so(3) of infinitesimal rotations.
pub fn commutator<L, R, F>(lhs: Bivector<L, F>, rhs: Bivector<R, F>) -> Bivector<Product<L, R>, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Sub<Output = Product<L, R>>,
{
    Bivector::from_coordinates(lhs.coordinates.cross(rhs.coordinates))
}

impl_triple_inner_product!(Vector);
impl_triple_inner_product!(Bivector);

impl<L, R, F> InnerProduct<Trivector<R, F>> for Trivector<L, F>
where
    L: Mul<R>,
    F: Frame,
{
    type Output = Product<L, R>;

    fn inner_product(self, rhs: Trivector<R, F>) -> Self::Output {
        self.coordinates * rhs.coordinates
    }
}

impl<L, R, F> Wedge<Vector<R, F>> for Vector<L, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Sub<Output = Product<L, R>>,
{
    type Output = Bivector<Product<L, R>, F>;

    fn wedge(self, rhs: Vector<R, F>) -> Self::Output {
        Bivector::from_coordinates(self.coordinates.cross(rhs.coordinates))
    }
}
impl<L, R, F> Wedge<Vector<R, F>> for Bivector<L, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Add<Output = Product<L, R>>,
{
    type Output = Trivector<Product<L, R>, F>;

    fn wedge(self, rhs: Vector<R, F>) -> Self::Output {
        Trivector::from_coordinates(self.coordinates.dot(rhs.coordinates))
    }
}
impl<L, R, F> Wedge<Bivector<R, F>> for Vector<L, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Add<Output = Product<L, R>>,
{
    type Output = Trivector<Product<L, R>, F>;

    fn wedge(self, rhs: Bivector<R, F>) -> Self::Output {
        Trivector::from_coordinates(self.coordinates.dot(rhs.coordinates))
    }
}

/// Left action of so(3) on vectors: `b * v` is the rate of change of `v`
/// under the infinitesimal rotation `b`.
impl<L, R, F> Mul<Vector<R, F>> for Bivector<L, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Sub<Output = Product<L, R>>,
{
    type Output = Vector<Product<L, R>, F>;

    fn mul(self, rhs: Vector<R, F>) -> Self::Output {
        Vector::from_coordinates(self.coordinates.cross(rhs.coordinates))
    }
}
/// Right action of so(3) on vectors, the opposite of the left action.
impl<L, R, F> Mul<Bivector<R, F>> for Vector<L, F>
where
    L: Copy + Mul<R>,
    R: Copy,
    F: Frame,
    Product<L, R>: Sub<Output = Product<L, R>>,
{
    type Output = Vector<Product<L, R>, F>;

    fn mul(self, rhs: Bivector<R, F>) -> Self::Output {
        Vector::from_coordinates(self.coordinates.cross(rhs.coordinates))
    }
}
