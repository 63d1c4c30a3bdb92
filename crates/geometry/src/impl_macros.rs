/// Implements the vector-space operators, `Zero`, `Display`, and the `approx`
/// traits for a multivector type `$type<S, F>` by forwarding to its
/// `coordinates` field.
macro_rules! impl_multivector_ops {
    ($type:ident) => {
        impl<S: Neg<Output = S>, F: Frame> Neg for $type<S, F> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self::from_coordinates(-self.coordinates)
            }
        }

        impl<S: Add<Output = S>, F: Frame> Add for $type<S, F> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self::from_coordinates(self.coordinates + rhs.coordinates)
            }
        }
        impl<S: Sub<Output = S>, F: Frame> Sub for $type<S, F> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self::from_coordinates(self.coordinates - rhs.coordinates)
            }
        }
        impl<S: AddAssign, F: Frame> AddAssign for $type<S, F> {
            fn add_assign(&mut self, rhs: Self) {
                self.coordinates += rhs.coordinates;
            }
        }
        impl<S: SubAssign, F: Frame> SubAssign for $type<S, F> {
            fn sub_assign(&mut self, rhs: Self) {
                self.coordinates -= rhs.coordinates;
            }
        }

        impl<S: Mul<f64>, F: Frame> Mul<f64> for $type<S, F> {
            type Output = $type<S::Output, F>;

            fn mul(self, rhs: f64) -> Self::Output {
                $type::from_coordinates(self.coordinates * rhs)
            }
        }
        impl<S: Div<f64>, F: Frame> Div<f64> for $type<S, F> {
            type Output = $type<S::Output, F>;

            fn div(self, rhs: f64) -> Self::Output {
                $type::from_coordinates(self.coordinates / rhs)
            }
        }
        impl<S: MulAssign<f64>, F: Frame> MulAssign<f64> for $type<S, F> {
            fn mul_assign(&mut self, rhs: f64) {
                self.coordinates *= rhs;
            }
        }
        impl<S: DivAssign<f64>, F: Frame> DivAssign<f64> for $type<S, F> {
            fn div_assign(&mut self, rhs: f64) {
                self.coordinates /= rhs;
            }
        }

        impl<S: Mul<Quantity<D>>, D: Dimension, F: Frame> Mul<Quantity<D>> for $type<S, F> {
            type Output = $type<S::Output, F>;

            fn mul(self, rhs: Quantity<D>) -> Self::Output {
                $type::from_coordinates(self.coordinates * rhs)
            }
        }
        impl<S: Div<Quantity<D>>, D: Dimension, F: Frame> Div<Quantity<D>> for $type<S, F> {
            type Output = $type<S::Output, F>;

            fn div(self, rhs: Quantity<D>) -> Self::Output {
                $type::from_coordinates(self.coordinates / rhs)
            }
        }

        impl<S, F: Frame> Mul<$type<S, F>> for f64
        where
            f64: Mul<S>,
        {
            type Output = $type<Product<f64, S>, F>;

            fn mul(self, rhs: $type<S, F>) -> Self::Output {
                rhs.map_coordinates(|c| self * c)
            }
        }
        impl<S, D: Dimension, F: Frame> Mul<$type<S, F>> for Quantity<D>
        where
            Quantity<D>: Mul<S>,
        {
            type Output = $type<Product<Quantity<D>, S>, F>;

            fn mul(self, rhs: $type<S, F>) -> Self::Output {
                rhs.map_coordinates(|c| self * c)
            }
        }

        impl_mul_sign!(impl<S: Neg<Output = S>, F: Frame> Mul<Sign> for $type<S, F>);
        impl_mulassign_sign!(
            impl<S: Copy + Neg<Output = S>, F: Frame> MulAssign<Sign> for $type<S, F>
        );

        impl<S: Zero, F: Frame> Zero for $type<S, F> {
            fn zero() -> Self {
                Self::from_coordinates(Zero::zero())
            }

            fn is_zero(&self) -> bool {
                self.coordinates.is_zero()
            }
        }

        impl<S: fmt::Display, F: Frame> fmt::Display for $type<S, F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.coordinates, f)?;
                write!(f, " in {}", F::NAME)
            }
        }

        impl<S: AbsDiffEq, F: Frame> AbsDiffEq for $type<S, F>
        where
            S::Epsilon: Copy,
        {
            type Epsilon = S::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.coordinates.abs_diff_eq(&other.coordinates, epsilon)
            }
        }
        impl<S: RelativeEq, F: Frame> RelativeEq for $type<S, F>
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
                self.coordinates
                    .relative_eq(&other.coordinates, epsilon, max_relative)
            }
        }
        impl<S: UlpsEq, F: Frame> UlpsEq for $type<S, F>
        where
            S::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                S::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.coordinates.ulps_eq(&other.coordinates, epsilon, max_ulps)
            }
        }
    };
}

/// Implements `InnerProduct` between two multivectors of the same rank whose
/// coordinates are triples.
macro_rules! impl_triple_inner_product {
    ($type:ident) => {
        impl<L, R, F> InnerProduct<$type<R, F>> for $type<L, F>
        where
            L: Copy + Mul<R>,
            R: Copy,
            F: Frame,
            Product<L, R>: Add<Output = Product<L, R>>,
        {
            type Output = Product<L, R>;

            fn inner_product(self, rhs: $type<R, F>) -> Self::Output {
                self.coordinates.dot(rhs.coordinates)
            }
        }
    };
}
