//! Compile-time physical dimensions.
//!
//! A dimension is a list of eight integer exponents, one per base quantity,
//! stored at the type level so that multiplying two quantities computes the
//! dimensions of the result at compile time.

use std::marker::PhantomData;
use std::ops::{Add, Sub};

use typenum::{Diff, Integer, P2, PartialDiv, PartialQuot, Sum, Z0};

/// Number of base quantities.
pub const BASE_QUANTITY_COUNT: usize = 8;

/// Names of the base quantities, in the order of the exponents.
pub const BASE_QUANTITY_NAMES: [&str; BASE_QUANTITY_COUNT] = [
    "length",
    "mass",
    "time",
    "current",
    "temperature",
    "amount",
    "luminous intensity",
    "angle",
];

/// SI symbols of the base units, in the order of the exponents.
pub const BASE_UNIT_SYMBOLS: [&str; BASE_QUANTITY_COUNT] =
    ["m", "kg", "s", "A", "K", "mol", "cd", "rad"];

/// Number of bits used by each exponent in a packed representation.
const BITS_PER_EXPONENT: u32 = 5;
const EXPONENT_MASK: i64 = (1 << BITS_PER_EXPONENT) - 1;
const MIN_EXPONENT: i8 = -(1 << (BITS_PER_EXPONENT - 1));
const MAX_EXPONENT: i8 = (1 << (BITS_PER_EXPONENT - 1)) - 1;

/// Type-level dimensions: exponents of length, mass, time, current,
/// temperature, amount of substance, luminous intensity, and angle.
///
/// This type is never constructed.
pub struct Dimensions<L, M, T, I, K, N, J, A>(PhantomData<(L, M, T, I, K, N, J, A)>);

/// Dimensions of a pure number.
pub type NoDimensions = Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Compile-time physical dimensions.
pub trait Dimension {
    /// Exponent of length.
    const LENGTH: i8;
    /// Exponent of mass.
    const MASS: i8;
    /// Exponent of time.
    const TIME: i8;
    /// Exponent of electric current.
    const CURRENT: i8;
    /// Exponent of thermodynamic temperature.
    const TEMPERATURE: i8;
    /// Exponent of amount of substance.
    const AMOUNT: i8;
    /// Exponent of luminous intensity.
    const LUMINOUS_INTENSITY: i8;
    /// Exponent of angle.
    const ANGLE: i8;

    /// All exponents, in the order of [`BASE_QUANTITY_NAMES`].
    const EXPONENTS: [i8; BASE_QUANTITY_COUNT] = [
        Self::LENGTH,
        Self::MASS,
        Self::TIME,
        Self::CURRENT,
        Self::TEMPERATURE,
        Self::AMOUNT,
        Self::LUMINOUS_INTENSITY,
        Self::ANGLE,
    ];

    /// Packed representation used on the wire. See [`pack`].
    const REPRESENTATION: i64 = pack(Self::EXPONENTS);
}

impl<L, M, T, I, K, N, J, A> Dimension for Dimensions<L, M, T, I, K, N, J, A>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    K: Integer,
    N: Integer,
    J: Integer,
    A: Integer,
{
    const LENGTH: i8 = L::I8;
    const MASS: i8 = M::I8;
    const TIME: i8 = T::I8;
    const CURRENT: i8 = I::I8;
    const TEMPERATURE: i8 = K::I8;
    const AMOUNT: i8 = N::I8;
    const LUMINOUS_INTENSITY: i8 = J::I8;
    const ANGLE: i8 = A::I8;
}

/// Packs dimension exponents into an integer, using 5 bits of two's
/// complement per exponent starting with length in the lowest bits.
///
/// For example, speed (length¹ time⁻¹) packs to `0x7C01`.
///
/// # Panics
///
/// Panics if an exponent is outside the range `-16..=15`. When evaluated as
/// part of [`Dimension::REPRESENTATION`] this is a compile-time error.
pub const fn pack(exponents: [i8; BASE_QUANTITY_COUNT]) -> i64 {
    let mut ret = 0_i64;
    let mut i = 0;
    while i < BASE_QUANTITY_COUNT {
        let e = exponents[i];
        assert!(
            MIN_EXPONENT <= e && e <= MAX_EXPONENT,
            "dimension exponent out of range",
        );
        ret |= (e as i64 & EXPONENT_MASK) << (i as u32 * BITS_PER_EXPONENT);
        i += 1;
    }
    ret
}

/// Unpacks dimension exponents from the representation produced by [`pack`].
/// Bits above the last exponent are ignored.
pub const fn unpack(representation: i64) -> [i8; BASE_QUANTITY_COUNT] {
    let mut ret = [0_i8; BASE_QUANTITY_COUNT];
    let mut i = 0;
    while i < BASE_QUANTITY_COUNT {
        let bits = (representation >> (i as u32 * BITS_PER_EXPONENT)) & EXPONENT_MASK;
        // sign-extend
        ret[i] = if bits > MAX_EXPONENT as i64 {
            (bits - (1 << BITS_PER_EXPONENT)) as i8
        } else {
            bits as i8
        };
        i += 1;
    }
    ret
}

/// Dimensions of the product of two quantities.
pub trait DimensionProduct<Rhs: Dimension>: Dimension {
    /// Dimensions of the product.
    type Output: Dimension;
}

/// Dimensions of the quotient of two quantities.
pub trait DimensionQuotient<Rhs: Dimension>: Dimension {
    /// Dimensions of the quotient.
    type Output: Dimension;
}

/// Dimensions of the square root of a quantity. Only implemented when every
/// exponent is even.
pub trait DimensionSqrt: Dimension {
    /// Dimensions of the square root.
    type Output: Dimension;
}

macro_rules! impl_dimension_binary_op {
    (impl $trait_name:ident via $op:ident => $alias:ident; $($lhs:ident $rhs:ident),+) => {
        impl<$($lhs, $rhs),+> $trait_name<Dimensions<$($rhs),+>> for Dimensions<$($lhs),+>
        where
            $(
                $lhs: Integer + $op<$rhs>,
                $rhs: Integer,
                $alias<$lhs, $rhs>: Integer,
            )+
        {
            type Output = Dimensions<$($alias<$lhs, $rhs>),+>;
        }
    };
}
impl_dimension_binary_op!(
    impl DimensionProduct via Add => Sum;
    L1 L2, M1 M2, T1 T2, I1 I2, K1 K2, N1 N2, J1 J2, A1 A2
);
impl_dimension_binary_op!(
    impl DimensionQuotient via Sub => Diff;
    L1 L2, M1 M2, T1 T2, I1 I2, K1 K2, N1 N2, J1 J2, A1 A2
);

impl<L, M, T, I, K, N, J, A> DimensionSqrt for Dimensions<L, M, T, I, K, N, J, A>
where
    L: Integer + PartialDiv<P2>,
    M: Integer + PartialDiv<P2>,
    T: Integer + PartialDiv<P2>,
    I: Integer + PartialDiv<P2>,
    K: Integer + PartialDiv<P2>,
    N: Integer + PartialDiv<P2>,
    J: Integer + PartialDiv<P2>,
    A: Integer + PartialDiv<P2>,
    PartialQuot<L, P2>: Integer,
    PartialQuot<M, P2>: Integer,
    PartialQuot<T, P2>: Integer,
    PartialQuot<I, P2>: Integer,
    PartialQuot<K, P2>: Integer,
    PartialQuot<N, P2>: Integer,
    PartialQuot<J, P2>: Integer,
    PartialQuot<A, P2>: Integer,
{
    type Output = Dimensions<
        PartialQuot<L, P2>,
        PartialQuot<M, P2>,
        PartialQuot<T, P2>,
        PartialQuot<I, P2>,
        PartialQuot<K, P2>,
        PartialQuot<N, P2>,
        PartialQuot<J, P2>,
        PartialQuot<A, P2>,
    >;
}

/// Formats packed dimensions using SI base unit symbols, such as `m s^-1`.
/// Returns an empty string for dimensionless values.
pub fn unit_symbols(representation: i64) -> String {
    let mut ret = String::new();
    for (symbol, exponent) in std::iter::zip(BASE_UNIT_SYMBOLS, unpack(representation)) {
        if exponent == 0 {
            continue;
        }
        if !ret.is_empty() {
            ret.push(' ');
        }
        ret.push_str(symbol);
        if exponent != 1 {
            ret.push('^');
            ret.push_str(&exponent.to_string());
        }
    }
    ret
}
