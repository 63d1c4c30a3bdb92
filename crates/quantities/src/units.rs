//! Units and physical constants.
//!
//! Units are quantities, so a value is written as a number times a unit:
//! `3.0 * si::METRE`.

use crate::{Dimension, Quantity};

/// SI base units and SI-accepted units.
pub mod si {
    use crate::named::*;

    /// Metre.
    pub const METRE: Length = Length::from_si(1.0);
    /// Kilogram.
    pub const KILOGRAM: Mass = Mass::from_si(1.0);
    /// Second.
    pub const SECOND: Time = Time::from_si(1.0);
    /// Ampere.
    pub const AMPERE: Current = Current::from_si(1.0);
    /// Kelvin.
    pub const KELVIN: Temperature = Temperature::from_si(1.0);
    /// Mole.
    pub const MOLE: Amount = Amount::from_si(1.0);
    /// Candela.
    pub const CANDELA: LuminousIntensity = LuminousIntensity::from_si(1.0);
    /// Radian.
    pub const RADIAN: Angle = Angle::from_si(1.0);

    /// Minute.
    pub const MINUTE: Time = Time::from_si(60.0);
    /// Hour.
    pub const HOUR: Time = Time::from_si(3600.0);
    /// Day.
    pub const DAY: Time = Time::from_si(86_400.0);
    /// Degree of arc.
    pub const DEGREE: Angle = Angle::from_si(std::f64::consts::PI / 180.0);
}

/// Imperial units.
pub mod uk {
    use crate::named::Length;

    /// International foot.
    pub const FOOT: Length = Length::from_si(0.3048);
    /// Rod.
    pub const ROD: Length = Length::from_si(5.0292);
    /// Furlong.
    pub const FURLONG: Length = Length::from_si(201.168);
    /// International mile.
    pub const MILE: Length = Length::from_si(1609.344);
}

/// Nautical units.
pub mod nautical {
    use crate::named::{Length, Speed};

    /// Nautical mile.
    pub const NAUTICAL_MILE: Length = Length::from_si(1852.0);
    /// Knot (one nautical mile per hour).
    pub const KNOT: Speed = Speed::from_si(1852.0 / 3600.0);
}

/// Astronomical units.
pub mod astronomy {
    use crate::named::{Length, Time};

    /// Julian year of 365.25 days.
    pub const JULIAN_YEAR: Time = Time::from_si(365.25 * 86_400.0);
    /// Astronomical unit.
    pub const ASTRONOMICAL_UNIT: Length = Length::from_si(149_597_870_700.0);
    /// Parsec.
    pub const PARSEC: Length =
        Length::from_si(648_000.0 / std::f64::consts::PI * 149_597_870_700.0);
}

/// Physical constants.
pub mod constants {
    use crate::named::Speed;

    /// Speed of light in vacuum.
    pub const SPEED_OF_LIGHT: Speed = Speed::from_si(299_792_458.0);
}

/// Scales a unit by 10³.
pub fn kilo<D: Dimension>(unit: Quantity<D>) -> Quantity<D> {
    unit * 1e3
}

/// Scales a unit by 10⁻³.
pub fn milli<D: Dimension>(unit: Quantity<D>) -> Quantity<D> {
    unit * 1e-3
}
