use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::dimensions::{pack, unpack};
use crate::nautical::KNOT;
use crate::si::*;
use crate::*;

#[test]
fn test_dimension_representation() {
    assert_eq!(0x7C01, Speed::dimensions());
    assert_eq!(0x0001, Length::dimensions());
    assert_eq!(0x0002, Area::dimensions());
    assert_eq!(0x0400, Time::dimensions());
    assert_eq!(0, Dimensionless::dimensions());
    assert_eq!([1, 0, -1, 0, 0, 0, 0, 0], unpack(0x7C01));
}

#[test]
fn test_pack_unpack_extremes() {
    let exponents = [-16, 15, -1, 1, 0, 2, -2, 7];
    assert_eq!(exponents, unpack(pack(exponents)));
}

proptest! {
    #[test]
    fn proptest_pack_unpack(exponents in proptest::array::uniform8(-16..=15_i8)) {
        prop_assert_eq!(exponents, unpack(pack(exponents)));
    }
}

#[test]
fn test_derived_dimensions() {
    let distance: Length = 100.0 * METRE;
    let time: Time = 8.0 * SECOND;

    let speed: Speed = distance / time;
    assert_eq!(12.5, speed.si_magnitude());

    let acceleration: Acceleration = speed / time;
    assert_eq!(12.5 / 8.0, acceleration.si_magnitude());

    let area: Area = distance * distance;
    let volume: Volume = area * distance;
    assert_eq!(1e6, volume.si_magnitude());

    let ratio: Dimensionless = distance / distance;
    assert_eq!(1.0, f64::from(ratio));

    let frequency = 1.0 / time;
    let back: Dimensionless = frequency * time;
    assert_eq!(1.0, f64::from(back));

    let force: Force = 2.0 * KILOGRAM * acceleration;
    let energy: Energy = force * distance;
    assert_eq!(2.0 * 12.5 / 8.0 * 100.0, energy.si_magnitude());
}

#[test]
fn test_sqrt() {
    let area: Area = 9.0 * METRE * METRE;
    let side: Length = area.sqrt();
    assert_eq!(3.0 * METRE, side);

    let speed_squared = (4.0 * METRE / SECOND) * (4.0 * METRE / SECOND);
    let speed: Speed = speed_squared.square_root();
    assert_eq!(4.0 * METRE / SECOND, speed);

    assert_eq!(5.0, 25.0_f64.square_root());
}

#[test]
fn test_arithmetic() {
    let mut x = 3.0 * METRE;
    x += 2.0 * METRE;
    assert_eq!(5.0 * METRE, x);
    x -= 1.0 * METRE;
    assert_eq!(4.0 * METRE, x);
    x *= 2.5;
    assert_eq!(10.0 * METRE, x);
    x /= 4.0;
    assert_eq!(2.5 * METRE, x);
    assert_eq!(-2.5 * METRE, -x);
    assert_eq!(2.5 * METRE, (-x).abs());
    assert!(METRE < 2.0 * METRE);

    let total: Length = [METRE, 2.0 * METRE, 3.0 * METRE].into_iter().sum();
    assert_eq!(6.0 * METRE, total);
}

#[test]
fn test_units() {
    let tolerance = 1e-12;
    assert_relative_eq!(
        1.0,
        (60.0 * KNOT).in_units_of(nautical::NAUTICAL_MILE / MINUTE),
        max_relative = tolerance
    );
    assert_relative_eq!(
        1.0,
        (1760.0 * 3.0 * uk::FOOT).in_units_of(uk::MILE),
        max_relative = tolerance
    );
    assert_relative_eq!(8.0, uk::MILE.in_units_of(uk::FURLONG), max_relative = tolerance);
    assert_relative_eq!(
        206_264.806_247_096_36,
        astronomy::PARSEC.in_units_of(astronomy::ASTRONOMICAL_UNIT),
        max_relative = tolerance
    );
    assert_eq!(1000.0 * METRE, kilo(METRE));
    assert_eq!(0.001 * SECOND, milli(SECOND));
}

#[test]
fn test_display() {
    assert_eq!("1 m s^-1", (METRE / SECOND).to_string());
    assert_eq!("2.5 m kg s^-2", Force::from_si(2.5).to_string());
    assert_eq!("3 m^2", (3.0 * METRE * METRE).to_string());
    assert_eq!("0.5", (METRE / (2.0 * METRE)).to_string());
    assert_eq!("-1.50 m", format!("{:.2}", -1.5 * METRE));
}

#[test]
fn test_serialization() {
    let speed = -2.0 * METRE / SECOND;
    let message = speed.write_to_message();
    assert_eq!(0x7C01, message.dimensions);
    assert_eq!(-2.0, message.magnitude);
    assert_eq!(Ok(speed), Speed::read_from_message(&message));

    assert_eq!(
        Err(DimensionMismatch {
            expected: Length::dimensions(),
            found: 0x7C01,
        }),
        Length::read_from_message(&message),
    );
    assert_eq!(
        "expected dimensions 0x0001 (m), found 0x7c01 (m s^-1)",
        Length::read_from_message(&message).unwrap_err().to_string(),
    );
}

proptest! {
    #[test]
    fn proptest_serialization_roundtrip(magnitude in proptest::num::f64::NORMAL) {
        let q = Speed::from_si(magnitude);
        let read = Speed::read_from_message(&q.write_to_message());
        prop_assert_eq!(Ok(q.si_magnitude().to_bits()), read.map(|q| q.si_magnitude().to_bits()));
    }
}
