use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quantities::si::{METRE, RADIAN, SECOND};
use quantities::{AngularFrequency, Area, Length, Volume};
use testing_utilities::algebra::{
    assert_close, test_alternating_bilinear_map, test_bilinear_map, test_equality,
    test_lie_bracket, test_symmetric_positive_definite_bilinear_map, test_vector_space,
};
use testing_utilities::assert_approx_eq;

use super::*;
use crate::{MultivectorPayload, SerializationError, require_inertial};

crate::frame!(World, inertial = true);
crate::frame!(Rotating, inertial = false);

type Position = Vector<Length, World>;
type Spin = Bivector<f64, World>;

fn position(x: f64, y: f64, z: f64) -> Position {
    Vector::from_coordinates(R3Element::new(x, y, z).map(|c| c * METRE))
}

fn samples() -> [Position; 4] {
    [
        position(1.0, -2.0, 5.0),
        position(3.0, 4.0, -1.0),
        position(-0.5, 2.0, 2.0),
        position(9.0, 0.0, -3.0),
    ]
}

#[test]
fn test_frames() {
    require_inertial::<World>();
    assert_eq!("World", World::NAME);
    assert!(World::IS_INERTIAL);
    assert_eq!("Rotating", Rotating::NAME);
    assert!(!Rotating::IS_INERTIAL);
}

#[test]
fn test_multivector_vector_spaces() {
    let [a, b, c, _] = samples();
    test_equality(a, b);
    test_vector_space(Position::zero(), a, b, c, 3.0, -1.5, 1e-12);

    let [p, q, r] =
        [a, b, c].map(|v| Spin::from_coordinates(v.coordinates().map(Length::si_magnitude)));
    test_vector_space(Spin::zero(), p, q, r, 0.5, 7.0, 1e-12);

    let [s, t, u] =
        [2.0, -0.25, 8.0].map(|c| Trivector::<Volume, World>::new(c * METRE * METRE * METRE));
    test_vector_space(Trivector::zero(), s, t, u, -4.0, 0.125, 1e-12);
}

#[test]
fn test_multivector_accessors() {
    let v = position(1.0, 2.0, 2.0);
    assert_eq!(R3Element::new(1.0, 2.0, 2.0).map(|c| c * METRE), v.coordinates());
    assert_eq!(3.0 * METRE, v.norm());
    assert_eq!(-v, v * Sign::Neg);

    let b = Spin::new(0.0, 3.0, -4.0);
    assert_eq!(5.0, b.norm());
    let mut flipped = b;
    flipped *= Sign::Neg;
    assert_eq!(-b, flipped);

    let t = Trivector::<Volume, World>::new(-2.0 * METRE * METRE * METRE);
    assert_eq!(-2.0 * METRE * METRE * METRE, t.coordinates());
    assert_eq!(2.0 * METRE * METRE * METRE, t.norm());

    assert!(Position::default().is_zero());
    assert_eq!("(1 m, 2 m, 2 m) in World", v.to_string());
    assert_eq!("-2.0 m^3 in World", format!("{t:.1}"));
}

#[test]
fn test_inner_products() {
    let [a, b, c, d] = samples();
    assert_eq!(-10.0 * METRE * METRE, inner_product(a, b));
    test_symmetric_positive_definite_bilinear_map(
        |l: Position, r: Position| inner_product(l, r),
        a,
        b,
        c,
        d,
        -2.0,
        1e-12,
    );

    let [p, q, r, s] =
        samples().map(|v| Bivector::<Length, World>::from_coordinates(v.coordinates()));
    test_symmetric_positive_definite_bilinear_map(
        |l: Bivector<Length, World>, r: Bivector<Length, World>| l.inner_product(r),
        p,
        q,
        r,
        s,
        1.5,
        1e-12,
    );

    let volume = |c: f64| Trivector::<Volume, World>::new(c * METRE * METRE * METRE);
    assert_eq!(
        6.0 * (METRE * METRE * METRE) * (METRE * METRE * METRE),
        inner_product(volume(2.0), volume(3.0)),
    );
    test_symmetric_positive_definite_bilinear_map(
        |l: Trivector<Volume, World>, r: Trivector<Volume, World>| inner_product(l, r),
        volume(2.0),
        volume(-3.0),
        volume(0.5),
        volume(7.0),
        -4.0,
        1e-12,
    );
}

#[test]
fn test_wedge_products() {
    let [a, b, c, d] = samples();

    let ab: Bivector<Area, World> = wedge(a, b);
    assert_eq!(
        R3Element::new(-18.0, 16.0, 10.0).map(|c| c * METRE * METRE),
        ab.coordinates(),
    );
    test_alternating_bilinear_map(
        |l: Position, r: Position| wedge(l, r),
        a,
        b,
        c,
        d,
        4.0,
        1e-12,
    );

    // The two orders of a bivector-vector wedge agree.
    let abc: Trivector<Volume, World> = wedge(ab, c);
    assert_relative_eq!(abc, wedge(c, ab), max_relative = 1e-12);
    assert_relative_eq!(abc, wedge(a, wedge(b, c)), max_relative = 1e-12);
    // Swapping two vectors flips the orientation of the volume.
    assert_relative_eq!(-abc, wedge(wedge(b, a), c), max_relative = 1e-12);

    let cd: Bivector<Area, World> = wedge(c, d);
    test_bilinear_map(
        |l: Bivector<Area, World>, r: Position| wedge(l, r),
        ab,
        cd,
        c,
        d,
        -0.5,
        1e-12,
    );
    test_bilinear_map(
        |l: Position, r: Bivector<Area, World>| wedge(l, r),
        c,
        d,
        ab,
        cd,
        2.0,
        1e-12,
    );

    // A vector wedged with a bivector containing it spans no volume.
    assert_approx_eq!(Trivector::zero(), wedge(ab, a));
}

#[test]
fn test_commutator() {
    let spins = [
        Spin::new(1.0, -2.0, 5.0),
        Spin::new(3.0, 4.0, -1.0),
        Spin::new(-0.5, 2.0, 2.0),
        Spin::new(9.0, 0.0, -3.0),
    ];
    let [a, b, c, d] = spins;
    assert_eq!(Spin::new(-18.0, 16.0, 10.0), commutator(a, b));
    test_lie_bracket(commutator::<f64, f64, World>, a, b, c, d, 0.25, 1e-9);
}

#[test]
fn test_bivector_actions() {
    let [u, v, w, _] = samples();
    let omega = Bivector::<AngularFrequency, World>::new(
        0.0 * RADIAN / SECOND,
        0.0 * RADIAN / SECOND,
        2.0 * RADIAN / SECOND,
    );

    let rate = omega * position(1.0, 0.0, 0.0);
    assert_eq!(
        R3Element::new(0.0, 2.0, 0.0),
        rate.coordinates().map(|c| c.si_magnitude()),
    );
    assert_eq!(-rate, position(1.0, 0.0, 0.0) * omega);

    test_bilinear_map(
        |b: Bivector<AngularFrequency, World>, x: Position| b * x,
        omega,
        omega * 3.0,
        u,
        v,
        -1.25,
        1e-12,
    );

    // Left action of u ∧ v on w expands by the triple product identity.
    let lhs = wedge(u, v) * w;
    let rhs = v * inner_product(u, w) - u * inner_product(v, w);
    assert_relative_eq!(lhs, rhs, epsilon = 1e-12, max_relative = 1e-12);
}

#[test]
fn test_multivector_mixed_products() {
    let k = 2.5_f64;
    let v = position(1.0, -2.0, 5.0);
    let t = 4.0 * SECOND;

    let kvt = (k * v) * t;
    assert_relative_eq!(kvt, k * (v * t), max_relative = 1e-15);
    assert_relative_eq!(kvt, v * (k * t), max_relative = 1e-15);
    assert_eq!(t * v, v * t);
    assert_relative_eq!(v, (v * t) / t, max_relative = 1e-15);

    let mut w = v;
    w *= 4.0;
    w /= 2.0;
    assert_eq!(v * 2.0, w);
    assert_eq!(v / 0.5, w);
}

#[test]
fn test_premultiplication() {
    let b = Spin::new(1.0, -2.0, 0.5);
    assert_eq!(b * 3.0, 3.0 * b);
    let rate: Bivector<AngularFrequency, World> = (RADIAN / SECOND) * b;
    assert_eq!(b * (RADIAN / SECOND), rate);
    assert_eq!(
        R3Element::new(1.0, -2.0, 0.5),
        rate.coordinates().map(|c| c.si_magnitude()),
    );

    let t = Trivector::<Volume, World>::new(2.0 * METRE * METRE * METRE);
    assert_eq!(t * -0.5, -0.5 * t);
    let swept = (3.0 * SECOND) * t;
    assert_eq!(t * (3.0 * SECOND), swept);
    assert_eq!(6.0, swept.coordinates().si_magnitude());
}

#[test]
fn test_norms_of_extreme_magnitudes() {
    let far = position(3e200, 0.0, -4e200);
    testing_utilities::assert_almost_equals!(5e200 * METRE, far.norm(), 8);
    let near = Spin::new(0.0, 1e-200, 0.0);
    assert_eq!(1e-200, near.norm());
    let t = Trivector::<f64, World>::new(-1e300);
    assert_eq!(1e300, t.norm());
}

#[test]
fn test_multivector_serialization() {
    let v = position(1.0, -2.0, 5.0);
    let message = v.write_to_message();
    assert_eq!("World", message.frame);
    assert!(matches!(message.payload, MultivectorPayload::Vector(_)));
    assert_eq!(v, Position::read_from_message(&message).expect("same type"));

    assert!(matches!(
        Vector::<Length, Rotating>::read_from_message(&message),
        Err(SerializationError::Frame { expected: "Rotating", .. }),
    ));
    assert!(matches!(
        Bivector::<Length, World>::read_from_message(&message),
        Err(SerializationError::Rank {
            expected: "bivector",
            found: "vector",
        }),
    ));
    assert!(matches!(
        Vector::<f64, World>::read_from_message(&message),
        Err(SerializationError::ExpectedDouble),
    ));

    let b = Spin::new(0.5, 0.25, -1.0);
    assert_eq!(b, Spin::read_from_message(&b.write_to_message()).expect("same type"));

    let t = Trivector::<Volume, World>::new(-3.0 * METRE * METRE * METRE);
    let message = t.write_to_message();
    assert_eq!(
        t,
        Trivector::<Volume, World>::read_from_message(&message).expect("same type"),
    );
    assert!(matches!(
        Trivector::<Area, World>::read_from_message(&message),
        Err(SerializationError::Dimensions(_)),
    ));
    assert!(matches!(
        Position::read_from_message(&message),
        Err(SerializationError::Rank {
            expected: "vector",
            found: "trivector",
        }),
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_multivector_binary_encoding() {
    let message = position(1.0, -2.0, 5.0).write_to_message();
    let bytes = message.to_bytes().expect("encodable");
    let decoded = crate::MultivectorMessage::from_bytes(&bytes).expect("decodable");
    assert_eq!(message, decoded);
    assert_eq!(
        position(1.0, -2.0, 5.0),
        Position::read_from_message(&decoded).expect("same type"),
    );
}

fn spin_strategy() -> impl Strategy<Value = Spin> {
    proptest::array::uniform3(-10.0..10.0_f64).prop_map(|[x, y, z]| Spin::new(x, y, z))
}

proptest! {
    #[test]
    fn proptest_jacobi_identity(a in spin_strategy(), b in spin_strategy(), c in spin_strategy()) {
        let jacobi = commutator(a, commutator(b, c))
            + commutator(b, commutator(c, a))
            + commutator(c, commutator(a, b));
        assert_close(jacobi, Spin::zero(), 1e-9);
    }

    #[test]
    fn proptest_actions_are_opposite(b in spin_strategy(), v in spin_strategy()) {
        let v = Vector::<f64, World>::from_coordinates(v.coordinates());
        prop_assert_eq!(-(b * v), v * b);
    }
}
