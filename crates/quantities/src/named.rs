//! Named quantities.

use typenum::{N1, N2, P1, P2, P3, Z0};

use crate::{Dimensions, Quantity};

/// Length.
pub type Length = Quantity<Dimensions<P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Mass.
pub type Mass = Quantity<Dimensions<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Time.
pub type Time = Quantity<Dimensions<Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0>>;
/// Electric current.
pub type Current = Quantity<Dimensions<Z0, Z0, Z0, P1, Z0, Z0, Z0, Z0>>;
/// Thermodynamic temperature.
pub type Temperature = Quantity<Dimensions<Z0, Z0, Z0, Z0, P1, Z0, Z0, Z0>>;
/// Amount of substance.
pub type Amount = Quantity<Dimensions<Z0, Z0, Z0, Z0, Z0, P1, Z0, Z0>>;
/// Luminous intensity.
pub type LuminousIntensity = Quantity<Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, P1, Z0>>;
/// Plane angle.
pub type Angle = Quantity<Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, Z0, P1>>;

/// Area.
pub type Area = Quantity<Dimensions<P2, Z0, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Volume.
pub type Volume = Quantity<Dimensions<P3, Z0, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Speed.
pub type Speed = Quantity<Dimensions<P1, Z0, N1, Z0, Z0, Z0, Z0, Z0>>;
/// Acceleration.
pub type Acceleration = Quantity<Dimensions<P1, Z0, N2, Z0, Z0, Z0, Z0, Z0>>;
/// Angular frequency.
pub type AngularFrequency = Quantity<Dimensions<Z0, Z0, N1, Z0, Z0, Z0, Z0, P1>>;
/// Momentum.
pub type Momentum = Quantity<Dimensions<P1, P1, N1, Z0, Z0, Z0, Z0, Z0>>;
/// Force.
pub type Force = Quantity<Dimensions<P1, P1, N2, Z0, Z0, Z0, Z0, Z0>>;
/// Energy.
pub type Energy = Quantity<Dimensions<P2, P1, N2, Z0, Z0, Z0, Z0, Z0>>;
