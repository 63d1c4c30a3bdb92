//! Grassmann algebra over three-dimensional space, checked for physical
//! dimensions and reference frames at compile time.
//!
//! ```
//! use geometry::{Bivector, Vector, frame, wedge};
//! use quantities::si::{METRE, SECOND};
//!
//! frame!(
//!     /// Frame fixed to the sun.
//!     pub Heliocentric,
//!     inertial = true
//! );
//!
//! let r = Vector::<_, Heliocentric>::new(1.0 * METRE, 0.0 * METRE, 0.0 * METRE);
//! let speed = METRE / SECOND;
//! let v = Vector::<_, Heliocentric>::new(0.0 * speed, 2.0 * speed, 0.0 * speed);
//! let h: Bivector<_, Heliocentric> = wedge(r, v);
//! assert_eq!(2.0 * METRE * METRE / SECOND, h.coordinates().z);
//! ```

pub use quantities;

#[macro_use]
mod impl_macros;

pub mod error;
pub mod frame;
pub mod grassmann;
pub mod r3_element;
pub mod scalar;
pub mod serialization;
pub mod sign;

pub use error::GeometryError;
pub use frame::{Frame, require_inertial};
pub use grassmann::{
    Bivector, InnerProduct, Trivector, Vector, Wedge, commutator, inner_product, wedge,
};
pub use r3_element::{R3Element, cross, dot, normalize};
pub use scalar::Scalar;
pub use serialization::{
    MultivectorMessage, MultivectorPayload, R3ElementMessage, ScalarMessage, SerializationError,
};
pub use sign::Sign;
