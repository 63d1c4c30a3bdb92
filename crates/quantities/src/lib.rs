//! Physical quantities with dimensions checked at compile time.
//!
//! ```
//! use quantities::si::{METRE, SECOND};
//! use quantities::{Length, Speed, Time};
//!
//! let d: Length = 100.0 * METRE;
//! let t: Time = 9.58 * SECOND;
//! let v: Speed = d / t;
//! assert_eq!(v.write_to_message().dimensions, 0x7C01);
//! ```

pub use typenum;

pub mod dimensions;
pub mod named;
mod quantity;
pub mod serialization;
pub mod units;

pub use dimensions::{
    Dimension, DimensionProduct, DimensionQuotient, DimensionSqrt, Dimensions, NoDimensions,
};
pub use named::*;
pub use quantity::{Dimensionless, Product, Quantity, Quotient, SquareRoot, SquareRootOf};
pub use serialization::{DimensionMismatch, QuantityMessage};
pub use units::{astronomy, constants, kilo, milli, nautical, si, uk};

#[cfg(test)]
mod tests;
