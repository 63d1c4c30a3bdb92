//! Wire representation of quantities.

use thiserror::Error;

use crate::{Dimension, Quantity, dimensions::unit_symbols};

/// Serialized quantity: packed dimensions and SI magnitude.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuantityMessage {
    /// Packed dimension code. See [`crate::dimensions::pack`].
    pub dimensions: i64,
    /// Magnitude in SI base units.
    pub magnitude: f64,
}

/// Error produced when a serialized quantity has different dimensions than
/// the quantity type it is read as.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error(
    "expected dimensions {expected:#06x} ({}), found {found:#06x} ({})",
    describe(.expected),
    describe(.found)
)]
pub struct DimensionMismatch {
    /// Packed dimensions of the target type.
    pub expected: i64,
    /// Packed dimensions found in the message.
    pub found: i64,
}

fn describe(representation: &i64) -> String {
    match unit_symbols(*representation) {
        s if s.is_empty() => "dimensionless".to_owned(),
        s => s,
    }
}

impl<D: Dimension> Quantity<D> {
    /// Serializes the quantity.
    pub fn write_to_message(self) -> QuantityMessage {
        QuantityMessage {
            dimensions: D::REPRESENTATION,
            magnitude: self.si_magnitude(),
        }
    }

    /// Deserializes a quantity, checking that the message has dimensions `D`.
    pub fn read_from_message(message: &QuantityMessage) -> Result<Self, DimensionMismatch> {
        if message.dimensions == D::REPRESENTATION {
            Ok(Self::from_si(message.magnitude))
        } else {
            Err(DimensionMismatch {
                expected: D::REPRESENTATION,
                found: message.dimensions,
            })
        }
    }
}
