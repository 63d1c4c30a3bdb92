//! Scalar types that can be stored in triples and multivectors and sent over
//! the wire.

use std::fmt;

use num_traits::Zero;
use quantities::{Dimension, Quantity};

use crate::{ScalarMessage, SerializationError};

/// Scalar that knows its wire representation: plain `f64` values are written
/// as doubles and dimensioned quantities as quantity records.
pub trait Scalar: Copy + PartialEq + PartialOrd + fmt::Debug + Default + Zero {
    /// Returns the wire representation of the scalar.
    fn to_scalar_message(self) -> ScalarMessage;

    /// Reads a scalar from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the message holds a different kind of scalar or a
    /// quantity with different dimensions.
    fn from_scalar_message(message: &ScalarMessage) -> Result<Self, SerializationError>;
}

impl Scalar for f64 {
    fn to_scalar_message(self) -> ScalarMessage {
        ScalarMessage::Double(self)
    }

    fn from_scalar_message(message: &ScalarMessage) -> Result<Self, SerializationError> {
        match message {
            ScalarMessage::Double(value) => Ok(*value),
            ScalarMessage::Quantity(_) => Err(SerializationError::ExpectedDouble),
        }
    }
}

impl<D: Dimension> Scalar for Quantity<D> {
    fn to_scalar_message(self) -> ScalarMessage {
        ScalarMessage::Quantity(self.write_to_message())
    }

    fn from_scalar_message(message: &ScalarMessage) -> Result<Self, SerializationError> {
        match message {
            ScalarMessage::Quantity(quantity) => Ok(Quantity::read_from_message(quantity)?),
            ScalarMessage::Double(_) => Err(SerializationError::ExpectedQuantity),
        }
    }
}
