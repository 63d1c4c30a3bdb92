//! Wire messages for scalars, triples, and multivectors.
//!
//! Every scalar is tagged as either a plain double or a dimensioned quantity,
//! and reading a message back checks that the tag, the dimensions, the rank,
//! and the frame all match the target type.

use quantities::{DimensionMismatch, QuantityMessage};
use thiserror::Error;

use crate::{Bivector, Frame, R3Element, Scalar, Trivector, Vector};

/// Serialized scalar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScalarMessage {
    /// Dimensionless `f64`.
    Double(f64),
    /// Dimensioned quantity.
    Quantity(QuantityMessage),
}

/// Serialized [`R3Element`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct R3ElementMessage {
    /// First component.
    pub x: ScalarMessage,
    /// Second component.
    pub y: ScalarMessage,
    /// Third component.
    pub z: ScalarMessage,
}

/// Serialized multivector, tagged with the name of its frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MultivectorMessage {
    /// Name of the frame. See [`Frame::NAME`].
    pub frame: String,
    /// Rank and coordinates.
    pub payload: MultivectorPayload,
}

/// Coordinates of a serialized multivector, tagged by rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MultivectorPayload {
    /// Coordinates of a vector.
    Vector(R3ElementMessage),
    /// Coordinates of the Hodge dual of a bivector.
    Bivector(R3ElementMessage),
    /// Coefficient of a trivector.
    Trivector(ScalarMessage),
}

impl MultivectorPayload {
    /// Returns the name of the rank.
    pub fn rank_name(&self) -> &'static str {
        match self {
            MultivectorPayload::Vector(_) => "vector",
            MultivectorPayload::Bivector(_) => "bivector",
            MultivectorPayload::Trivector(_) => "trivector",
        }
    }
}

/// Error produced when reading a message into a type that does not match it.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Expected a plain double but found a quantity.
    #[error("expected a double, found a quantity")]
    ExpectedDouble,
    /// Expected a quantity but found a plain double.
    #[error("expected a quantity, found a double")]
    ExpectedQuantity,
    /// Found a quantity with the wrong dimensions.
    #[error(transparent)]
    Dimensions(#[from] DimensionMismatch),
    /// Found a multivector of the wrong rank.
    #[error("expected a {expected}, found a {found}")]
    Rank {
        /// Rank of the target type.
        expected: &'static str,
        /// Rank found in the message.
        found: &'static str,
    },
    /// Found a multivector in the wrong frame.
    #[error("expected frame {expected:?}, found {found:?}")]
    Frame {
        /// Frame of the target type.
        expected: &'static str,
        /// Frame found in the message.
        found: String,
    },
    /// Malformed binary encoding.
    #[cfg(feature = "serde")]
    #[error("malformed message: {0}")]
    Encoding(#[from] bincode::Error),
}

impl<S: Scalar> R3Element<S> {
    /// Serializes the triple.
    pub fn write_to_message(&self) -> R3ElementMessage {
        R3ElementMessage {
            x: self.x.to_scalar_message(),
            y: self.y.to_scalar_message(),
            z: self.z.to_scalar_message(),
        }
    }

    /// Deserializes a triple.
    ///
    /// # Errors
    ///
    /// Returns an error if any component holds the wrong kind of scalar or a
    /// quantity with the wrong dimensions.
    pub fn read_from_message(message: &R3ElementMessage) -> Result<Self, SerializationError> {
        let read = |name: &str, component: &ScalarMessage| {
            S::from_scalar_message(component).inspect_err(|e| {
                log::error!("cannot read component {name} of R3Element: {e}");
            })
        };
        Ok(R3Element {
            x: read("x", &message.x)?,
            y: read("y", &message.y)?,
            z: read("z", &message.z)?,
        })
    }
}

impl MultivectorMessage {
    /// Returns the payload if the message is in the frame `F`.
    fn payload_in<F: Frame>(&self) -> Result<&MultivectorPayload, SerializationError> {
        if self.frame == F::NAME {
            Ok(&self.payload)
        } else {
            log::error!("expected multivector in {}, found {}", F::NAME, self.frame);
            Err(SerializationError::Frame {
                expected: F::NAME,
                found: self.frame.clone(),
            })
        }
    }
}

fn wrong_rank(expected: &'static str, payload: &MultivectorPayload) -> SerializationError {
    let found = payload.rank_name();
    log::error!("expected {expected}, found {found}");
    SerializationError::Rank { expected, found }
}

impl<S: Scalar, F: Frame> Vector<S, F> {
    /// Serializes the vector along with its frame.
    pub fn write_to_message(&self) -> MultivectorMessage {
        MultivectorMessage {
            frame: F::NAME.to_owned(),
            payload: MultivectorPayload::Vector(self.coordinates().write_to_message()),
        }
    }

    /// Deserializes a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is in another frame, has another rank,
    /// or has coordinates of the wrong scalar type.
    pub fn read_from_message(message: &MultivectorMessage) -> Result<Self, SerializationError> {
        match message.payload_in::<F>()? {
            MultivectorPayload::Vector(c) => Ok(Self::from_coordinates(
                R3Element::read_from_message(c)?,
            )),
            other => Err(wrong_rank("vector", other)),
        }
    }
}

impl<S: Scalar, F: Frame> Bivector<S, F> {
    /// Serializes the bivector along with its frame.
    pub fn write_to_message(&self) -> MultivectorMessage {
        MultivectorMessage {
            frame: F::NAME.to_owned(),
            payload: MultivectorPayload::Bivector(self.coordinates().write_to_message()),
        }
    }

    /// Deserializes a bivector.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is in another frame, has another rank,
    /// or has coordinates of the wrong scalar type.
    pub fn read_from_message(message: &MultivectorMessage) -> Result<Self, SerializationError> {
        match message.payload_in::<F>()? {
            MultivectorPayload::Bivector(c) => Ok(Self::from_coordinates(
                R3Element::read_from_message(c)?,
            )),
            other => Err(wrong_rank("bivector", other)),
        }
    }
}

impl<S: Scalar, F: Frame> Trivector<S, F> {
    /// Serializes the trivector along with its frame.
    pub fn write_to_message(&self) -> MultivectorMessage {
        MultivectorMessage {
            frame: F::NAME.to_owned(),
            payload: MultivectorPayload::Trivector(self.coordinates().to_scalar_message()),
        }
    }

    /// Deserializes a trivector.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is in another frame, has another rank,
    /// or has a coordinate of the wrong scalar type.
    pub fn read_from_message(message: &MultivectorMessage) -> Result<Self, SerializationError> {
        match message.payload_in::<F>()? {
            MultivectorPayload::Trivector(c) => {
                let coordinate = S::from_scalar_message(c).inspect_err(|e| {
                    log::error!("cannot read coordinate of trivector: {e}");
                })?;
                Ok(Self::from_coordinates(coordinate))
            }
            other => Err(wrong_rank("trivector", other)),
        }
    }
}

#[cfg(feature = "serde")]
impl R3ElementMessage {
    /// Encodes the message as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a message from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a valid encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(feature = "serde")]
impl MultivectorMessage {
    /// Encodes the message as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a message from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a valid encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
