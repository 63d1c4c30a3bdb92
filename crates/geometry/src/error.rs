//! Errors for degenerate geometric inputs.

use thiserror::Error;

/// Precondition violated by a geometric operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Attempted to construct a [`crate::Sign`] from zero.
    #[error("cannot construct a sign from zero")]
    ZeroSign,
    /// Attempted to construct a [`crate::Sign`] from NaN.
    #[error("cannot construct a sign from NaN")]
    NanSign,
    /// Attempted to orthogonalize against a vector with zero norm.
    #[error("cannot orthogonalize against a null vector")]
    NullVectorOrthogonalization,
    /// Attempted to normalize a vector with zero norm.
    #[error("cannot normalize a null vector")]
    NullVectorNormalization,
}
