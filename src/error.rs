//! Error types for checking and resolving colors.

use crate::color::Space;
use thiserror::Error;

/// Failure modes of the checker layer and the resolver.
///
/// Every variant is terminal for the call that raised it; conversions are
/// pure and deterministic, so nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The identifier is not in the closed set of recognized spaces, or the
    /// space has no input checker (output-only identifiers such as
    /// `ansi16`).
    #[error("unsupported color space: {0}")]
    UnsupportedSpace(String),

    /// A required channel of a numeric space is missing or not a finite
    /// number.
    #[error("invalid {space} data: {field} is not a finite number")]
    InvalidColorData {
        /// The space whose checker rejected the value.
        space: Space,
        /// The canonical name of the offending field.
        field: &'static str,
    },

    /// The value is not a proper 3- or 6-digit hex literal.
    #[error("invalid hex value: {0:?}")]
    InvalidHex(String),

    /// No path exists from the input space to either hub representation.
    #[error("cannot derive a hub representation from {0}")]
    UnresolvableHub(Space),

    /// The requested output space has no conversion registry entry.
    #[error("no conversion is registered for {0}")]
    UnknownSpace(Space),
}
