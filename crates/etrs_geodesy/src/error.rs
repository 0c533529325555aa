//! Error types for geographic/Cartesian conversion.

use thiserror::Error;

/// Errors from ellipsoid/datum lookup or coordinate conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeodesyError {
    /// The ellipsoid/datum pair is unknown or has no conversion.
    #[error("unsupported datum: {0}")]
    UnsupportedDatum(String),
    /// A coordinate was non-finite or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The inverse conversion did not settle on a latitude.
    #[error("latitude iteration did not converge for ({x}, {y}, {z})")]
    NoConvergence { x: f64, y: f64, z: f64 },
}
