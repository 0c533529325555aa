//! Error types for the Helmert transform engine.

use thiserror::Error;

/// Errors from parameter construction or transform input validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HelmertError {
    /// A coordinate, velocity, or epoch was NaN or infinite.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A parameter bundle had missing or malformed fields.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// One station of a batch failed.
    #[error("station {index}: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<HelmertError>,
    },
}
