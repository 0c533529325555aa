//! Error type for the convenience pipeline.

use etrs_geodesy::GeodesyError;
use etrs_helmert::HelmertError;
use thiserror::Error;

/// Errors from any stage of the pipeline, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EtrsError {
    /// Geographic/Cartesian conversion failed.
    #[error(transparent)]
    Geodesy(#[from] GeodesyError),
    /// The Helmert transform rejected its input or parameters.
    #[error(transparent)]
    Helmert(#[from] HelmertError),
    /// One point of a batch failed.
    #[error("point {index}: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<EtrsError>,
    },
}
