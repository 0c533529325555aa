use etrs_geodesy::{GeodeticFrame, Geographic, from_cartesian, to_cartesian};
use etrs_helmert::{HelmertParameters, Position3D, StationState, transform};

use crate::error::EtrsError;
use crate::options::TransformOptions;

const PARAMS: HelmertParameters = HelmertParameters::ITRF2014_TO_ETRF2014;

/// Output of the geographic pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicResult {
    /// ETRF2014 coordinates on GRS80, at the target epoch.
    pub geographic: Geographic,
    /// ETRF2014 Cartesian position and velocity, at the target epoch.
    pub state: StationState,
}

/// Transform an ITRF2014 Cartesian position to ETRF2014.
pub fn itrf2014_to_etrf2014_cartesian(
    position: Position3D,
    options: &TransformOptions,
) -> Result<StationState, EtrsError> {
    Ok(transform(
        position,
        options.source_epoch,
        Some(options.resolved_velocity()),
        Some(options.resolved_target_epoch()),
        &PARAMS,
    )?)
}

/// Transform WGS84 geographic coordinates (ITRF2014) to ETRF2014.
///
/// The input is converted to Cartesian on WGS84, transformed, and
/// converted back on GRS80 ([`GeodeticFrame::ETRF2014_GRS80`]).
pub fn itrf2014_to_etrf2014_geographic(
    geographic: Geographic,
    options: &TransformOptions,
) -> Result<GeographicResult, EtrsError> {
    let xyz = to_cartesian(
        geographic.lon_deg,
        geographic.lat_deg,
        geographic.height_m,
        &GeodeticFrame::ITRF2014_WGS84,
    )?;
    let state = itrf2014_to_etrf2014_cartesian(Position3D::from_array(xyz), options)?;
    let geographic = from_cartesian(&state.position.to_array(), &GeodeticFrame::ETRF2014_GRS80)?;
    Ok(GeographicResult { geographic, state })
}

/// Cartesian pipeline over many positions sharing one set of options.
pub fn itrf2014_to_etrf2014_cartesian_batch(
    positions: &[Position3D],
    options: &TransformOptions,
) -> Result<Vec<StationState>, EtrsError> {
    positions
        .iter()
        .enumerate()
        .map(|(index, &p)| {
            itrf2014_to_etrf2014_cartesian(p, options).map_err(|e| batch_error(index, e))
        })
        .collect()
}

/// Geographic pipeline over many points sharing one set of options.
pub fn itrf2014_to_etrf2014_geographic_batch(
    points: &[Geographic],
    options: &TransformOptions,
) -> Result<Vec<GeographicResult>, EtrsError> {
    points
        .iter()
        .enumerate()
        .map(|(index, &g)| {
            itrf2014_to_etrf2014_geographic(g, options).map_err(|e| batch_error(index, e))
        })
        .collect()
}

fn batch_error(index: usize, source: EtrsError) -> EtrsError {
    EtrsError::Batch {
        index,
        source: Box::new(source),
    }
}
