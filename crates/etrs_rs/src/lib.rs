//! Convenience wrapper for ITRF2014 → ETRF2014 station transformation.
//!
//! Ties the converter ([`etrs_geodesy`]) and the transform engine
//! ([`etrs_helmert`]) together with the fixed ITRF2014 → ETRF2014
//! parameters, so callers only pick an epoch and optional velocity.
//!
//! # Quick start
//!
//! ```rust
//! use etrs_rs::*;
//!
//! let options = TransformOptions::new(Epoch::new(2023.02));
//! let out = itrf2014_to_etrf2014_geographic(
//!     Geographic::new(13.2800773632584, 52.5590577266679, 52.0),
//!     &options,
//! )
//! .unwrap();
//! println!(
//!     "ETRF2014: {:.9} {:.9} {:.4}",
//!     out.geographic.lon_deg, out.geographic.lat_deg, out.geographic.height_m
//! );
//! ```

pub mod convenience;
pub mod error;
pub mod options;

pub use convenience::{
    GeographicResult, itrf2014_to_etrf2014_cartesian, itrf2014_to_etrf2014_cartesian_batch,
    itrf2014_to_etrf2014_geographic, itrf2014_to_etrf2014_geographic_batch,
};
pub use error::EtrsError;
pub use options::TransformOptions;

// Re-export the types callers need so they don't depend on the inner crates.
pub use etrs_geodesy::{Datum, Ellipsoid, GeodeticFrame, GeodesyError, Geographic};
pub use etrs_helmert::{
    Epoch, HelmertError, HelmertParameters, Position3D, StationState, Velocity3D,
};
