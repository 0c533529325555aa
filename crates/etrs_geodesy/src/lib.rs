//! Geographic ↔ Earth-centred Cartesian conversion.
//!
//! Provides the reference ellipsoids and datums that station coordinates
//! are expressed on, and the forward/inverse conversion between
//! (longitude, latitude, height) and ECEF (x, y, z).
//!
//! ETRS89 is not among the built-in datums. The target side of the
//! ITRF2014 → ETRF2014 pipeline uses the GRS80 ellipsoid on the WGS84
//! (geocentric) datum as the closest available stand-in; see
//! [`GeodeticFrame::ETRF2014_GRS80`].

pub mod convert;
pub mod datum;
pub mod ellipsoid;
pub mod error;

pub use convert::{Geographic, from_cartesian, to_cartesian};
pub use datum::{Datum, GeodeticFrame};
pub use ellipsoid::Ellipsoid;
pub use error::GeodesyError;
