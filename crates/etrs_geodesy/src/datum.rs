//! Geodetic datums and ellipsoid/datum pairs.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ellipsoid::Ellipsoid;
use crate::error::GeodesyError;

/// A named geodetic datum.
///
/// Only [`Datum::WGS84`] is geocentric without a shift, and it is the
/// only datum the converter accepts. The others are listed so that a
/// request for one fails with [`GeodesyError::UnsupportedDatum`] rather
/// than as an unknown name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datum {
    WGS84,
    GGRS87,
    NAD83,
    NAD27,
    Potsdam,
    Carthage,
    Hermannskogel,
    Ire65,
    Nzgd49,
    OSGB36,
}

pub const ALL_DATUMS: [Datum; 10] = [
    Datum::WGS84,
    Datum::GGRS87,
    Datum::NAD83,
    Datum::NAD27,
    Datum::Potsdam,
    Datum::Carthage,
    Datum::Hermannskogel,
    Datum::Ire65,
    Datum::Nzgd49,
    Datum::OSGB36,
];

impl Datum {
    /// Short name as used by PROJ (`+datum=`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::WGS84 => "WGS84",
            Self::GGRS87 => "GGRS87",
            Self::NAD83 => "NAD83",
            Self::NAD27 => "NAD27",
            Self::Potsdam => "potsdam",
            Self::Carthage => "carthage",
            Self::Hermannskogel => "hermannskogel",
            Self::Ire65 => "ire65",
            Self::Nzgd49 => "nzgd49",
            Self::OSGB36 => "OSGB36",
        }
    }

    pub const fn is_geocentric(self) -> bool {
        matches!(self, Self::WGS84)
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DATUMS
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeodesyError::UnsupportedDatum(format!("unknown datum '{s}'")))
    }
}

/// An ellipsoid/datum pair that coordinates are converted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeodeticFrame {
    ellipsoid: Ellipsoid,
    datum: Datum,
}

impl GeodeticFrame {
    /// ITRF2014 side: WGS84 ellipsoid on the WGS84 datum.
    pub const ITRF2014_WGS84: Self = Self {
        ellipsoid: Ellipsoid::WGS84,
        datum: Datum::WGS84,
    };

    /// ETRF2014 side: GRS80 ellipsoid on the WGS84 datum.
    ///
    /// ETRS89 proper is GRS80 on the ETRS89 datum, which is not built in.
    /// Heights and latitudes therefore differ from a true ETRS89
    /// conversion by the GRS80/WGS84 flattening difference (< 0.1 mm in b).
    pub const ETRF2014_GRS80: Self = Self {
        ellipsoid: Ellipsoid::GRS80,
        datum: Datum::WGS84,
    };

    /// Pair an ellipsoid with a datum, rejecting datums the converter
    /// cannot handle.
    pub fn new(ellipsoid: Ellipsoid, datum: Datum) -> Result<Self, GeodesyError> {
        if !datum.is_geocentric() {
            return Err(GeodesyError::UnsupportedDatum(format!(
                "no conversion for ellipsoid {ellipsoid} on datum {datum}"
            )));
        }
        Ok(Self { ellipsoid, datum })
    }

    /// Look up a pair by PROJ names, e.g. `("GRS80", "WGS84")`.
    pub fn from_names(ellipsoid: &str, datum: &str) -> Result<Self, GeodesyError> {
        Self::new(ellipsoid.parse()?, datum.parse()?)
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }
}

impl Display for GeodeticFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ellipsoid, self.datum)
    }
}
