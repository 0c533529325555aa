//! Reference ellipsoids.
//!
//! Defining constants follow the PROJ ellipsoid table: semi-major axis
//! with either the inverse flattening or the semi-minor axis.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GeodesyError;

/// A built-in reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ellipsoid {
    /// GRS 1980 (IUGG 1980), used by ETRS89.
    GRS80,
    /// Airy 1830.
    Airy,
    /// Bessel 1841.
    Bessel,
    /// Clarke 1866.
    Clrk66,
    /// International 1924 (Hayford 1909).
    Intl,
    WGS60,
    WGS66,
    WGS72,
    WGS84,
    /// Normal sphere, r = 6370997 m.
    Sphere,
}

/// All built-in ellipsoids.
pub const ALL_ELLIPSOIDS: [Ellipsoid; 10] = [
    Ellipsoid::GRS80,
    Ellipsoid::Airy,
    Ellipsoid::Bessel,
    Ellipsoid::Clrk66,
    Ellipsoid::Intl,
    Ellipsoid::WGS60,
    Ellipsoid::WGS66,
    Ellipsoid::WGS72,
    Ellipsoid::WGS84,
    Ellipsoid::Sphere,
];

impl Ellipsoid {
    /// Short name as used by PROJ (`+ellps=`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::GRS80 => "GRS80",
            Self::Airy => "airy",
            Self::Bessel => "bessel",
            Self::Clrk66 => "clrk66",
            Self::Intl => "intl",
            Self::WGS60 => "WGS60",
            Self::WGS66 => "WGS66",
            Self::WGS72 => "WGS72",
            Self::WGS84 => "WGS84",
            Self::Sphere => "sphere",
        }
    }

    /// Semi-major axis `a` in metres.
    pub const fn semi_major_axis(self) -> f64 {
        match self {
            Self::GRS80 | Self::WGS84 => 6_378_137.0,
            Self::Airy => 6_377_563.396,
            Self::Bessel => 6_377_397.155,
            Self::Clrk66 => 6_378_206.4,
            Self::Intl => 6_378_388.0,
            Self::WGS60 => 6_378_165.0,
            Self::WGS66 => 6_378_145.0,
            Self::WGS72 => 6_378_135.0,
            Self::Sphere => 6_370_997.0,
        }
    }

    /// Flattening `f = (a - b) / a`.
    pub const fn flattening(self) -> f64 {
        match self {
            Self::GRS80 => 1.0 / 298.257_222_101,
            Self::WGS84 => 1.0 / 298.257_223_563,
            // Airy and Clarke 1866 are defined by a and b.
            Self::Airy => (6_377_563.396 - 6_356_256.910) / 6_377_563.396,
            Self::Clrk66 => (6_378_206.4 - 6_356_583.8) / 6_378_206.4,
            Self::Bessel => 1.0 / 299.152_812_8,
            Self::Intl => 1.0 / 297.0,
            Self::WGS60 => 1.0 / 298.3,
            Self::WGS66 => 1.0 / 298.25,
            Self::WGS72 => 1.0 / 298.26,
            Self::Sphere => 0.0,
        }
    }

    /// Semi-minor axis `b = a (1 - f)` in metres.
    pub fn semi_minor_axis(self) -> f64 {
        self.semi_major_axis() * (1.0 - self.flattening())
    }

    /// First eccentricity squared, `e² = f (2 - f)`.
    pub fn eccentricity_sq(self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Second eccentricity squared, `e'² = e² / (1 - e²)`.
    pub fn second_eccentricity_sq(self) -> f64 {
        let e2 = self.eccentricity_sq();
        e2 / (1.0 - e2)
    }

    /// Prime-vertical radius of curvature `N(φ)` in metres.
    pub fn prime_vertical_radius(self, lat_rad: f64) -> f64 {
        let s = lat_rad.sin();
        self.semi_major_axis() / (1.0 - self.eccentricity_sq() * s * s).sqrt()
    }
}

impl Display for Ellipsoid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ellipsoid {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ELLIPSOIDS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeodesyError::UnsupportedDatum(format!("unknown ellipsoid '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_constants() {
        let e = Ellipsoid::WGS84;
        assert!((e.semi_minor_axis() - 6_356_752.314_245).abs() < 1e-5);
        assert!((e.eccentricity_sq() - 0.006_694_379_990_14).abs() < 1e-14);
    }

    #[test]
    fn grs80_constants() {
        let e = Ellipsoid::GRS80;
        assert!((e.semi_minor_axis() - 6_356_752.314_140).abs() < 1e-5);
        assert!((e.eccentricity_sq() - 0.006_694_380_022_90).abs() < 1e-14);
    }

    #[test]
    fn grs80_and_wgs84_differ_below_a_millimetre() {
        let db = Ellipsoid::WGS84.semi_minor_axis() - Ellipsoid::GRS80.semi_minor_axis();
        assert!(db > 0.0 && db < 1e-3, "db = {db}");
    }

    #[test]
    fn airy_minor_axis() {
        assert!((Ellipsoid::Airy.semi_minor_axis() - 6_356_256.910).abs() < 1e-6);
        assert!((Ellipsoid::Clrk66.semi_minor_axis() - 6_356_583.8).abs() < 1e-6);
    }

    #[test]
    fn sphere_is_round() {
        let s = Ellipsoid::Sphere;
        assert_eq!(s.eccentricity_sq(), 0.0);
        assert_eq!(s.semi_minor_axis(), s.semi_major_axis());
        assert_eq!(s.prime_vertical_radius(0.7), 6_370_997.0);
    }

    #[test]
    fn prime_vertical_radius_grows_poleward() {
        let e = Ellipsoid::GRS80;
        assert_eq!(e.prime_vertical_radius(0.0), e.semi_major_axis());
        assert!(e.prime_vertical_radius(1.0) > e.prime_vertical_radius(0.5));
    }

    #[test]
    fn parse_names() {
        for e in ALL_ELLIPSOIDS {
            assert_eq!(e.name().parse::<Ellipsoid>().unwrap(), e);
        }
        assert_eq!("grs80".parse::<Ellipsoid>().unwrap(), Ellipsoid::GRS80);
        assert_eq!(" WGS84 ".parse::<Ellipsoid>().unwrap(), Ellipsoid::WGS84);
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "ETRS89".parse::<Ellipsoid>(),
            Err(GeodesyError::UnsupportedDatum(_))
        ));
    }
}
