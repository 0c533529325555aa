//! Geographic ↔ ECEF Cartesian conversion on a [`GeodeticFrame`].

use crate::datum::GeodeticFrame;
use crate::error::GeodesyError;

/// Latitude convergence threshold for the inverse conversion, in radians
/// (~0.06 nm on the surface).
const LAT_TOLERANCE_RAD: f64 = 1e-14;

const MAX_ITERATIONS: usize = 10;

/// Geographic coordinates on an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geographic {
    /// Longitude in degrees, range (-180, 180], positive east.
    pub lon_deg: f64,
    /// Geodetic latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Height above the ellipsoid in metres.
    pub height_m: f64,
}

impl Geographic {
    pub const fn new(lon_deg: f64, lat_deg: f64, height_m: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            height_m,
        }
    }
}

/// Convert geographic coordinates to ECEF `[x, y, z]` in metres.
///
/// ```text
/// x = (N + h) cos φ cos λ
/// y = (N + h) cos φ sin λ
/// z = (N (1 - e²) + h) sin φ
/// ```
pub fn to_cartesian(
    lon_deg: f64,
    lat_deg: f64,
    height_m: f64,
    frame: &GeodeticFrame,
) -> Result<[f64; 3], GeodesyError> {
    if !(lon_deg.is_finite() && lat_deg.is_finite() && height_m.is_finite()) {
        return Err(GeodesyError::InvalidInput("geographic coordinate is not finite"));
    }
    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(GeodesyError::InvalidInput("latitude outside [-90, 90]"));
    }

    let ell = frame.ellipsoid();
    let e2 = ell.eccentricity_sq();
    let (slat, clat) = lat_deg.to_radians().sin_cos();
    let (slon, clon) = lon_deg.to_radians().sin_cos();
    let n = ell.prime_vertical_radius(lat_deg.to_radians());

    Ok([
        (n + height_m) * clat * clon,
        (n + height_m) * clat * slon,
        (n * (1.0 - e2) + height_m) * slat,
    ])
}

/// Convert ECEF `[x, y, z]` (m) to geographic coordinates.
///
/// Starts from Bowring's parametric-latitude estimate and refines
/// `φ = atan2(z, p (1 - e² N / (N + h)))` until it settles. Height uses
/// `h = p cos φ + z sin φ - a sqrt(1 - e² sin²φ)`, which stays
/// well-conditioned at the poles. Points on the polar axis get
/// longitude 0.
///
/// Convergence takes a few iterations anywhere from tens of kilometres
/// below the surface out past geostationary height. Points deep inside
/// the Earth (|h| approaching N) may not settle and return
/// [`GeodesyError::NoConvergence`]; the geocentre itself has no
/// latitude and returns [`GeodesyError::InvalidInput`].
pub fn from_cartesian(xyz: &[f64; 3], frame: &GeodeticFrame) -> Result<Geographic, GeodesyError> {
    let [x, y, z] = *xyz;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(GeodesyError::InvalidInput("cartesian coordinate is not finite"));
    }

    let ell = frame.ellipsoid();
    let a = ell.semi_major_axis();
    let b = ell.semi_minor_axis();
    let e2 = ell.eccentricity_sq();
    let ep2 = ell.second_eccentricity_sq();

    let p = x.hypot(y);
    if p == 0.0 && z == 0.0 {
        return Err(GeodesyError::InvalidInput("point at the geocentre"));
    }
    let lon = if p == 0.0 { 0.0 } else { y.atan2(x) };

    let (sth, cth) = (a * z).atan2(b * p).sin_cos();
    let mut lat = (z + ep2 * b * sth * sth * sth).atan2(p - e2 * a * cth * cth * cth);

    let mut converged = false;
    for _ in 0..MAX_ITERATIONS {
        let n = ell.prime_vertical_radius(lat);
        let h = ellipsoidal_height(p, z, lat, a, e2);
        let next = z.atan2(p * (1.0 - e2 * n / (n + h)));
        converged = (next - lat).abs() < LAT_TOLERANCE_RAD;
        lat = next;
        if converged {
            break;
        }
    }
    if !converged {
        return Err(GeodesyError::NoConvergence { x, y, z });
    }

    let mut lon_deg = lon.to_degrees();
    if lon_deg <= -180.0 {
        lon_deg += 360.0;
    }

    Ok(Geographic {
        lon_deg,
        lat_deg: lat.to_degrees(),
        height_m: ellipsoidal_height(p, z, lat, a, e2),
    })
}

fn ellipsoidal_height(p: f64, z: f64, lat: f64, a: f64, e2: f64) -> f64 {
    let (s, c) = lat.sin_cos();
    p * c + z * s - a * (1.0 - e2 * s * s).sqrt()
}
