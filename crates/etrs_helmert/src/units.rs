//! Unit conversions used by the transformation constants.
//!
//! Published Helmert parameters come in millimetres, milliarcseconds and
//! parts per billion. The transform works in metres, radians and plain
//! ratios.

/// Milliarcseconds per radian, as used by the published ETRF tables.
///
/// 1 rad = 206264806.2471 mas; the tables truncate to three decimals.
pub const MAS_PER_RAD: f64 = 206_264_806.247;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// One part per billion.
pub const PPB: f64 = 1e-9;

/// Milliarcseconds (or mas/yr) to radians (or rad/yr).
#[inline]
pub fn mas_to_rad(mas: f64) -> f64 {
    mas / MAS_PER_RAD
}

/// Millimetres (or mm/yr) to metres (or m/yr).
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// Parts per billion to a dimensionless ratio.
#[inline]
pub fn ppb_to_unitless(ppb: f64) -> f64 {
    ppb * PPB
}
