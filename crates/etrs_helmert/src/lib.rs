//! Helmert similarity transformation between terrestrial reference frames.
//!
//! This crate provides:
//! - Fixed-size vector and skew-symmetric matrix helpers
//! - Unit conversions (mas → rad, mm → m, ppb → unitless)
//! - An immutable [`HelmertParameters`] bundle with the ITRF2014 → ETRF2014 constants
//! - The [`transform`] operation propagating position and velocity across epochs
//!
//! All functions are pure. Nothing here logs, allocates shared state, or
//! performs I/O, so every item may be used concurrently without locking.

pub mod epoch;
pub mod error;
pub mod matrix;
pub mod params;
pub mod transform;
pub mod units;

pub use epoch::Epoch;
pub use error::HelmertError;
pub use matrix::{Mat3, Vec3};
pub use params::{HelmertParameters, NormalizedParameters};
pub use transform::{
    Position3D, StationState, TransformRequest, Velocity3D, transform, transform_batch,
    transform_static,
};
pub use units::{MAS_PER_RAD, MM_PER_M, PPB};
