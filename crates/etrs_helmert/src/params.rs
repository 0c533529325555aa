//! Helmert transformation parameter bundles.
//!
//! A [`HelmertParameters`] value holds the published constants for one
//! frame pair in their published units. [`NormalizedParameters`] is the
//! same bundle in SI units with the rotation-rate matrix built once.

use crate::epoch::Epoch;
use crate::error::HelmertError;
use crate::matrix::{Mat3, Vec3, is_finite3, skew_symmetric, vec3_map};
use crate::units::{mas_to_rad, mm_to_m, ppb_to_unitless};

/// Published 14-parameter Helmert constants for one frame pair.
///
/// Only `translation_mm` and `rotation_rate_mas_per_yr` enter the
/// transform. The remaining fields complete the general model and are
/// carried so a bundle documents the full published table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmertParameters {
    /// T1, T2, T3 in mm.
    pub translation_mm: Vec3,
    /// Ṫ1, Ṫ2, Ṫ3 in mm/yr. Unused by the transform.
    pub translation_rate_mm_per_yr: Vec3,
    /// R1, R2, R3 in mas. Unused by the transform.
    pub rotation_mas: Vec3,
    /// Ṙ1, Ṙ2, Ṙ3 in mas/yr.
    pub rotation_rate_mas_per_yr: Vec3,
    /// Scale term D in ppb (×1e-9). Unused by the transform.
    pub scale_ppb: f64,
    /// Epoch from which the rotation rate is accumulated (1989.0 for ETRS89).
    pub reference_epoch: Epoch,
}

impl HelmertParameters {
    /// ITRF2014 → ETRF2014.
    ///
    /// Source: EUREF Technical Note 1 (Altamimi). The rotation values are
    /// the rates accumulated to epoch 2010.0.
    pub const ITRF2014_TO_ETRF2014: Self = Self::new(
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [1.785, 11.151, -16.170],
        [0.085, 0.531, -0.770],
        0.0,
        Epoch::new(1989.0),
    );

    /// A bundle with every term zero. The transform is then the identity.
    pub const IDENTITY: Self = Self::new(
        [0.0; 3],
        [0.0; 3],
        [0.0; 3],
        [0.0; 3],
        0.0,
        Epoch::new(1989.0),
    );

    pub const fn new(
        translation_mm: Vec3,
        translation_rate_mm_per_yr: Vec3,
        rotation_mas: Vec3,
        rotation_rate_mas_per_yr: Vec3,
        scale_ppb: f64,
        reference_epoch: Epoch,
    ) -> Self {
        Self {
            translation_mm,
            translation_rate_mm_per_yr,
            rotation_mas,
            rotation_rate_mas_per_yr,
            scale_ppb,
            reference_epoch,
        }
    }

    /// Build a bundle from untyped component lists.
    ///
    /// Every list must hold exactly three finite values; otherwise a
    /// [`HelmertError::Configuration`] names the offending field.
    pub fn from_slices(
        translation_mm: &[f64],
        translation_rate_mm_per_yr: &[f64],
        rotation_mas: &[f64],
        rotation_rate_mas_per_yr: &[f64],
        scale_ppb: f64,
        reference_epoch: f64,
    ) -> Result<Self, HelmertError> {
        let params = Self::new(
            triple("translation", translation_mm)?,
            triple("translation rate", translation_rate_mm_per_yr)?,
            triple("rotation", rotation_mas)?,
            triple("rotation rate", rotation_rate_mas_per_yr)?,
            scale_ppb,
            Epoch::new(reference_epoch),
        );
        params.validate()?;
        Ok(params)
    }

    /// Check that every constant is finite.
    pub fn validate(&self) -> Result<(), HelmertError> {
        let fields = [
            ("translation", &self.translation_mm),
            ("translation rate", &self.translation_rate_mm_per_yr),
            ("rotation", &self.rotation_mas),
            ("rotation rate", &self.rotation_rate_mas_per_yr),
        ];
        for (name, v) in fields {
            if !is_finite3(v) {
                return Err(HelmertError::Configuration(format!(
                    "{name} has a non-finite component"
                )));
            }
        }
        if !self.scale_ppb.is_finite() {
            return Err(HelmertError::Configuration(
                "scale factor is not finite".to_string(),
            ));
        }
        if !self.reference_epoch.is_finite() {
            return Err(HelmertError::Configuration(
                "reference epoch is not finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert to SI units and build the rotation-rate matrix.
    pub fn normalized(&self) -> NormalizedParameters {
        let rotation_rate_rad_per_yr = vec3_map(&self.rotation_rate_mas_per_yr, mas_to_rad);
        NormalizedParameters {
            translation_m: vec3_map(&self.translation_mm, mm_to_m),
            translation_rate_m_per_yr: vec3_map(&self.translation_rate_mm_per_yr, mm_to_m),
            rotation_rad: vec3_map(&self.rotation_mas, mas_to_rad),
            rotation_rate_rad_per_yr,
            rotation_rate_matrix: skew_symmetric(&rotation_rate_rad_per_yr),
            scale: ppb_to_unitless(self.scale_ppb),
            reference_epoch: self.reference_epoch,
        }
    }
}

impl Default for HelmertParameters {
    fn default() -> Self {
        Self::ITRF2014_TO_ETRF2014
    }
}

fn triple(name: &str, values: &[f64]) -> Result<Vec3, HelmertError> {
    <Vec3>::try_from(values).map_err(|_| {
        HelmertError::Configuration(format!(
            "{name} must have 3 components, got {}",
            values.len()
        ))
    })
}

/// A parameter bundle in metres, radians and plain ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedParameters {
    pub translation_m: Vec3,
    pub translation_rate_m_per_yr: Vec3,
    pub rotation_rad: Vec3,
    pub rotation_rate_rad_per_yr: Vec3,
    rotation_rate_matrix: Mat3,
    pub scale: f64,
    pub reference_epoch: Epoch,
}

impl NormalizedParameters {
    /// Skew-symmetric matrix of the rotation rate, in rad/yr.
    pub fn rotation_rate_matrix(&self) -> &Mat3 {
        &self.rotation_rate_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::MAS_PER_RAD;

    #[test]
    fn fixed_constants() {
        let p = HelmertParameters::ITRF2014_TO_ETRF2014;
        assert_eq!(p.translation_mm, [0.0, 0.0, 0.0]);
        assert_eq!(p.rotation_rate_mas_per_yr, [0.085, 0.531, -0.770]);
        assert_eq!(p.scale_ppb, 0.0);
        assert_eq!(p.reference_epoch.years(), 1989.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn default_is_itrf2014_to_etrf2014() {
        assert_eq!(
            HelmertParameters::default(),
            HelmertParameters::ITRF2014_TO_ETRF2014
        );
    }

    #[test]
    fn rotation_rate_matrix_layout() {
        let n = HelmertParameters::ITRF2014_TO_ETRF2014.normalized();
        let [rx, ry, rz] = n.rotation_rate_rad_per_yr;
        let m = n.rotation_rate_matrix();
        assert_eq!(m[0], [0.0, -rz, ry]);
        assert_eq!(m[1], [rz, 0.0, -rx]);
        assert_eq!(m[2], [-ry, rx, 0.0]);
    }

    #[test]
    fn translation_in_metres() {
        let p = HelmertParameters::from_slices(
            &[41.0, -7.5, 0.0],
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            0.0,
            1989.0,
        )
        .unwrap();
        assert_eq!(p.normalized().translation_m, [0.041, -0.0075, 0.0]);
    }

    #[test]
    fn rotation_rate_divided_by_mas_per_rad() {
        let n = HelmertParameters::ITRF2014_TO_ETRF2014.normalized();
        assert_eq!(n.rotation_rate_rad_per_yr[0], 0.085 / MAS_PER_RAD);
        assert_eq!(n.rotation_rate_rad_per_yr[2], -0.770 / MAS_PER_RAD);
    }

    #[test]
    fn scale_is_dimensionless() {
        let mut p = HelmertParameters::IDENTITY;
        p.scale_ppb = 2.5;
        assert!((p.normalized().scale - 2.5e-9).abs() < 1e-24);
    }

    #[test]
    fn short_slice_rejected() {
        let err = HelmertParameters::from_slices(
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            &[0.085, 0.531],
            0.0,
            1989.0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            HelmertError::Configuration("rotation rate must have 3 components, got 2".into())
        );
    }

    #[test]
    fn long_slice_rejected() {
        let err = HelmertParameters::from_slices(
            &[0.0; 4],
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            0.0,
            1989.0,
        )
        .unwrap_err();
        assert!(matches!(err, HelmertError::Configuration(_)));
    }

    #[test]
    fn non_finite_constants_rejected() {
        let nan_rate = HelmertParameters::from_slices(
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            &[0.0, f64::NAN, 0.0],
            0.0,
            1989.0,
        );
        assert!(matches!(nan_rate, Err(HelmertError::Configuration(_))));

        let inf_epoch = HelmertParameters::from_slices(
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            &[0.0; 3],
            0.0,
            f64::INFINITY,
        );
        assert!(matches!(inf_epoch, Err(HelmertError::Configuration(_))));

        let mut p = HelmertParameters::IDENTITY;
        p.scale_ppb = f64::NAN;
        assert!(p.validate().is_err());
    }
}
