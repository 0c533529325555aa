//! Secular Helmert transformation of station position and velocity.

use crate::epoch::Epoch;
use crate::error::HelmertError;
use crate::matrix::{Vec3, is_finite3, mat3_mul_vec3, vec3_add, vec3_scale};
use crate::params::HelmertParameters;

/// Earth-centred, Earth-fixed Cartesian position in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn from_array(v: Vec3) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub const fn to_array(self) -> Vec3 {
        [self.x, self.y, self.z]
    }
}

/// Station velocity in metres per year, on the same axes as [`Position3D`].
///
/// The default is zero motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity3D {
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl Velocity3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(vx: f64, vy: f64, vz: f64) -> Self {
        Self { vx, vy, vz }
    }

    pub const fn from_array(v: Vec3) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub const fn to_array(self) -> Vec3 {
        [self.vx, self.vy, self.vz]
    }
}

/// A station position with its velocity, both valid at `epoch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationState {
    pub position: Position3D,
    pub velocity: Velocity3D,
    pub epoch: Epoch,
}

impl StationState {
    pub const fn new(position: Position3D, velocity: Velocity3D, epoch: Epoch) -> Self {
        Self {
            position,
            velocity,
            epoch,
        }
    }

    /// A station with no known motion.
    pub const fn stationary(position: Position3D, epoch: Epoch) -> Self {
        Self::new(position, Velocity3D::ZERO, epoch)
    }

    fn validate(&self) -> Result<(), HelmertError> {
        if !is_finite3(&self.position.to_array()) {
            return Err(HelmertError::InvalidInput("position is not finite"));
        }
        if !is_finite3(&self.velocity.to_array()) {
            return Err(HelmertError::InvalidInput("velocity is not finite"));
        }
        if !self.epoch.is_finite() {
            return Err(HelmertError::InvalidInput("source epoch is not finite"));
        }
        Ok(())
    }
}

/// Transform a station between the frames described by `params`.
///
/// # Arguments
/// * `position` — ECEF position (m) in the source frame at `source_epoch`
/// * `source_epoch` — observation epoch, decimal years
/// * `velocity` — station velocity (m/yr); `None` means zero motion
/// * `target_epoch` — epoch of the result; `None` means `source_epoch`
///
/// # Returns
/// The position in the target frame extrapolated to `target_epoch`,
/// and the velocity including the frame rotation-rate contribution.
///
/// With `dt = source_epoch - reference_epoch` and `R` the rotation-rate
/// matrix:
///
/// ```text
/// X' = X + T + R · (X · dt)
/// V' = V + R · X
/// X(target) = X' + V' · (target_epoch - source_epoch)
/// ```
///
/// `V'` rotates the input position `X`, not `X'`. With a non-zero
/// translation this departs from the rigorous IERS formulation.
///
/// No validity window around the reference epoch is enforced; a large
/// `dt` scales the rotation term linearly.
///
/// `params` is validated on every call, so a bundle assembled with
/// [`HelmertParameters::new`] or by editing fields fails with
/// [`HelmertError::Configuration`] rather than producing NaN.
pub fn transform(
    position: Position3D,
    source_epoch: Epoch,
    velocity: Option<Velocity3D>,
    target_epoch: Option<Epoch>,
    params: &HelmertParameters,
) -> Result<StationState, HelmertError> {
    params.validate()?;
    let source = StationState::new(position, velocity.unwrap_or_default(), source_epoch);
    source.validate()?;
    let target_epoch = target_epoch.unwrap_or(source_epoch);
    if !target_epoch.is_finite() {
        return Err(HelmertError::InvalidInput("target epoch is not finite"));
    }
    Ok(propagate(&source, target_epoch, params))
}

/// Static transform at a single epoch: zero velocity, no extrapolation.
pub fn transform_static(
    position: Position3D,
    epoch: Epoch,
    params: &HelmertParameters,
) -> Result<Position3D, HelmertError> {
    transform(position, epoch, None, None, params).map(|state| state.position)
}

/// Transform several stations to a common target epoch.
///
/// `None` keeps each station at its own epoch. The first invalid station
/// aborts the batch with [`HelmertError::Batch`] carrying its index.
pub fn transform_batch(
    stations: &[StationState],
    target_epoch: Option<Epoch>,
    params: &HelmertParameters,
) -> Result<Vec<StationState>, HelmertError> {
    stations
        .iter()
        .enumerate()
        .map(|(index, s)| {
            transform(s.position, s.epoch, Some(s.velocity), target_epoch, params).map_err(
                |e| HelmertError::Batch {
                    index,
                    source: Box::new(e),
                },
            )
        })
        .collect()
}

fn propagate(
    source: &StationState,
    target_epoch: Epoch,
    params: &HelmertParameters,
) -> StationState {
    let n = params.normalized();
    let r = n.rotation_rate_matrix();
    let x = source.position.to_array();
    let v = source.velocity.to_array();

    let dt_obs = source.epoch.years_since(n.reference_epoch);
    let rotated = mat3_mul_vec3(r, &vec3_scale(&x, dt_obs));
    let position_out = vec3_add(&x, &vec3_add(&n.translation_m, &rotated));

    let velocity_out = vec3_add(&v, &mat3_mul_vec3(r, &x));

    let dt_target = target_epoch.years_since(source.epoch);
    let final_position = vec3_add(&position_out, &vec3_scale(&velocity_out, dt_target));

    StationState::new(
        Position3D::from_array(final_position),
        Velocity3D::from_array(velocity_out),
        target_epoch,
    )
}

/// Builder over [`transform`] with the optional arguments spelled out.
///
/// ```
/// use etrs_helmert::{Epoch, HelmertParameters, Position3D, TransformRequest, Velocity3D};
///
/// let station = Position3D::new(3771793.97, 140253.34, 5124304.35);
/// let state = TransformRequest::at(station, Epoch::new(2023.02))
///     .with_velocity(Velocity3D::new(-0.0143, 0.0178, 0.0090))
///     .to_epoch(Epoch::new(2025.0))
///     .run(&HelmertParameters::ITRF2014_TO_ETRF2014)
///     .unwrap();
/// assert_eq!(state.epoch, Epoch::new(2025.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformRequest {
    position: Position3D,
    source_epoch: Epoch,
    velocity: Option<Velocity3D>,
    target_epoch: Option<Epoch>,
}

impl TransformRequest {
    pub fn at(position: Position3D, source_epoch: Epoch) -> Self {
        Self {
            position,
            source_epoch,
            velocity: None,
            target_epoch: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity3D) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn to_epoch(mut self, target_epoch: Epoch) -> Self {
        self.target_epoch = Some(target_epoch);
        self
    }

    pub fn run(&self, params: &HelmertParameters) -> Result<StationState, HelmertError> {
        transform(
            self.position,
            self.source_epoch,
            self.velocity,
            self.target_epoch,
            params,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Position3D = Position3D::new(3771793.97, 140253.34, 5124304.35);

    fn rotation_only(rate: Vec3) -> HelmertParameters {
        HelmertParameters::new([0.0; 3], [0.0; 3], [0.0; 3], rate, 0.0, Epoch::new(1989.0))
    }

    #[test]
    fn identity_parameters_leave_station_unchanged() {
        let out = transform(
            BERLIN,
            Epoch::new(2023.02),
            None,
            None,
            &HelmertParameters::IDENTITY,
        )
        .unwrap();
        assert_eq!(out.position, BERLIN);
        assert_eq!(out.velocity, Velocity3D::ZERO);
        assert_eq!(out.epoch, Epoch::new(2023.02));
    }

    #[test]
    fn translation_only_shifts_by_metres() {
        let params = HelmertParameters::new(
            [100.0, -50.0, 25.0],
            [0.0; 3],
            [0.0; 3],
            [0.0; 3],
            0.0,
            Epoch::new(1989.0),
        );
        let out = transform_static(BERLIN, Epoch::new(2023.02), &params).unwrap();
        assert_eq!(out.x, BERLIN.x + 0.1);
        assert_eq!(out.y, BERLIN.y - 0.05);
        assert_eq!(out.z, BERLIN.z + 0.025);
    }

    #[test]
    fn at_reference_epoch_only_velocity_changes() {
        let params = rotation_only([0.085, 0.531, -0.770]);
        let out = transform(BERLIN, Epoch::new(1989.0), None, None, &params).unwrap();
        assert_eq!(out.position, BERLIN);
        assert!(out.velocity.vx != 0.0);
    }

    #[test]
    fn velocity_uses_untransformed_position() {
        // A large translation must not leak into the velocity term.
        let params = HelmertParameters::new(
            [1.0e6, 1.0e6, 1.0e6],
            [0.0; 3],
            [0.0; 3],
            [0.085, 0.531, -0.770],
            0.0,
            Epoch::new(1989.0),
        );
        let with_t = transform(BERLIN, Epoch::new(2023.02), None, None, &params).unwrap();
        let without_t = transform(
            BERLIN,
            Epoch::new(2023.02),
            None,
            None,
            &rotation_only([0.085, 0.531, -0.770]),
        )
        .unwrap();
        assert_eq!(with_t.velocity, without_t.velocity);
    }

    #[test]
    fn input_velocity_is_carried_through() {
        let v = Velocity3D::new(-0.0143, 0.0178, 0.0090);
        let out = transform(
            BERLIN,
            Epoch::new(2023.02),
            Some(v),
            None,
            &HelmertParameters::IDENTITY,
        )
        .unwrap();
        assert_eq!(out.velocity, v);
        assert_eq!(out.position, BERLIN);
    }

    #[test]
    fn extrapolation_uses_output_velocity() {
        let params = HelmertParameters::ITRF2014_TO_ETRF2014;
        let v = Velocity3D::new(-0.0143, 0.0178, 0.0090);
        let at_obs = transform(BERLIN, Epoch::new(2023.02), Some(v), None, &params).unwrap();
        let later = transform(
            BERLIN,
            Epoch::new(2023.02),
            Some(v),
            Some(Epoch::new(2033.02)),
            &params,
        )
        .unwrap();
        let dt = Epoch::new(2033.02).years_since(Epoch::new(2023.02));
        assert_eq!(later.velocity, at_obs.velocity);
        assert_eq!(later.position.x, at_obs.position.x + at_obs.velocity.vx * dt);
        assert_eq!(later.position.z, at_obs.position.z + at_obs.velocity.vz * dt);
    }

    #[test]
    fn backwards_extrapolation() {
        let v = Velocity3D::new(0.01, 0.0, 0.0);
        let out = transform(
            BERLIN,
            Epoch::new(2020.0),
            Some(v),
            Some(Epoch::new(2010.0)),
            &HelmertParameters::IDENTITY,
        )
        .unwrap();
        assert!((out.position.x - (BERLIN.x - 0.1)).abs() < 1e-9);
        assert_eq!(out.epoch, Epoch::new(2010.0));
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let params = HelmertParameters::ITRF2014_TO_ETRF2014;
        let e = Epoch::new(2023.02);
        let bad_pos = Position3D::new(f64::NAN, 0.0, 0.0);
        assert_eq!(
            transform(bad_pos, e, None, None, &params),
            Err(HelmertError::InvalidInput("position is not finite"))
        );
        let bad_vel = Velocity3D::new(0.0, f64::INFINITY, 0.0);
        assert_eq!(
            transform(BERLIN, e, Some(bad_vel), None, &params),
            Err(HelmertError::InvalidInput("velocity is not finite"))
        );
        assert_eq!(
            transform(BERLIN, Epoch::new(f64::NAN), None, None, &params),
            Err(HelmertError::InvalidInput("source epoch is not finite"))
        );
        assert_eq!(
            transform(BERLIN, e, None, Some(Epoch::new(f64::NEG_INFINITY)), &params),
            Err(HelmertError::InvalidInput("target epoch is not finite"))
        );
    }

    #[test]
    fn non_finite_parameters_rejected() {
        let params = HelmertParameters::new(
            [0.0; 3],
            [0.0; 3],
            [0.0; 3],
            [f64::NAN, 0.0, 0.0],
            0.0,
            Epoch::new(1989.0),
        );
        assert!(matches!(
            transform(BERLIN, Epoch::new(2023.02), None, None, &params),
            Err(HelmertError::Configuration(_))
        ));

        let mut edited = HelmertParameters::ITRF2014_TO_ETRF2014;
        edited.reference_epoch = Epoch::new(f64::INFINITY);
        assert!(matches!(
            transform_static(BERLIN, Epoch::new(2023.02), &edited),
            Err(HelmertError::Configuration(_))
        ));

        let stations = [StationState::stationary(BERLIN, Epoch::new(2023.02))];
        assert!(matches!(
            transform_batch(&stations, None, &params),
            Err(HelmertError::Batch { index: 0, .. })
        ));
    }

    #[test]
    fn builder_matches_function() {
        let params = HelmertParameters::ITRF2014_TO_ETRF2014;
        let v = Velocity3D::new(-0.0143, 0.0178, 0.0090);
        let via_builder = TransformRequest::at(BERLIN, Epoch::new(2023.02))
            .with_velocity(v)
            .to_epoch(Epoch::new(2030.5))
            .run(&params)
            .unwrap();
        let via_fn = transform(
            BERLIN,
            Epoch::new(2023.02),
            Some(v),
            Some(Epoch::new(2030.5)),
            &params,
        )
        .unwrap();
        assert_eq!(via_builder, via_fn);
    }

    #[test]
    fn batch_reports_failing_index() {
        let params = HelmertParameters::ITRF2014_TO_ETRF2014;
        let stations = [
            StationState::stationary(BERLIN, Epoch::new(2023.02)),
            StationState::stationary(Position3D::new(0.0, f64::NAN, 0.0), Epoch::new(2023.02)),
        ];
        match transform_batch(&stations, None, &params) {
            Err(HelmertError::Batch { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(*source, HelmertError::InvalidInput("position is not finite"));
            }
            other => panic!("expected batch error, got {other:?}"),
        }
    }

    #[test]
    fn batch_matches_single_calls() {
        let params = HelmertParameters::ITRF2014_TO_ETRF2014;
        let stations = [
            StationState::stationary(BERLIN, Epoch::new(2023.02)),
            StationState::new(
                Position3D::new(4027893.6, 307045.9, 4919475.1),
                Velocity3D::new(-0.0135, 0.0171, 0.0102),
                Epoch::new(2015.5),
            ),
        ];
        let out = transform_batch(&stations, Some(Epoch::new(2024.0)), &params).unwrap();
        assert_eq!(out.len(), 2);
        for (s, o) in stations.iter().zip(&out) {
            let single = transform(
                s.position,
                s.epoch,
                Some(s.velocity),
                Some(Epoch::new(2024.0)),
                &params,
            )
            .unwrap();
            assert_eq!(*o, single);
        }
    }
}
