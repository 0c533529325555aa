//! Per-call transform options.

use etrs_helmert::{Epoch, Velocity3D};

/// Epochs and velocity for one transform call.
///
/// | Option         | Default          |
/// |----------------|------------------|
/// | `source_epoch` | required         |
/// | `target_epoch` | `source_epoch`   |
/// | `velocity`     | `(0, 0, 0)` m/yr |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    pub source_epoch: Epoch,
    pub target_epoch: Option<Epoch>,
    pub velocity: Option<Velocity3D>,
}

impl TransformOptions {
    pub fn new(source_epoch: Epoch) -> Self {
        Self {
            source_epoch,
            target_epoch: None,
            velocity: None,
        }
    }

    pub fn target_epoch(mut self, epoch: Epoch) -> Self {
        self.target_epoch = Some(epoch);
        self
    }

    pub fn velocity(mut self, velocity: Velocity3D) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Target epoch with the default applied.
    pub fn resolved_target_epoch(&self) -> Epoch {
        self.target_epoch.unwrap_or(self.source_epoch)
    }

    /// Velocity with the default applied.
    pub fn resolved_velocity(&self) -> Velocity3D {
        self.velocity.unwrap_or_default()
    }
}
