use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Constant acceleration applied to every body every substep
    pub gravity: Vector2,

    /// The number of integration subdivisions per frame step
    ///
    /// More substeps mean a smaller effective delta time per substep, which
    /// improves stability without changing how often the host calls `step`.
    pub substeps: u32,

    /// Scales how aggressively overlapping bodies are pushed apart
    ///
    /// Values well below 1.0 spread the separation over several substeps,
    /// which avoids the jitter a full instantaneous correction causes.
    pub response_coefficient: f64,
}

impl SolverConfig {
    /// Checks that the configuration can produce a stable simulation
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "substep count must be at least 1".to_string(),
            ));
        }
        if !self.response_coefficient.is_finite() || self.response_coefficient <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "response coefficient must be positive and finite, got {}",
                self.response_coefficient
            )));
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, -9.81),
            substeps: 8,
            response_coefficient: 0.1,
        }
    }
}
