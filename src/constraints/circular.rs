use crate::bodies::VerletBody;
use crate::error::PhysicsError;
use crate::math::{Vector2, EPSILON};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A circular boundary that bodies are kept inside of
///
/// Unlike collision response, the boundary is enforced as an exact
/// projection: a body past the allowed reach is placed directly back onto
/// it, not nudged toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CircularConstraint {
    center: Vector2,
    radius: f64,
}

impl CircularConstraint {
    /// Creates a new circular constraint with the given center and radius
    pub fn new(center: Vector2, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "constraint center must be finite, got {}",
                center
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "constraint radius must be positive and finite, got {}",
                radius
            )));
        }

        Ok(Self { center, radius })
    }

    /// Returns the center of the boundary circle
    pub fn get_center(&self) -> Vector2 {
        self.center
    }

    /// Returns the radius of the boundary circle
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Projects the body back inside the boundary if it has crossed it
    ///
    /// A body counts as outside once its center is further than
    /// `radius - body_radius` from the constraint center, so the body's own
    /// extent never pokes through the boundary. The projection rewrites the
    /// current position only and is idempotent.
    pub fn apply(&self, body: &mut VerletBody) {
        let offset = self.center - body.get_position();
        let distance = offset.length();
        let allowed = self.radius - body.get_radius();

        if distance > allowed && distance > EPSILON {
            let normal = offset / distance;
            body.set_position(self.center - normal * allowed);
        }
    }
}
