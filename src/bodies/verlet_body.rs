use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// A circular body advanced by position-based Verlet integration
///
/// Velocity is not stored: it is implicit in the difference between the
/// current and previous position. Collision and constraint passes correct
/// the current position only and never touch the previous position.
#[derive(Debug, Clone)]
pub struct VerletBody {
    /// The body's position in world space
    position: Vector2,

    /// The body's position one integration step prior
    old_position: Vector2,

    /// Acceleration accumulated for the current step
    acceleration: Vector2,

    /// The body's collision radius
    radius: f64,
}

impl VerletBody {
    /// Creates a new body at the given position with zero initial velocity
    ///
    /// The radius is fixed for the body's lifetime and must be positive.
    pub fn new(position: Vector2, radius: f64) -> Result<Self> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "body position must be finite, got {}",
                position
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "body radius must be positive and finite, got {}",
                radius
            )));
        }

        Ok(Self {
            position,
            old_position: position,
            acceleration: Vector2::zero(),
            radius,
        })
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Returns the body's radius
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Sets the body's velocity to the given vector
    ///
    /// The previous position is back-computed so that the displacement over
    /// `dt` matches the requested velocity. For an exact result `dt` should
    /// be the per-substep delta time the world integrates with.
    pub fn set_velocity(&mut self, velocity: Vector2, dt: f64) {
        self.old_position = self.position - velocity * dt;
    }

    /// Accumulates an acceleration for the current step
    pub(crate) fn accelerate(&mut self, acceleration: Vector2) {
        self.acceleration += acceleration;
    }

    /// Moves the body by one Verlet step
    ///
    /// Acceleration scales by dt squared because velocity is implicit in the
    /// position history; the accumulator is zeroed afterwards.
    pub(crate) fn integrate(&mut self, dt: f64) {
        let displacement = self.position - self.old_position;
        self.old_position = self.position;
        self.position = self.position + displacement + self.acceleration * (dt * dt);
        self.acceleration = Vector2::zero();
    }

    /// Shifts the current position without touching the previous position
    pub(crate) fn shift(&mut self, delta: Vector2) {
        self.position += delta;
    }

    /// Rewrites the current position without touching the previous position
    pub(crate) fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }
}
