use crate::bodies::VerletBody;
use crate::collision::{resolve_contact, AllPairs, BroadPhase};
use crate::constraints::CircularConstraint;
use crate::core::{BodyHandle, BodyStorage, SolverConfig};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// The main physics world that owns all bodies and advances the simulation
///
/// The host driver is expected to call `step` once per displayed frame with
/// the frame's delta time and then read back each body's position and radius
/// for rendering. The world divides the frame delta evenly across the
/// configured substeps; it never reads a clock of its own, so runs are
/// reproducible from the sequence of deltas alone.
pub struct VerletWorld {
    /// All bodies in the world, in insertion order
    bodies: BodyStorage<VerletBody>,

    /// Configuration for the simulation
    config: SolverConfig,

    /// The optional circular boundary bodies are kept inside of
    constraint: Option<CircularConstraint>,

    /// The broad-phase algorithm producing candidate collision pairs
    broad_phase: Box<dyn BroadPhase>,

    /// The total elapsed simulation time
    time: f64,
}

impl VerletWorld {
    /// Creates a new world with the given gravity and substep count
    pub fn new(gravity: Vector2, substeps: u32) -> Result<Self> {
        Self::with_config(SolverConfig {
            gravity,
            substeps,
            ..SolverConfig::default()
        })
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            bodies: BodyStorage::new(),
            config,
            constraint: None,
            broad_phase: Box::new(AllPairs::new()),
            time: 0.0,
        })
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SolverConfig {
        &self.config
    }

    /// Sets the circular boundary constraint
    pub fn set_constraint(&mut self, center: Vector2, radius: f64) -> Result<()> {
        self.constraint = Some(CircularConstraint::new(center, radius)?);
        Ok(())
    }

    /// Removes the boundary constraint, leaving bodies unconstrained
    pub fn clear_constraint(&mut self) {
        self.constraint = None;
    }

    /// Returns the active boundary constraint, if any
    pub fn get_constraint(&self) -> Option<&CircularConstraint> {
        self.constraint.as_ref()
    }

    /// Replaces the broad-phase algorithm used for collision detection
    ///
    /// The default all-pairs sweep suits small populations; a spatial
    /// structure can be swapped in here without touching integration logic.
    pub fn set_broad_phase(&mut self, broad_phase: Box<dyn BroadPhase>) {
        self.broad_phase = broad_phase;
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: VerletBody) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&VerletBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut VerletBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns an iterator over all bodies, in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &VerletBody)> {
        self.bodies.iter()
    }

    /// Advances the simulation by one frame of the given duration
    ///
    /// The frame delta is validated before any state changes, then split
    /// evenly across the configured substeps. Each substep applies gravity,
    /// resolves collisions, enforces the boundary constraint, and integrates,
    /// in that order.
    pub fn step(&mut self, frame_dt: f64) -> Result<()> {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return Err(PhysicsError::SimulationError(format!(
                "frame delta time must be positive and finite, got {}",
                frame_dt
            )));
        }

        let dt = frame_dt / f64::from(self.config.substeps);

        for _ in 0..self.config.substeps {
            self.apply_gravity();
            self.resolve_collisions(dt);
            self.apply_constraint();
            self.integrate(dt);
        }

        self.time += frame_dt;

        Ok(())
    }

    /// Accumulates gravity into every body's acceleration
    fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        for (_, body) in self.bodies.iter_mut() {
            body.accelerate(gravity);
        }
    }

    /// Runs one collision-resolution pass over the candidate pairs
    ///
    /// A single forward sweep, not iterated to convergence: corrections made
    /// for an earlier pair are visible to later pairs in the same pass, so
    /// clusters of three or more overlapping bodies resolve approximately
    /// and converge over subsequent substeps. The delta time is threaded
    /// through for interface symmetry with the other passes but does not
    /// change the correction magnitude.
    fn resolve_collisions(&mut self, _dt: f64) {
        let pairs = self.broad_phase.collision_pairs(self.bodies.as_slice());
        let response_coefficient = self.config.response_coefficient;

        for pair in pairs {
            let first = pair.first.index();
            let second = pair.second.index();

            // Pairs are ordered, so splitting at the second index yields
            // disjoint mutable references to both bodies.
            let (head, tail) = self.bodies.as_mut_slice().split_at_mut(second);
            resolve_contact(&mut head[first], &mut tail[0], response_coefficient);
        }
    }

    /// Projects every body back inside the boundary constraint
    fn apply_constraint(&mut self) {
        if let Some(constraint) = &self.constraint {
            for (_, body) in self.bodies.iter_mut() {
                constraint.apply(body);
            }
        }
    }

    /// Moves every body by one Verlet step
    fn integrate(&mut self, dt: f64) {
        for (_, body) in self.bodies.iter_mut() {
            body.integrate(dt);
        }
    }
}
