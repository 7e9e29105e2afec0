pub mod math;
pub mod bodies;
pub mod core;
pub mod collision;
pub mod constraints;

/// Re-export common types for easier usage
pub use crate::core::{VerletWorld, SolverConfig, BodyHandle};
pub use crate::bodies::VerletBody;
pub use crate::constraints::CircularConstraint;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Simulation stability error: {0}")]
        SimulationError(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
