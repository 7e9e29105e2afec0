mod broad_phase;
mod collision_pair;
mod contact_solver;

pub use self::broad_phase::{AllPairs, BroadPhase};
pub use self::collision_pair::CollisionPair;
pub use self::contact_solver::resolve_contact;
