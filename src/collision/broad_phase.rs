use crate::bodies::VerletBody;
use crate::collision::CollisionPair;
use crate::core::BodyHandle;

/// Trait for broad-phase collision detection algorithms
///
/// Implementations return candidate pairs only; the overlap test itself runs
/// at resolution time against current positions, so corrections applied
/// earlier in a sweep are observed by later pairs. Pair order must be
/// deterministic: it is part of the simulation contract.
pub trait BroadPhase {
    /// Collects candidate collision pairs for the given bodies
    fn collision_pairs(&mut self, bodies: &[VerletBody]) -> Vec<CollisionPair>;
}

/// Brute-force broad phase that pairs every body with every other body
///
/// O(n^2) in the body count, which is the intended trade-off for the small
/// populations this engine targets. Pairs come out in insertion order with
/// `first` before `second`.
pub struct AllPairs;

impl AllPairs {
    /// Creates a new all-pairs broad phase
    pub fn new() -> Self {
        Self
    }
}

impl Default for AllPairs {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for AllPairs {
    fn collision_pairs(&mut self, bodies: &[VerletBody]) -> Vec<CollisionPair> {
        let count = bodies.len();
        let mut pairs = Vec::with_capacity(count.saturating_sub(1) * count / 2);

        for i in 0..count {
            for j in (i + 1)..count {
                pairs.push(CollisionPair::new(
                    BodyHandle(i as u32),
                    BodyHandle(j as u32),
                ));
            }
        }

        pairs
    }
}
