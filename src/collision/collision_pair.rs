use crate::core::BodyHandle;

/// A pair of bodies that could potentially collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The first body in the collision pair
    pub first: BodyHandle,

    /// The second body in the collision pair
    pub second: BodyHandle,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(first: BodyHandle, second: BodyHandle) -> Self {
        // Always sort the handles to ensure consistent ordering
        if first.0 <= second.0 {
            Self { first, second }
        } else {
            Self { first: second, second: first }
        }
    }

    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.first == body || self.second == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        if self.first == body {
            Some(self.second)
        } else if self.second == body {
            Some(self.first)
        } else {
            None
        }
    }
}
