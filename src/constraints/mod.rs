mod circular;

pub use self::circular::CircularConstraint;
