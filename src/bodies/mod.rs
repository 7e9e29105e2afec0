mod verlet_body;

pub use self::verlet_body::VerletBody;
