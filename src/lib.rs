pub mod bounds;
pub mod error;
pub mod math;
pub mod orientation;

pub use bounds::{Aabb, Ball, Box2, Box3, Circle, Line3, Plane, Sphere};
pub use error::{FexelError, GeometryError, ParseError, Result};
pub use orientation::{Euler, Quaternion, RotationOrder};
