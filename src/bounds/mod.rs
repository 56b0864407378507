//! Bounding volumes and the containment, intersection and distance queries
//! between them.

mod aabb;
mod ball;
mod line3;
mod plane;

pub use aabb::{Aabb, Box2, Box3};
pub use ball::{Ball, Circle, Sphere};
pub use line3::Line3;
pub use plane::Plane;
