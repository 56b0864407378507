//! Orientation representations.
//!
//! [`Euler`] and [`Quaternion`] convert into each other and both read
//! rotation matrices through [`RotationBasis`](crate::math::RotationBasis).

mod euler;
mod order;
mod quaternion;

pub use euler::Euler;
pub use order::RotationOrder;
pub use quaternion::Quaternion;
