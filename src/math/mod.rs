pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::{
    make_rotation_from_quaternion, matrix3_from_elements, matrix4_from_elements, RotationBasis,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f32>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f32>;

/// Euler extraction switches to the gimbal-lock branch once the `asin`
/// argument reaches this magnitude.
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.99999;
