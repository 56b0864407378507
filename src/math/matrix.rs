use crate::error::{ParseError, Result};
use crate::orientation::Quaternion;

use super::{Matrix3, Matrix4};

/// Source of a pure rotation: anything whose upper 3x3 block is an
/// orthonormal basis.
///
/// Orientation extraction only reads `m11..m33`, so translation and the
/// projective row of a 4x4 transform are ignored.
pub trait RotationBasis {
    /// Returns the upper 3x3 block, indexed as `m[(row, col)]`.
    fn basis(&self) -> Matrix3;
}

impl RotationBasis for Matrix3 {
    fn basis(&self) -> Matrix3 {
        *self
    }
}

impl RotationBasis for Matrix4 {
    fn basis(&self) -> Matrix3 {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }
}

impl RotationBasis for nalgebra::Rotation3<f32> {
    fn basis(&self) -> Matrix3 {
        *self.matrix()
    }
}

/// Builds a 3x3 matrix from its flat column-major elements.
///
/// # Errors
///
/// Returns [`ParseError::ElementCount`] unless exactly 9 elements are given.
pub fn matrix3_from_elements(elements: &[f32]) -> Result<Matrix3> {
    check_element_count(elements, 9)?;
    Ok(Matrix3::from_column_slice(elements))
}

/// Builds a 4x4 matrix from its flat column-major elements
/// (translation at indices 12..15).
///
/// # Errors
///
/// Returns [`ParseError::ElementCount`] unless exactly 16 elements are given.
pub fn matrix4_from_elements(elements: &[f32]) -> Result<Matrix4> {
    check_element_count(elements, 16)?;
    Ok(Matrix4::from_column_slice(elements))
}

fn check_element_count(elements: &[f32], expected: usize) -> Result<()> {
    if elements.len() == expected {
        Ok(())
    } else {
        Err(ParseError::ElementCount {
            expected,
            found: elements.len(),
        }
        .into())
    }
}

/// Builds the rotation matrix of `q` with zero translation and unit scale.
///
/// `q` is assumed to be unit length; no normalization is applied.
#[must_use]
#[allow(clippy::similar_names)]
pub fn make_rotation_from_quaternion(q: &Quaternion) -> Matrix4 {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, xy, xz) = (x * x2, x * y2, x * z2);
    let (yy, yz, zz) = (y * y2, y * z2, z * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    Matrix4::new(
        1.0 - (yy + zz), xy - wz,         xz + wy,         0.0,
        xy + wz,         1.0 - (xx + zz), yz - wx,         0.0,
        xz - wy,         yz + wx,         1.0 - (xx + yy), 0.0,
        0.0,             0.0,             0.0,             1.0,
    )
}
