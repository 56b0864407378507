use tracing::trace;

use crate::math::scalar::clamp;
use crate::math::{
    make_rotation_from_quaternion, RotationBasis, Vector3, GIMBAL_LOCK_THRESHOLD,
};

use super::{Quaternion, RotationOrder};

/// Three rotation angles in radians, applied in [`order`](Euler::order).
///
/// Angles are never wrapped into a canonical range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    /// Rotation about the X axis.
    pub x: f32,
    /// Rotation about the Y axis.
    pub y: f32,
    /// Rotation about the Z axis.
    pub z: f32,
    /// Composition order of the elemental rotations.
    pub order: RotationOrder,
}

impl Euler {
    /// No rotation, XYZ order.
    pub const ZERO: Euler = Euler::new(0.0, 0.0, 0.0, RotationOrder::XYZ);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, order: RotationOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Creates the Euler angles of rotation matrix `m` in `order`.
    #[must_use]
    pub fn from_rotation_matrix<M: RotationBasis + ?Sized>(m: &M, order: RotationOrder) -> Self {
        let mut euler = Self::default();
        euler.set_from_rotation_matrix(m, order);
        euler
    }

    /// Creates the Euler angles of quaternion `q` in `order`.
    #[must_use]
    pub fn from_quaternion(q: &Quaternion, order: RotationOrder) -> Self {
        let mut euler = Self::default();
        euler.set_from_quaternion(q, order);
        euler
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, order: RotationOrder) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.order = order;
        self
    }

    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.z = z;
        self
    }

    pub fn set_order(&mut self, order: RotationOrder) -> &mut Self {
        self.order = order;
        self
    }

    pub fn copy_from(&mut self, other: &Euler) -> &mut Self {
        *self = *other;
        self
    }

    /// Extracts the angles of the pure rotation `m` for `order`.
    ///
    /// One angle comes from `asin` of a clamped matrix entry. When that entry
    /// reaches [`GIMBAL_LOCK_THRESHOLD`] in magnitude the remaining two angles
    /// collapse into a single `atan2` and the other one is set to zero.
    /// Results are unspecified for matrices carrying scale or shear.
    pub fn set_from_rotation_matrix<M: RotationBasis + ?Sized>(
        &mut self,
        m: &M,
        order: RotationOrder,
    ) -> &mut Self {
        let b = m.basis();
        let (m11, m12, m13) = (b[(0, 0)], b[(0, 1)], b[(0, 2)]);
        let (m21, m22, m23) = (b[(1, 0)], b[(1, 1)], b[(1, 2)]);
        let (m31, m32, m33) = (b[(2, 0)], b[(2, 1)], b[(2, 2)]);

        let (x, y, z) = match order {
            RotationOrder::XYZ => {
                let y = clamp(m13, -1.0, 1.0).asin();
                if m13.abs() < GIMBAL_LOCK_THRESHOLD {
                    ((-m23).atan2(m33), y, (-m12).atan2(m11))
                } else {
                    trace!(%order, m13, "gimbal lock");
                    (m32.atan2(m22), y, 0.0)
                }
            }
            RotationOrder::YXZ => {
                let x = (-clamp(m23, -1.0, 1.0)).asin();
                if m23.abs() < GIMBAL_LOCK_THRESHOLD {
                    (x, m13.atan2(m33), m21.atan2(m22))
                } else {
                    trace!(%order, m23, "gimbal lock");
                    (x, (-m31).atan2(m11), 0.0)
                }
            }
            RotationOrder::ZXY => {
                let x = clamp(m32, -1.0, 1.0).asin();
                if m32.abs() < GIMBAL_LOCK_THRESHOLD {
                    (x, (-m31).atan2(m33), (-m12).atan2(m22))
                } else {
                    trace!(%order, m32, "gimbal lock");
                    (x, 0.0, m21.atan2(m11))
                }
            }
            RotationOrder::ZYX => {
                let y = (-clamp(m31, -1.0, 1.0)).asin();
                if m31.abs() < GIMBAL_LOCK_THRESHOLD {
                    (m32.atan2(m33), y, m21.atan2(m11))
                } else {
                    trace!(%order, m31, "gimbal lock");
                    (0.0, y, (-m12).atan2(m22))
                }
            }
            RotationOrder::YZX => {
                let z = clamp(m21, -1.0, 1.0).asin();
                if m21.abs() < GIMBAL_LOCK_THRESHOLD {
                    ((-m23).atan2(m22), (-m31).atan2(m11), z)
                } else {
                    trace!(%order, m21, "gimbal lock");
                    (0.0, m13.atan2(m33), z)
                }
            }
            RotationOrder::XZY => {
                let z = (-clamp(m12, -1.0, 1.0)).asin();
                if m12.abs() < GIMBAL_LOCK_THRESHOLD {
                    (m32.atan2(m22), m13.atan2(m11), z)
                } else {
                    trace!(%order, m12, "gimbal lock");
                    ((-m23).atan2(m33), 0.0, z)
                }
            }
        };

        self.set(x, y, z, order)
    }

    /// Converts `q` through its rotation matrix; there is no direct path.
    pub fn set_from_quaternion(&mut self, q: &Quaternion, order: RotationOrder) -> &mut Self {
        let m = make_rotation_from_quaternion(q);
        self.set_from_rotation_matrix(&m, order)
    }

    pub fn set_from_vector3(&mut self, v: &Vector3, order: RotationOrder) -> &mut Self {
        self.set(v.x, v.y, v.z, order)
    }

    /// Returns the three angles as a vector, dropping the order.
    #[must_use]
    pub fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Re-expresses the same orientation in `order`, going through a
    /// quaternion. Lossy only at gimbal lock.
    pub fn reorder(&mut self, order: RotationOrder) -> &mut Self {
        let q = Quaternion::from_euler(self);
        self.set_from_quaternion(&q, order)
    }
}
