use tracing::trace;

use crate::math::{RotationBasis, Vector3};

use super::{Euler, RotationOrder};

/// A rotation quaternion `(x, y, z, w)` with the vector part first.
///
/// Only unit quaternions represent rotations. Nothing here normalizes
/// implicitly; call [`normalize`](Quaternion::normalize) when needed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates the quaternion of `euler`.
    #[must_use]
    pub fn from_euler(euler: &Euler) -> Self {
        let mut q = Self::IDENTITY;
        q.set_from_euler(euler);
        q
    }

    /// Creates the quaternion of the pure rotation `m`.
    #[must_use]
    pub fn from_rotation_matrix<M: RotationBasis + ?Sized>(m: &M) -> Self {
        let mut q = Self::IDENTITY;
        q.set_from_rotation_matrix(m);
        q
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    pub fn copy_from(&mut self, other: &Quaternion) -> &mut Self {
        *self = *other;
        self
    }

    /// Sets this quaternion from half-angle terms of `euler`, composed in
    /// `euler.order`.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn set_from_euler(&mut self, euler: &Euler) -> &mut Self {
        let (s1, c1) = (euler.x / 2.0).sin_cos();
        let (s2, c2) = (euler.y / 2.0).sin_cos();
        let (s3, c3) = (euler.z / 2.0).sin_cos();

        let (x, y, z, w) = match euler.order {
            RotationOrder::XYZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::YXZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::ZXY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::ZYX => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::YZX => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            RotationOrder::XZY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
        };

        self.set(x, y, z, w)
    }

    /// Extracts a unit quaternion from an orthonormal rotation matrix
    /// using the trace method.
    ///
    /// With a non-positive trace the branch is picked by the largest
    /// diagonal entry so the square root never approaches zero.
    pub fn set_from_rotation_matrix<M: RotationBasis + ?Sized>(&mut self, m: &M) -> &mut Self {
        let b = m.basis();
        let (m11, m12, m13) = (b[(0, 0)], b[(0, 1)], b[(0, 2)]);
        let (m21, m22, m23) = (b[(1, 0)], b[(1, 1)], b[(1, 2)]);
        let (m31, m32, m33) = (b[(2, 0)], b[(2, 1)], b[(2, 2)]);

        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            self.set((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            self.set(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            self.set((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            self.set((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
        }
    }

    /// Scales to unit length. A quaternion of exactly zero length becomes
    /// the identity.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0.0 {
            trace!("normalizing zero-length quaternion, falling back to identity");
            *self = Self::IDENTITY;
        } else {
            let inv = 1.0 / length;
            self.x *= inv;
            self.y *= inv;
            self.z *= inv;
            self.w *= inv;
        }
        self
    }

    /// Inverts a unit quaternion by conjugating it.
    pub fn inverse(&mut self) -> &mut Self {
        self.conjugate()
    }

    /// Negates the vector part.
    pub fn conjugate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    #[must_use]
    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Sets `self = self * other`.
    pub fn multiply(&mut self, other: &Quaternion) -> &mut Self {
        let a = *self;
        self.multiply_quaternions(&a, other)
    }

    /// Sets `self = other * self`.
    pub fn premultiply(&mut self, other: &Quaternion) -> &mut Self {
        let b = *self;
        self.multiply_quaternions(other, &b)
    }

    /// Sets `self` to the Hamilton product `a * b`.
    pub fn multiply_quaternions(&mut self, a: &Quaternion, b: &Quaternion) -> &mut Self {
        let (qax, qay, qaz, qaw) = (a.x, a.y, a.z, a.w);
        let (qbx, qby, qbz, qbw) = (b.x, b.y, b.z, b.w);

        self.set(
            qax * qbw + qaw * qbx + qay * qbz - qaz * qby,
            qay * qbw + qaw * qby + qaz * qbx - qax * qbz,
            qaz * qbw + qaw * qbz + qax * qby - qay * qbx,
            qaw * qbw - qax * qbx - qay * qby - qaz * qbz,
        )
    }

    /// Rotates `v` by this (unit) quaternion, computing `q * v * q⁻¹`.
    #[must_use]
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let (qx, qy, qz, qw) = (self.x, self.y, self.z, self.w);

        let ix = qw * v.x + qy * v.z - qz * v.y;
        let iy = qw * v.y + qz * v.x - qx * v.z;
        let iz = qw * v.z + qx * v.y - qy * v.x;
        let iw = -qx * v.x - qy * v.y - qz * v.z;

        Vector3::new(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
        )
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f32> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<f32>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f32>) -> Self {
        Quaternion::new(q.i, q.j, q.k, q.w)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::{make_rotation_from_quaternion, Matrix3};

    fn axis_angle(axis: &Vector3, angle: f32) -> Quaternion {
        let (s, c) = (angle / 2.0).sin_cos();
        let a = axis.normalize();
        Quaternion::new(a.x * s, a.y * s, a.z * s, c)
    }

    /// Elemental rotation about the axis named by `letter`.
    fn elemental(letter: char, euler: &Euler) -> Quaternion {
        match letter {
            'X' => axis_angle(&Vector3::x(), euler.x),
            'Y' => axis_angle(&Vector3::y(), euler.y),
            _ => axis_angle(&Vector3::z(), euler.z),
        }
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn euler_formulas_match_elemental_composition() {
        let angles = [(0.3, -0.5, 0.7), (1.1, 0.4, -2.0)];
        for order in RotationOrder::ALL {
            for &(x, y, z) in &angles {
                let e = Euler::new(x, y, z, order);
                let mut expected = Quaternion::IDENTITY;
                for letter in order.as_str().chars() {
                    expected.multiply(&elemental(letter, &e));
                }
                let q = Quaternion::from_euler(&e);
                assert_abs_diff_eq!(q.x, expected.x, epsilon = 1e-6);
                assert_abs_diff_eq!(q.y, expected.y, epsilon = 1e-6);
                assert_abs_diff_eq!(q.z, expected.z, epsilon = 1e-6);
                assert_abs_diff_eq!(q.w, expected.w, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn rotation_matrix_extraction_is_unit_length_on_every_branch() {
        // One rotation per branch: positive trace, then m11, m22, m33 dominant.
        let rotations = [
            axis_angle(&Vector3::new(1.0, 2.0, 3.0), 0.5),
            axis_angle(&Vector3::x(), PI),
            axis_angle(&Vector3::y(), PI),
            axis_angle(&Vector3::z(), PI),
            axis_angle(&Vector3::new(1.0, -1.0, 0.5), 2.9),
        ];
        for q in rotations {
            let m = make_rotation_from_quaternion(&q);
            let back = Quaternion::from_rotation_matrix(&m);
            assert_relative_eq!(back.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(back.dot(&q).abs(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn half_turn_about_x_takes_m11_branch() {
        let m = Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0);
        let q = Quaternion::from_rotation_matrix(&m);
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn half_turn_about_z_takes_default_branch() {
        let m = Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0);
        let q = Quaternion::from_rotation_matrix(&m);
        assert_eq!(q, Quaternion::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn normalize_zero_falls_back_to_identity() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        q.normalize();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn normalize_tiny_quaternion_is_not_replaced() {
        let mut q = Quaternion::new(0.0, 1e-10, 0.0, 0.0);
        q.normalize();
        assert_relative_eq!(q.y, 1.0);
        assert_eq!(q.w, 0.0);
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let q = axis_angle(&Vector3::new(0.2, 1.0, -0.4), 1.3);
        let mut r = q;
        r.multiply(&Quaternion::IDENTITY);
        assert_eq!(r, q);
        r.premultiply(&Quaternion::IDENTITY);
        assert_eq!(r, q);
    }

    #[test]
    fn multiply_by_conjugate_leaves_scalar_part() {
        let q = axis_angle(&Vector3::new(0.2, 1.0, -0.4), 1.3);
        let mut conj = q;
        conj.conjugate();
        let mut r = q;
        r.multiply(&conj);
        assert_relative_eq!(r.w, q.length_squared(), epsilon = 1e-6);
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn inverse_negates_vector_part_only() {
        let mut q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        q.inverse();
        assert_eq!(q, Quaternion::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn premultiply_order_matters() {
        let a = axis_angle(&Vector3::x(), FRAC_PI_2);
        let b = axis_angle(&Vector3::y(), FRAC_PI_2);

        let mut ab = a;
        ab.multiply(&b);
        let mut ba = a;
        ba.premultiply(&b);
        let mut expected = Quaternion::IDENTITY;
        expected.multiply_quaternions(&b, &a);

        assert_eq!(ba, expected);
        assert_ne!(ab, ba);
    }

    #[test]
    fn rotate_vector_quarter_turn() {
        let q = axis_angle(&Vector3::z(), FRAC_PI_2);
        let v = q.rotate_vector(&Vector3::x());
        assert_abs_diff_eq!(v, Vector3::y(), epsilon = 1e-6);
    }

    #[test]
    fn hamilton_product_matches_nalgebra() {
        let a = axis_angle(&Vector3::new(1.0, 0.5, 0.0), 0.8);
        let b = axis_angle(&Vector3::new(0.0, -1.0, 2.0), 2.1);
        let mut ours = a;
        ours.multiply(&b);
        let reference: Quaternion =
            (nalgebra::Quaternion::from(a) * nalgebra::Quaternion::from(b)).into();
        assert_abs_diff_eq!(ours.x, reference.x, epsilon = 1e-6);
        assert_abs_diff_eq!(ours.y, reference.y, epsilon = 1e-6);
        assert_abs_diff_eq!(ours.z, reference.z, epsilon = 1e-6);
        assert_abs_diff_eq!(ours.w, reference.w, epsilon = 1e-6);
    }
}
