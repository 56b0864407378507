use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::vector::normalize_or_keep;
use crate::math::{Point3, Vector3};

use super::{Box3, Line3, Sphere};

/// A plane `normal · P + constant = 0`.
///
/// The normal is not kept at unit length; distances are only metric after
/// [`normalize`](Plane::normalize).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub normal: Vector3,
    pub constant: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vector3::x(), 0.0)
    }
}

impl Plane {
    #[must_use]
    pub fn new(normal: Vector3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Creates the plane through `a`, `b` and `c`, see
    /// [`set_from_coplanar_points`](Self::set_from_coplanar_points).
    #[must_use]
    pub fn from_coplanar_points(a: &Point3, b: &Point3, c: &Point3) -> Self {
        let mut plane = Self::default();
        plane.set_from_coplanar_points(a, b, c);
        plane
    }

    pub fn set(&mut self, normal: &Vector3, constant: f32) -> &mut Self {
        self.normal = *normal;
        self.constant = constant;
        self
    }

    pub fn set_from_components(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.normal = Vector3::new(x, y, z);
        self.constant = w;
        self
    }

    pub fn set_from_normal_and_coplanar_point(
        &mut self,
        normal: &Vector3,
        point: &Point3,
    ) -> &mut Self {
        self.normal = *normal;
        self.constant = -point.coords.dot(&self.normal);
        self
    }

    /// Sets the plane through three points with unit normal `(c - b) × (a - b)`.
    ///
    /// The winding of `a, b, c` picks the side the normal points to.
    /// Collinear points produce a zero normal.
    pub fn set_from_coplanar_points(&mut self, a: &Point3, b: &Point3, c: &Point3) -> &mut Self {
        let normal = normalize_or_keep(&(c - b).cross(&(a - b)));
        self.set_from_normal_and_coplanar_point(&normal, a)
    }

    pub fn copy_from(&mut self, other: &Plane) -> &mut Self {
        *self = *other;
        self
    }

    /// Scales normal and constant together so the normal has unit length.
    pub fn normalize(&mut self) -> &mut Self {
        let inv_normal_length = 1.0 / self.normal.norm();
        self.normal *= inv_normal_length;
        self.constant *= inv_normal_length;
        self
    }

    /// Flips the plane to face the other way.
    pub fn negate(&mut self) -> &mut Self {
        self.normal = -self.normal;
        self.constant = -self.constant;
        self
    }

    /// Signed distance, positive on the side the normal points to.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point3) -> f32 {
        self.normal.dot(&point.coords) + self.constant
    }

    #[must_use]
    pub fn distance_to_sphere(&self, sphere: &Sphere) -> f32 {
        self.distance_to_point(&sphere.center) - sphere.radius
    }

    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point + self.normal * -self.distance_to_point(point)
    }

    /// Intersects the segment `line` with the plane.
    ///
    /// Returns `None` when the segment is parallel and off the plane, or
    /// when the crossing lies outside the segment. A segment lying in the
    /// plane yields its start point. Check [`intersects_line`](Self::intersects_line)
    /// first to skip the computation.
    #[must_use]
    pub fn line_intersection(&self, line: &Line3) -> Option<Point3> {
        let direction = line.delta();
        let denominator = self.normal.dot(&direction);

        if denominator == 0.0 {
            if self.distance_to_point(&line.start) == 0.0 {
                return Some(line.start);
            }
            debug!(?line, "segment is parallel to the plane");
            return None;
        }

        let t = -(line.start.coords.dot(&self.normal) + self.constant) / denominator;
        if !(0.0..=1.0).contains(&t) {
            debug!(?line, t, "plane crossing lies outside the segment");
            return None;
        }

        Some(line.start + direction * t)
    }

    /// [`line_intersection`](Self::line_intersection) for callers that
    /// propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoIntersection`] when the segment does not
    /// meet the plane.
    pub fn try_line_intersection(&self, line: &Line3) -> Result<Point3> {
        self.line_intersection(line)
            .ok_or_else(|| GeometryError::NoIntersection.into())
    }

    /// Whether the segment ends lie strictly on opposite sides.
    #[must_use]
    pub fn intersects_line(&self, line: &Line3) -> bool {
        let start_sign = self.distance_to_point(&line.start);
        let end_sign = self.distance_to_point(&line.end);
        (start_sign < 0.0 && end_sign > 0.0) || (end_sign < 0.0 && start_sign > 0.0)
    }

    #[must_use]
    pub fn intersects_box(&self, aabb: &Box3) -> bool {
        aabb.intersects_plane(self)
    }

    #[must_use]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        sphere.intersects_plane(self)
    }

    /// A point on the plane, `-constant * normal`.
    #[must_use]
    pub fn coplanar_point(&self) -> Point3 {
        Point3::from(self.normal * -self.constant)
    }

    pub fn translate(&mut self, offset: &Vector3) -> &mut Self {
        self.constant -= offset.dot(&self.normal);
        self
    }
}
