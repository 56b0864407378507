use nalgebra::{Point, SVector};

use crate::math::vector::normalize_or_keep;

use super::{Aabb, Box3, Plane};

/// A circle or sphere: every point within `radius` of `center`.
///
/// A negative radius marks the ball as empty. Note that
/// [`make_empty`](Ball::make_empty) resets the radius to `0`, which still
/// reports `is_empty() == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball<const D: usize> {
    pub center: Point<f32, D>,
    pub radius: f32,
}

/// A 2D ball.
pub type Circle = Ball<2>;

/// A 3D ball.
pub type Sphere = Ball<3>;

impl<const D: usize> Default for Ball<D> {
    fn default() -> Self {
        Self::new(Point::origin(), 0.0)
    }
}

impl<const D: usize> Ball<D> {
    #[must_use]
    pub fn new(center: Point<f32, D>, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a ball enclosing `points`, see [`set_from_points`](Self::set_from_points).
    #[must_use]
    pub fn from_points(points: &[Point<f32, D>]) -> Self {
        let mut ball = Self::default();
        ball.set_from_points(points);
        ball
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius < 0.0
    }

    pub fn set(&mut self, center: &Point<f32, D>, radius: f32) -> &mut Self {
        self.center = *center;
        self.radius = radius;
        self
    }

    /// Centers the ball on the bounding box of `points` and grows the radius
    /// to the farthest point.
    ///
    /// This is not the minimal enclosing ball.
    pub fn set_from_points(&mut self, points: &[Point<f32, D>]) -> &mut Self {
        self.center = Aabb::from_points(points).center();
        let max_radius_sq = points
            .iter()
            .map(|p| nalgebra::distance_squared(&self.center, p))
            .fold(0.0_f32, f32::max);
        self.radius = max_radius_sq.sqrt();
        self
    }

    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Boundary inclusive.
    #[must_use]
    pub fn contains_point(&self, point: &Point<f32, D>) -> bool {
        nalgebra::distance_squared(point, &self.center) <= self.radius * self.radius
    }

    /// Signed distance from the surface, negative inside.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point<f32, D>) -> f32 {
        nalgebra::distance(point, &self.center) - self.radius
    }

    fn intersects_ball(&self, other: &Self) -> bool {
        let s = self.radius + other.radius;
        nalgebra::distance_squared(&other.center, &self.center) <= s * s
    }

    /// Moves an outside `point` onto the surface; inside points are returned as is.
    #[must_use]
    pub fn clamp_point(&self, point: &Point<f32, D>) -> Point<f32, D> {
        let r = self.radius;
        if nalgebra::distance_squared(&self.center, point) > r * r {
            self.center + normalize_or_keep(&(point - self.center)) * r
        } else {
            *point
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb<D> {
        let mut aabb = Aabb::new(self.center, self.center);
        aabb.expand_by_scalar(self.radius);
        aabb
    }

    pub fn translate(&mut self, offset: &SVector<f32, D>) -> &mut Self {
        self.center += offset;
        self
    }

    /// Resets the radius to zero, keeping the center.
    pub fn make_empty(&mut self) -> &mut Self {
        self.radius = 0.0;
        self
    }
}

impl Ball<2> {
    #[must_use]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        self.intersects_ball(other)
    }
}

impl Ball<3> {
    #[must_use]
    pub fn intersects_sphere(&self, other: &Sphere) -> bool {
        self.intersects_ball(other)
    }

    #[must_use]
    pub fn intersects_box(&self, aabb: &Box3) -> bool {
        aabb.intersects_sphere(self)
    }

    #[must_use]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.distance_to_point(&self.center).abs() <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::{Point2, Point3, Vector2, Vector3};

    #[test]
    fn default_is_zero_radius_at_origin() {
        let c = Circle::default();
        assert_eq!(c.center, Point2::origin());
        assert_eq!(c.radius, 0.0);
        assert!(!c.is_empty());
    }

    #[test]
    fn make_empty_resets_radius_without_reporting_empty() {
        let mut s = Sphere::new(Point3::new(1.0, 2.0, 3.0), 4.0);
        s.make_empty();
        assert_eq!(s.radius, 0.0);
        assert_eq!(s.center, Point3::new(1.0, 2.0, 3.0));
        assert!(!s.is_empty());
        assert!(Sphere::new(Point3::origin(), -1.0).is_empty());
    }

    #[test]
    fn set_from_points_uses_box_center() {
        // A lopsided set: the box center differs from the centroid.
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(4.0, 0.0),
        ];
        let c = Circle::from_points(&points);
        assert_eq!(c.center, Point2::new(2.0, 0.0));
        assert_relative_eq!(c.radius, 2.0);
    }

    #[test]
    fn set_from_no_points_is_degenerate_at_origin() {
        let s = Sphere::from_points(&[]);
        assert_eq!(s, Sphere::default());
    }

    #[test]
    fn boundary_point_is_contained() {
        let s = Sphere::new(Point3::new(1.0, -2.0, 0.5), 2.0);
        let p = s.center + Vector3::z() * s.radius;
        assert!(s.contains_point(&p));
        assert_abs_diff_eq!(s.distance_to_point(&p), 0.0);
    }

    #[test]
    fn distance_is_signed() {
        let c = Circle::new(Point2::origin(), 2.0);
        assert_relative_eq!(c.distance_to_point(&Point2::new(0.5, 0.0)), -1.5);
        assert_relative_eq!(c.distance_to_point(&Point2::new(0.0, 5.0)), 3.0);
    }

    #[test]
    fn touching_balls_intersect() {
        let a = Circle::new(Point2::origin(), 1.0);
        assert!(a.intersects_circle(&Circle::new(Point2::new(2.0, 0.0), 1.0)));
        assert!(!a.intersects_circle(&Circle::new(Point2::new(2.1, 0.0), 1.0)));

        let s = Sphere::new(Point3::origin(), 1.0);
        assert!(s.intersects_sphere(&Sphere::new(Point3::new(0.0, 1.5, 0.0), 0.5)));
    }

    #[test]
    fn clamp_projects_outside_points_only() {
        let c = Circle::new(Point2::new(1.0, 1.0), 1.0);
        let inside = Point2::new(1.2, 1.3);
        assert_eq!(c.clamp_point(&inside), inside);
        let clamped = c.clamp_point(&Point2::new(4.0, 1.0));
        assert_relative_eq!(clamped, Point2::new(2.0, 1.0));
    }

    #[test]
    fn bounding_box_and_translate() {
        let mut s = Sphere::new(Point3::new(1.0, 1.0, 1.0), 0.5);
        s.translate(&Vector3::new(1.0, 0.0, 0.0));
        let b = s.bounding_box();
        assert_eq!(b.min, Point3::new(1.5, 0.5, 0.5));
        assert_eq!(b.max, Point3::new(2.5, 1.5, 1.5));

        let c = Circle::new(Point2::origin(), 1.0).bounding_box();
        assert_eq!(c.size(), Vector2::new(2.0, 2.0));
    }

    #[test]
    fn sphere_plane_and_box() {
        let s = Sphere::new(Point3::new(0.0, 0.0, 2.0), 1.0);
        let ground = Plane::new(Vector3::z(), 0.0);
        assert!(!s.intersects_plane(&ground));
        assert!(s.intersects_plane(&Plane::new(Vector3::z(), -1.0)));

        let b = Box3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(s.intersects_box(&b));
    }
}
