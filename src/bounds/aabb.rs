use nalgebra::{Point, SVector};

use crate::math::vector::clamp_point;

use super::{Plane, Sphere};

/// An axis-aligned bounding box given by its `min` and `max` corners.
///
/// The box is empty when `max < min` on any axis. [`Aabb::empty`] uses the
/// canonical sentinel `min = +∞, max = -∞`, which any point expands.
/// [`Default`] is the opposite, universal box `min = -∞, max = +∞`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<const D: usize> {
    /// Minimum corner of the bounding box.
    pub min: Point<f32, D>,
    /// Maximum corner of the bounding box.
    pub max: Point<f32, D>,
}

/// A 2D axis-aligned box.
pub type Box2 = Aabb<2>;

/// A 3D axis-aligned box.
pub type Box3 = Aabb<3>;

impl<const D: usize> Default for Aabb<D> {
    fn default() -> Self {
        Self::new(
            Point::from(SVector::<f32, D>::repeat(f32::NEG_INFINITY)),
            Point::from(SVector::<f32, D>::repeat(f32::INFINITY)),
        )
    }
}

impl<const D: usize> Aabb<D> {
    #[must_use]
    pub fn new(min: Point<f32, D>, max: Point<f32, D>) -> Self {
        Self { min, max }
    }

    /// Creates an empty box, ready to be grown with [`expand_by_point`](Self::expand_by_point).
    #[must_use]
    pub fn empty() -> Self {
        let mut aabb = Self::default();
        aabb.make_empty();
        aabb
    }

    /// Creates the tightest box around `points`; empty for no points.
    #[must_use]
    pub fn from_points(points: &[Point<f32, D>]) -> Self {
        let mut aabb = Self::default();
        aabb.set_from_points(points);
        aabb
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..D).any(|i| self.max[i] < self.min[i])
    }

    /// Returns the midpoint, or the origin for an empty box.
    #[must_use]
    pub fn center(&self) -> Point<f32, D> {
        if self.is_empty() {
            Point::origin()
        } else {
            Point::from((self.min.coords + self.max.coords) * 0.5)
        }
    }

    /// Returns the extent along each axis, or zero for an empty box.
    #[must_use]
    pub fn size(&self) -> SVector<f32, D> {
        if self.is_empty() {
            SVector::zeros()
        } else {
            self.max - self.min
        }
    }

    pub fn set(&mut self, min: &Point<f32, D>, max: &Point<f32, D>) -> &mut Self {
        self.min = *min;
        self.max = *max;
        self
    }

    pub fn set_from_points(&mut self, points: &[Point<f32, D>]) -> &mut Self {
        self.make_empty();
        for point in points {
            self.expand_by_point(point);
        }
        self
    }

    pub fn set_from_center_and_size(
        &mut self,
        center: &Point<f32, D>,
        size: &SVector<f32, D>,
    ) -> &mut Self {
        let half_size = size * 0.5;
        self.min = center - half_size;
        self.max = center + half_size;
        self
    }

    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    pub fn make_empty(&mut self) -> &mut Self {
        self.min = Point::from(SVector::<f32, D>::repeat(f32::INFINITY));
        self.max = Point::from(SVector::<f32, D>::repeat(f32::NEG_INFINITY));
        self
    }

    pub fn expand_by_point(&mut self, point: &Point<f32, D>) -> &mut Self {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
        self
    }

    pub fn expand_by_vector(&mut self, vector: &SVector<f32, D>) -> &mut Self {
        self.min -= vector;
        self.max += vector;
        self
    }

    /// Grows every side by `scalar`. A negative value shrinks the box and
    /// may invert it; nothing corrects that.
    pub fn expand_by_scalar(&mut self, scalar: f32) -> &mut Self {
        let delta = SVector::<f32, D>::repeat(scalar);
        self.min -= delta;
        self.max += delta;
        self
    }

    /// Boundary inclusive.
    #[must_use]
    pub fn contains_point(&self, point: &Point<f32, D>) -> bool {
        !(0..D).any(|i| point[i] < self.min[i] || point[i] > self.max[i])
    }

    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        (0..D).all(|i| self.min[i] <= other.min[i] && other.max[i] <= self.max[i])
    }

    /// Touching faces count as intersecting.
    #[must_use]
    pub fn intersects_box(&self, other: &Self) -> bool {
        !(0..D).any(|i| other.max[i] < self.min[i] || other.min[i] > self.max[i])
    }

    /// Clamps each coordinate of `point` into the box.
    #[must_use]
    pub fn clamp_point(&self, point: &Point<f32, D>) -> Point<f32, D> {
        clamp_point(point, &self.min, &self.max)
    }

    /// Euclidean distance from `point` to the box, zero inside.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point<f32, D>) -> f32 {
        (self.clamp_point(point) - point).norm()
    }

    /// Shrinks to the overlap with `other`. The result may be empty.
    pub fn intersection(&mut self, other: &Self) -> &mut Self {
        self.min = self.min.sup(&other.min);
        self.max = self.max.inf(&other.max);
        self
    }

    /// Grows to enclose `other`.
    pub fn union(&mut self, other: &Self) -> &mut Self {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
        self
    }

    pub fn translate(&mut self, offset: &SVector<f32, D>) -> &mut Self {
        self.min += offset;
        self.max += offset;
        self
    }
}

impl Aabb<3> {
    /// Whether `sphere` touches the box, comparing squared distances.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let closest = self.clamp_point(&sphere.center);
        nalgebra::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
    }

    /// Whether `plane` passes through the box.
    ///
    /// Projects the corners nearest and farthest along the normal and checks
    /// that `-plane.constant` lies between them.
    #[must_use]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let mut min = 0.0;
        let mut max = 0.0;
        for i in 0..3 {
            let n = plane.normal[i];
            if n > 0.0 {
                min += n * self.min[i];
                max += n * self.max[i];
            } else {
                min += n * self.max[i];
                max += n * self.min[i];
            }
        }
        min <= -plane.constant && max >= -plane.constant
    }

    /// Returns the sphere through the box corners.
    #[must_use]
    pub fn bounding_sphere(&self) -> Sphere {
        Sphere::new(self.center(), self.size().norm() * 0.5)
    }
}
