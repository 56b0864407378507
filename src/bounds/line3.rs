use crate::math::scalar::clamp;
use crate::math::{Point3, Vector3};

/// A line segment from `start` to `end`.
///
/// Zero-length segments are allowed; projections onto them yield NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Default for Line3 {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin())
    }
}

impl Line3 {
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    pub fn set(&mut self, start: &Point3, end: &Point3) -> &mut Self {
        self.start = *start;
        self.end = *end;
        self
    }

    pub fn copy_from(&mut self, other: &Line3) -> &mut Self {
        *self = *other;
        self
    }

    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn delta(&self) -> Vector3 {
        self.end - self.start
    }

    #[must_use]
    pub fn distance_squared(&self) -> f32 {
        nalgebra::distance_squared(&self.start, &self.end)
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Point at parameter `t`, with `t = 0` at `start` and `t = 1` at `end`.
    #[must_use]
    pub fn at(&self, t: f32) -> Point3 {
        self.start + self.delta() * t
    }

    /// Parameter of the projection of `point` onto the line.
    ///
    /// With `clamp_to_line` the result is limited to the segment's `[0, 1]`;
    /// otherwise the infinite line is used.
    #[must_use]
    pub fn closest_point_to_point_parameter(&self, point: &Point3, clamp_to_line: bool) -> f32 {
        let start_to_point = point - self.start;
        let start_to_end = self.delta();

        let t = start_to_end.dot(&start_to_point) / start_to_end.dot(&start_to_end);
        if clamp_to_line {
            clamp(t, 0.0, 1.0)
        } else {
            t
        }
    }

    #[must_use]
    pub fn closest_point_to_point(&self, point: &Point3, clamp_to_line: bool) -> Point3 {
        self.at(self.closest_point_to_point_parameter(point, clamp_to_line))
    }
}
