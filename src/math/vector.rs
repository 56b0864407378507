use nalgebra::{Const, OPoint, SVector};

use super::scalar::clamp;

/// Divides `v` by its length, or leaves it untouched when the length is zero.
///
/// `nalgebra`'s `normalize` yields NaN for a zero vector; kernel queries
/// need the zero vector back instead.
#[must_use]
pub fn normalize_or_keep<const D: usize>(v: &SVector<f32, D>) -> SVector<f32, D> {
    let len = v.norm();
    if len == 0.0 {
        *v
    } else {
        v / len
    }
}

/// Clamps each coordinate of `point` into `[min, max]` independently.
#[must_use]
pub fn clamp_point<const D: usize>(
    point: &OPoint<f32, Const<D>>,
    min: &OPoint<f32, Const<D>>,
    max: &OPoint<f32, Const<D>>,
) -> OPoint<f32, Const<D>> {
    OPoint::from(
        point
            .coords
            .zip_zip_map(&min.coords, &max.coords, |v, lo, hi| clamp(v, lo, hi)),
    )
}
