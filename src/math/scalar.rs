//! Scalar helpers shared by the orientation and bounds modules.

use std::f32::consts::PI;

/// Degrees-to-radians factor.
pub const DEG2RAD: f32 = PI / 180.0;

/// Radians-to-degrees factor.
pub const RAD2DEG: f32 = 180.0 / PI;

/// Clamps `value` into `[min, max]` as `max(min, min(max, value))`.
///
/// Unlike [`f32::clamp`] this never panics when `min > max`; the lower bound
/// wins. A NaN `value` passes through unchanged.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    min.max(max.min(value))
}

/// Modulo whose result always has the sign of `m`.
#[must_use]
pub fn euclidean_modulo(n: f32, m: f32) -> f32 {
    ((n % m) + m) % m
}

/// Linearly maps `t` from the range `[a1, a2]` to `[b1, b2]`.
#[must_use]
pub fn map_linear(a1: f32, a2: f32, b1: f32, b2: f32, t: f32) -> f32 {
    b1 + ((t - a1) * (b2 - b1)) / (a2 - a1)
}

#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (1.0 - t) * from + t * to
}

/// Hermite interpolation between 0 and 1 as `value` moves from `min` to `max`.
#[must_use]
pub fn smoothstep(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        return 0.0;
    }
    if value >= max {
        return 1.0;
    }
    let x = (value - min) / (max - min);
    x * x * (3.0 - 2.0 * x)
}

/// Like [`smoothstep`], with zero first and second derivatives at the ends.
#[must_use]
pub fn smootherstep(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        return 0.0;
    }
    if value >= max {
        return 1.0;
    }
    let x = (value - min) / (max - min);
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

#[must_use]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG2RAD
}

#[must_use]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD2DEG
}

#[must_use]
pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// Smallest power of two greater than or equal to `value`.
#[must_use]
pub fn ceil_power_of_two(value: f32) -> f32 {
    2.0_f32.powf(value.log2().ceil())
}

/// Largest power of two less than or equal to `value`.
#[must_use]
pub fn floor_power_of_two(value: f32) -> f32 {
    2.0_f32.powf(value.log2().floor())
}
