//! Linear transform helpers.

use crate::foundation::core::Vec3;

#[inline]
/// Linearly interpolate between two vectors with clamped parameter `t`.
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

#[inline]
/// Replace non-finite components with zero.
pub fn finite_or_zero(v: Vec3) -> Vec3 {
    Vec3::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
        if v.z.is_finite() { v.z } else { 0.0 },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
