//! Non-linear transform utilities.

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`. NaN maps to 0.
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[inline]
/// Clamp a frame delta to a usable non-negative duration in seconds.
pub fn sanitize_delta(delta_secs: f32) -> f32 {
    if delta_secs.is_finite() {
        delta_secs.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
