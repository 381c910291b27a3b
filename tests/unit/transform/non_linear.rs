use super::*;

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(clamp01(f32::NAN), 0.0);
}

#[test]
fn sanitize_delta_rejects_negative_and_non_finite() {
    assert_eq!(sanitize_delta(0.016), 0.016);
    assert_eq!(sanitize_delta(-1.0), 0.0);
    assert_eq!(sanitize_delta(f32::NAN), 0.0);
    assert_eq!(sanitize_delta(f32::INFINITY), 0.0);
}
