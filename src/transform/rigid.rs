//! Rigid (SE3) transform helpers: Euler conversion, composition and
//! identity-anchored interpolation.

use crate::{
    foundation::core::{Mat4, Quat, Vec3},
    transform::{linear::lerp_vec3, non_linear::clamp01},
};

/// Unit quaternion for intrinsic X, then Y, then Z rotations given in degrees.
pub fn euler_xyz_degrees(degrees: Vec3) -> Quat {
    let qx = Quat::from_rotation_x(degrees.x.to_radians());
    let qy = Quat::from_rotation_y(degrees.y.to_radians());
    let qz = Quat::from_rotation_z(degrees.z.to_radians());
    (qx * qy * qz).normalize()
}

/// Rotation followed by translation, unit scale.
#[inline]
pub fn compose_rigid(rotation: Quat, translation: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::ONE, rotation, translation)
}

/// Interpolate from the identity pose to `(rotation, translation)`.
///
/// Translation is lerped from the origin and rotation is slerped (shortest arc)
/// from identity. The endpoints are returned exactly: `t <= 0` yields
/// `Mat4::IDENTITY` and `t >= 1` yields `compose_rigid(rotation, translation)`.
pub fn interpolate_from_identity(rotation: Quat, translation: Vec3, t: f32) -> Mat4 {
    let t = clamp01(t);
    if t <= 0.0 {
        return Mat4::IDENTITY;
    }
    if t >= 1.0 {
        return compose_rigid(rotation, translation);
    }

    let r = Quat::IDENTITY.slerp(rotation, t).normalize();
    let p = lerp_vec3(Vec3::ZERO, translation, t);
    compose_rigid(r, p)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rigid.rs"]
mod tests;
