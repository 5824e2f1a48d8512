use glam::{Mat3, Vec3};

/// Rotates `vec` by `roll` about the viewing axis, then `pitch` about the
/// horizontal axis, then `yaw` about the vertical axis. Angles are in
/// degrees; each rotation consumes the output of the previous one.
///
/// Camera hosts typically call this with roll = 0 to steer the look and up
/// vectors from mouse or key input.
pub fn transform_vector(vec: Vec3, pitch: f32, yaw: f32, roll: f32) -> Vec3 {
    let a = roll.to_radians();
    let b = pitch.to_radians();
    let c = yaw.to_radians();

    let rotation =
        Mat3::from_rotation_y(-c) * Mat3::from_rotation_x(-b) * Mat3::from_rotation_z(-a);
    rotation * vec
}
