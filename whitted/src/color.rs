use image::Rgb;

use crate::math::vec::Vec3;

/// Light intensity in unit range, one f32 per channel.
pub type Color = Rgb<f32>;

/// Reflectance constants and configured colors, in byte range. Scaled to
/// unit range before any lighting math.
pub type ByteColor = Rgb<u8>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);

/// Clamps each channel to at most 1.0. Channels are never negative here,
/// so no lower clamp is applied.
pub fn clamp_unit(color: Vec3) -> Vec3 {
    color.min(Vec3::ONE)
}

/// Converts a unit-range color into byte-range RGB.
pub fn to_bytes(color: Vec3) -> [u8; 3] {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}
