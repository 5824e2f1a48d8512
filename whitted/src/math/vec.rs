pub use glam::Vec3;
use image::Rgb;

use crate::color::ByteColor;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait ReflectVecExt {
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflectVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - 2.0 * self.dot(normal) * normal
    }
}

pub trait ByteColorAsVec3Ext {
    /// Scales a byte-range reflectance or color constant into unit-range
    /// intensity, channel by channel.
    fn scaled(&self) -> Vec3;
}

impl ByteColorAsVec3Ext for ByteColor {
    fn scaled(&self) -> Vec3 {
        Vec3::new(self.0[0] as f32, self.0[1] as f32, self.0[2] as f32) / 255.0
    }
}
