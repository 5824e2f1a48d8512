use image::Rgb;

use crate::color::ByteColor;

/// Blinn-Phong reflectance constants of a surface. Each constant is a
/// byte-range RGB triple, scaled to unit range during shading. A surface
/// owns its material by value.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub ambient: ByteColor,
    pub diffuse: ByteColor,
    pub specular: ByteColor,
    /// Specular sharpness, >= 1.
    pub phong_exponent: f32,
    pub reflective: bool,
}

impl Material {
    pub fn new(
        ambient: [u8; 3],
        diffuse: [u8; 3],
        specular: [u8; 3],
        phong_exponent: f32,
    ) -> Self {
        Self {
            ambient: Rgb(ambient),
            diffuse: Rgb(diffuse),
            specular: Rgb(specular),
            phong_exponent,
            reflective: false,
        }
    }

    /// Marks the material as a mirror; the integrator will spawn
    /// reflection rays from surfaces carrying it.
    pub fn reflective(mut self) -> Self {
        self.reflective = true;
        self
    }
}
