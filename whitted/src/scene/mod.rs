pub mod examples;

use crate::{color::ByteColor, math::vec::Vec3, shape::Surface};

/// A point light: a location and a scalar intensity. Distinct from
/// `Surface::Emitter`, which is only the light's visible geometry and
/// casts no light itself.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

/// Everything the integrator reads: surfaces in insertion order (used as
/// search order only), point lights, and the global render parameters.
/// Built once by the configuration layer and read-only during rendering.
pub struct Scene {
    pub surfaces: Vec<Surface>,
    pub lights: Vec<Light>,
    pub background: ByteColor,
    pub ambient_intensity: f32,
    /// Offset applied along secondary-ray directions so shadow and
    /// reflection rays do not immediately re-hit their own surface.
    pub shadow_bias: f32,
    /// Reflection recursion limit; primary rays start at depth 0.
    pub max_depth: u32,
    /// When set, emitter surfaces are visible to primary rays.
    pub light_visualization: bool,
}

impl Scene {
    pub fn new(background: ByteColor) -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            background,
            ambient_intensity: 0.5,
            shadow_bias: 0.1,
            max_depth: 1,
            light_visualization: false,
        }
    }

    /// Insert a surface in the scene.
    pub fn insert_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// Insert a point light in the scene.
    pub fn insert_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}
