mod whitted;

pub use whitted::Whitted;

use crate::{color::Color, ray::Ray, scene::Scene};

/// Turns a ray into light carried back along it.
pub trait Integrator: Send + Sync {
    /// Unit-range color for `ray`. `depth` is 0 for primary rays and grows
    /// by one per reflection bounce.
    fn ray_color(&self, scene: &Scene, ray: Ray, depth: u32) -> Color;
}
