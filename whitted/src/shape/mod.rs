mod plane;
mod sphere;
mod triangle;

pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{material::Material, math::vec::Vec3, ray::Ray};

/// A renderable surface: a closed set of primitives dispatched by `match`.
///
/// `Emitter` is the visible stand-in geometry for a point light. It
/// intersects exactly like a sphere but is flat-shaded by the integrator,
/// never occludes shadow rays, and is skipped by default ray casting
/// unless light visualization is enabled.
pub enum Surface {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Emitter(Sphere),
}

impl Surface {
    /// Distance along `ray` to the nearest valid hit, or `None`. A hit is
    /// never reported at a negative distance.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Surface::Sphere(sphere) | Surface::Emitter(sphere) => sphere.intersect(ray),
            Surface::Plane(plane) => plane.intersect(ray),
            Surface::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    /// Unit normal at `point`, which must lie on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Surface::Sphere(sphere) | Surface::Emitter(sphere) => sphere.normal_at(point),
            Surface::Plane(plane) => plane.normal(),
            Surface::Triangle(triangle) => triangle.normal(),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Surface::Sphere(sphere) | Surface::Emitter(sphere) => &sphere.material,
            Surface::Plane(plane) => &plane.material,
            Surface::Triangle(triangle) => &triangle.material,
        }
    }

    pub fn is_emitter(&self) -> bool {
        matches!(self, Surface::Emitter(_))
    }
}
