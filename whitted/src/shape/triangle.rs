use crate::{material::Material, math::vec::Vec3, ray::Ray};

use super::plane::intersect_plane;

/// A triangle given by three vertices. Intersection uses the containing
/// plane plus same-side edge tests; the sign convention of those tests
/// follows the vertex winding, which is reproduced as configured rather
/// than normalized.
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub material: Material,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Self {
        Self {
            vertices: [a, b, c],
            material,
        }
    }

    /// Constant over the face, derived from the vertex order like a plane's.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (a - b).cross(c - b).normalize()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let normal = self.normal();
        let [a, b, c] = self.vertices;

        let t = intersect_plane(a, normal, ray)?;
        let x = ray.at(t);

        // Walk the ordered edges; the point is inside only when every edge
        // cross product falls on the same side of the face normal.
        let inside = (b - a).cross(x - a).dot(normal) <= 0.0
            && (c - b).cross(x - b).dot(normal) <= 0.0
            && (a - c).cross(x - c).dot(normal) <= 0.0;
        inside.then_some(t)
    }
}
