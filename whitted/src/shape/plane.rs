use crate::{material::Material, math::vec::Vec3, ray::Ray};

/// An infinite plane through three non-collinear points. The normal
/// follows the point order `(a - b) x (c - b)`; no attempt is made to
/// orient it towards the ray.
pub struct Plane {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub material: Material,
}

impl Plane {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Self {
        Self { a, b, c, material }
    }

    /// Constant over the whole plane.
    pub fn normal(&self) -> Vec3 {
        (self.a - self.b).cross(self.c - self.b).normalize()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        intersect_plane(self.a, self.normal(), ray)
    }
}

/// `t = dot(a - p, n) / dot(d, n)`. A zero denominator means the ray runs
/// parallel to the plane; that and a negative `t` are both "no hit".
pub(super) fn intersect_plane(a: Vec3, normal: Vec3, ray: &Ray) -> Option<f32> {
    let denominator = ray.direction.dot(normal);
    if denominator == 0.0 {
        return None;
    }

    let t = (a - ray.origin).dot(normal) / denominator;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Z,
            Material::new([255; 3], [255; 3], [255; 3], 16.0),
        )
    }

    #[test]
    fn normal_from_point_order() {
        assert!(ground().normal().distance_squared(Vec3::Y) < 1e-6);
    }

    #[test]
    fn hit_from_above() {
        let ray = Ray::new(Vec3::new(3.0, 5.0, -2.0), Vec3::NEG_Y);
        let t = ground().intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn parallel_ray_is_no_hit() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn plane_behind_ray_is_no_hit() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(ground().intersect(&ray).is_none());
    }
}
