use crate::{material::Material, math::vec::Vec3, ray::Ray};

/// A sphere given by its center and a positive radius. Normals point
/// outwards.
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Solves `|p + t d - center|^2 = r^2` for a unit `d`, which reduces to
    /// `t^2 + 2t(d.x) + (x.x - r^2) = 0` with `x = p - center`. Returns the
    /// smallest strictly positive root.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let x = ray.origin - self.center;
        let d_dot_x = ray.direction.dot(x);

        let discriminant = d_dot_x * d_dot_x - x.dot(x) + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t1 = -d_dot_x + root;
        let t2 = -d_dot_x - root;
        match (t1 > 0.0, t2 > 0.0) {
            (true, true) => Some(t1.min(t2)),
            (true, false) => Some(t1),
            (false, true) => Some(t2),
            (false, false) => None,
        }
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_material() -> Material {
        Material::new([255; 3], [255; 3], [255; 3], 16.0)
    }

    fn sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, unit_material())
    }

    #[test]
    fn through_center_picks_near_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = sphere().intersect(&ray).unwrap();
        // roots are center distance -+ radius; the near one wins
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn behind_origin_is_no_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn from_inside_returns_positive_exit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::NEG_Z);
        let t = sphere().intersect(&ray).unwrap();
        assert!(t > 0.0);
        assert!((t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn grazing_miss() {
        let ray = Ray::new(Vec3::new(0.0, 2.5, 0.0), Vec3::NEG_Z);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn normal_points_outwards() {
        let s = sphere();
        let n = s.normal_at(Vec3::new(0.0, 0.0, -8.0));
        assert!(n.distance_squared(Vec3::Z) < 1e-6);
    }
}
