use crate::{
    color::{clamp_unit, Color},
    math::vec::{ByteColorAsVec3Ext, ReflectVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    ray::Ray,
    scene::Scene,
    shape::Surface,
};

use super::Integrator;

/// Recursive Whitted-style shading: nearest-hit search, ambient plus
/// per-light Blinn-Phong terms gated by shadow rays, and mirror reflection
/// bounded by the scene's depth limit.
pub struct Whitted;

impl Whitted {
    /// Nearest surface hit by `ray`, searching in scene order. Emitters are
    /// only eligible as primary-ray hits in light-visualization mode.
    fn nearest_hit<'a>(&self, scene: &'a Scene, ray: &Ray, depth: u32) -> Option<(f32, &'a Surface)> {
        let mut nearest: Option<(f32, &Surface)> = None;
        for surface in &scene.surfaces {
            if surface.is_emitter() && !(scene.light_visualization && depth == 0) {
                continue;
            }

            let Some(t) = surface.intersect(ray) else { continue };
            if nearest.map_or(true, |(t_min, _)| t < t_min) {
                nearest = Some((t, surface));
            }
        }
        nearest
    }

    /// True when any non-emitter surface blocks `shadow_ray` before it
    /// covers `light_distance`.
    fn occluded(&self, scene: &Scene, shadow_ray: &Ray, light_distance: f32) -> bool {
        scene
            .surfaces
            .iter()
            .filter(|surface| !surface.is_emitter())
            .filter_map(|surface| surface.intersect(shadow_ray))
            .any(|t| t < light_distance)
    }
}

impl Integrator for Whitted {
    fn ray_color(&self, scene: &Scene, ray: Ray, depth: u32) -> Color {
        let Some((t, surface)) = self.nearest_hit(scene, &ray, depth) else {
            return scene.background.scaled().rgb();
        };

        let x = ray.at(t);
        let material = surface.material();
        let ambient_color = material.ambient.scaled();

        // Visible light geometry is flat: full ambient color, no lighting,
        // no recursion.
        if surface.is_emitter() {
            return ambient_color.rgb();
        }

        let normal = surface.normal_at(x);
        let diffuse_color = material.diffuse.scaled();
        let specular_color = material.specular.scaled();

        let mut total = scene.ambient_intensity * ambient_color;
        for light in &scene.lights {
            let light_dir = (light.position - x).normalize();
            let shadow_origin = x + scene.shadow_bias * light_dir;
            let light_distance = (light.position - shadow_origin).length();
            let shadow_ray = Ray::new(shadow_origin, light_dir);

            if !self.occluded(scene, &shadow_ray, light_distance) {
                total += light.intensity * normal.dot(light_dir).max(0.0) * diffuse_color;

                let eye = (ray.origin - x).normalize();
                let half = (eye + light_dir).normalize();
                total += light.intensity
                    * normal.dot(half).max(0.0).powf(material.phong_exponent)
                    * specular_color;
            }

            // Reflection accumulates once per light: N lights scale the
            // reflected term N-fold. Deliberate, kept for compatibility.
            if material.reflective && depth < scene.max_depth {
                let reflected = ray.direction.reflect(normal);
                let bounce_ray = Ray::new(x + scene.shadow_bias * reflected, reflected);
                let bounce = self.ray_color(scene, bounce_ray, depth + 1);
                total += light.intensity * bounce.vec() * specular_color;
            }
        }

        clamp_unit(total).rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::Material,
        math::vec::Vec3,
        scene::{Light, Scene},
        shape::{Plane, Sphere, Surface},
    };
    use image::Rgb;

    const EPS: f32 = 1e-5;

    fn ground_plane(material: Material) -> Surface {
        Surface::Plane(Plane::new(Vec3::ZERO, Vec3::X, Vec3::Z, material))
    }

    fn lit_floor_scene(floor: Material, background: [u8; 3]) -> Scene {
        let mut scene = Scene::new(Rgb(background));
        scene.ambient_intensity = 0.25;
        scene.insert_surface(ground_plane(floor));
        scene.insert_light(Light {
            position: Vec3::new(0.0, 10.0, 0.0),
            intensity: 0.5,
        });
        scene
    }

    // A primary ray pointing straight down at the floor's origin.
    fn down_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y)
    }

    #[test]
    fn empty_scene_is_background() {
        let scene = Scene::new(Rgb([51, 102, 255]));
        let color = Whitted.ray_color(&scene, down_ray(), 0);
        let expected = Vec3::new(51.0, 102.0, 255.0) / 255.0;
        assert!(color.vec().distance_squared(expected) < EPS);
    }

    #[test]
    fn unshadowed_point_gets_all_three_terms() {
        let floor = Material::new([128, 128, 128], [255, 255, 255], [255, 255, 255], 16.0);
        let mut scene = lit_floor_scene(floor, [0, 0, 0]);
        scene.lights[0].intensity = 0.3;

        let color = Whitted.ray_color(&scene, down_ray(), 0).vec();
        // eye, light and normal are all straight up: n.l = n.h = 1
        let expected = 0.25 * (128.0 / 255.0) + 0.3 + 0.3;
        assert!((color.x - expected).abs() < 1e-4);
    }

    #[test]
    fn shadow_leaves_only_ambient() {
        let floor = Material::new([128, 128, 128], [255, 255, 255], [255, 255, 255], 16.0);
        let mut scene = lit_floor_scene(floor, [0, 0, 0]);
        // Opaque blocker halfway between the shaded point (2.4, 0, 0) and
        // the light, off the primary ray's path
        scene.insert_surface(Surface::Sphere(Sphere::new(
            Vec3::new(1.2, 5.0, 0.0),
            1.0,
            floor,
        )));

        // Aim slightly off axis so the primary ray slips past the blocker
        let ray = Ray::new(Vec3::new(4.0, 4.0, 0.0), Vec3::new(-0.4, -1.0, 0.0));
        let color = Whitted.ray_color(&scene, ray, 0).vec();
        let ambient_only = 0.25 * (128.0 / 255.0);
        assert!((color.x - ambient_only).abs() < 1e-4);
        assert!((color.y - ambient_only).abs() < 1e-4);
        assert!((color.z - ambient_only).abs() < 1e-4);
    }

    #[test]
    fn reflection_stops_at_max_depth() {
        let mirror =
            Material::new([10, 10, 10], [20, 20, 20], [255, 255, 255], 16.0).reflective();
        let matte = Material::new([10, 10, 10], [20, 20, 20], [255, 255, 255], 16.0);

        // Red background so a bounce off the floor adds a visible red term
        let reflective_scene = lit_floor_scene(mirror, [255, 0, 0]);
        let matte_scene = lit_floor_scene(matte, [255, 0, 0]);

        // At the depth limit no bounce is cast: both floors shade the same
        let at_limit = reflective_scene.max_depth;
        let mirror_color = Whitted.ray_color(&reflective_scene, down_ray(), at_limit);
        let matte_color = Whitted.ray_color(&matte_scene, down_ray(), at_limit);
        assert!(mirror_color.vec().distance_squared(matte_color.vec()) < EPS);

        // A primary ray does bounce and picks up the background
        let mirror_color = Whitted.ray_color(&reflective_scene, down_ray(), 0);
        assert!(mirror_color.vec().x > matte_color.vec().x + 0.1);
    }

    #[test]
    fn channels_clamp_to_one() {
        let floor = Material::new([255, 255, 255], [255, 255, 255], [255, 255, 255], 16.0);
        let mut scene = lit_floor_scene(floor, [0, 0, 0]);
        scene.lights[0].intensity = 100.0;

        let color = Whitted.ray_color(&scene, down_ray(), 0).vec();
        assert_eq!(color, Vec3::ONE);
    }

    #[test]
    fn emitters_never_occlude_or_hit_by_default() {
        let floor = Material::new([128, 128, 128], [255, 255, 255], [255, 255, 255], 16.0);
        let mut scene = lit_floor_scene(floor, [0, 0, 0]);
        // Emitter geometry sitting right between the point and the light
        scene.insert_surface(Surface::Emitter(Sphere::new(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            floor,
        )));

        let lit = Whitted.ray_color(&scene, down_ray(), 0).vec();
        assert!(lit.x > 0.25 * (128.0 / 255.0) + 0.1);
    }

    #[test]
    fn emitter_is_flat_on_primary_rays_in_visualization_mode() {
        let glow = Material::new([255, 255, 0], [0, 0, 0], [0, 0, 0], 1.0);
        let mut scene = Scene::new(Rgb([0, 0, 255]));
        scene.insert_surface(Surface::Emitter(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            glow,
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        // Hidden by default
        let color = Whitted.ray_color(&scene, ray, 0).vec();
        assert!(color.distance_squared(Vec3::new(0.0, 0.0, 1.0)) < EPS);

        // Flat ambient color on primary rays when visualization is on
        scene.light_visualization = true;
        let color = Whitted.ray_color(&scene, ray, 0).vec();
        assert!(color.distance_squared(Vec3::new(1.0, 1.0, 0.0)) < EPS);

        // Still invisible to secondary rays
        let color = Whitted.ray_color(&scene, ray, 1).vec();
        assert!(color.distance_squared(Vec3::new(0.0, 0.0, 1.0)) < EPS);
    }
}
