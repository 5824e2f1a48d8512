use glam::Vec3;
use image::Rgb;

use crate::{
    material::Material,
    scene::{Light, Scene},
    shape::{Plane, Sphere, Surface, Triangle},
};

/// The built-in showcase scene: two shaded spheres, a diamond made of six
/// triangles, a reflective ground plane and two point lights with visible
/// emitter geometry. Best viewed from around (100, 100, 0) looking down -z.
pub struct DemoScene;

impl From<DemoScene> for Scene {
    fn from(_: DemoScene) -> Self {
        let mut scene = Scene::new(Rgb([0, 0, 0]));

        let magenta = Material::new([255, 128, 255], [255, 128, 255], [255, 255, 255], 16.0);
        let salmon = Material::new([255, 128, 128], [255, 128, 128], [255, 255, 255], 16.0);
        let cyan = Material::new([128, 255, 255], [128, 255, 255], [255, 255, 255], 16.0);
        let ground = Material::new([255, 255, 0], [255, 255, 0], [255, 255, 255], 16.0)
            .reflective();
        let emitter = Material::new([255, 255, 0], [255, 255, 0], [255, 255, 255], 16.0);

        scene.insert_surface(Surface::Sphere(Sphere::new(
            Vec3::new(125.0, 50.0, -150.0),
            50.0,
            magenta,
        )));

        let diamond = [
            [(175.0, 5.0, -75.0), (200.0, 55.0, -100.0), (225.0, 5.0, -75.0)],
            [(225.0, 5.0, -75.0), (200.0, 55.0, -100.0), (225.0, 5.0, -125.0)],
            [(225.0, 5.0, -125.0), (200.0, 55.0, -100.0), (175.0, 5.0, -125.0)],
            [(175.0, 5.0, -125.0), (200.0, 55.0, -100.0), (175.0, 5.0, -75.0)],
            [(225.0, 5.0, -125.0), (175.0, 5.0, -125.0), (175.0, 5.0, -75.0)],
            [(225.0, 5.0, -75.0), (225.0, 5.0, -125.0), (175.0, 5.0, -75.0)],
        ];
        for [a, b, c] in diamond {
            scene.insert_surface(Surface::Triangle(Triangle::new(
                Vec3::from(a),
                Vec3::from(b),
                Vec3::from(c),
                cyan,
            )));
        }

        scene.insert_surface(Surface::Sphere(Sphere::new(
            Vec3::new(128.0, 41.0, -62.0),
            20.0,
            salmon,
        )));

        scene.insert_surface(Surface::Plane(Plane::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Z,
            ground,
        )));

        for position in [Vec3::new(100.0, 100.0, -50.0), Vec3::new(231.0, 63.0, -127.0)] {
            scene.insert_surface(Surface::Emitter(Sphere::new(position, 5.0, emitter)));
            scene.insert_light(Light {
                position,
                intensity: 0.2,
            });
        }

        scene
    }
}
