use glam::Vec3;
use image::Rgb;

use crate::{
    material::Material,
    scene::{Light, Scene},
    shape::{Sphere, Surface},
};

/// One white sphere in front of the camera with a single light above it.
/// Small enough to reason about pixel by pixel.
pub struct SingleSphereScene;

impl From<SingleSphereScene> for Scene {
    fn from(_: SingleSphereScene) -> Self {
        let mut scene = Scene::new(Rgb([0, 0, 0]));

        scene.insert_surface(Surface::Sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::new([10, 10, 10], [255, 255, 255], [255, 255, 255], 16.0),
        )));
        scene.insert_light(Light {
            position: Vec3::new(0.0, 5.0, 0.0),
            intensity: 1.0,
        });

        scene
    }
}
