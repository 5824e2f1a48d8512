mod demo;
mod single_sphere;

pub use demo::DemoScene;
pub use single_sphere::SingleSphereScene;
