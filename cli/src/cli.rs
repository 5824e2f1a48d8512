use anyhow::Result;
use whitted::{
    camera::{Camera, Projection},
    math::{rotation::transform_vector, vec::Vec3},
    renderer::Renderer,
    scene::Scene,
    utils::timer::timed_scope_log,
};

use crate::{
    output::{FileOutput, FinalOutput},
    Args, AvailableProjection,
};

pub struct Cli {
    renderer: Renderer,
    output: FileOutput,
}

impl Cli {
    pub fn new(args: Args) -> Self {
        let mut scene: Scene = args.scene.into();
        scene.max_depth = args.max_depth;
        scene.light_visualization = args.light_visualization;

        // Steer the default view by pitch and yaw; roll stays 0.
        let look = transform_vector(Vec3::NEG_Z, args.pitch, args.yaw, 0.0);
        let up = transform_vector(Vec3::Y, args.pitch, args.yaw, 0.0);

        let projection = match args.projection {
            AvailableProjection::Orthographic => Projection::Orthographic,
            AvailableProjection::Perspective => Projection::Perspective {
                distance: args.projection_distance,
            },
        };
        let camera = Camera::new(
            args.camera.0,
            look,
            up,
            args.dimensions.width,
            args.dimensions.height,
            projection,
        );

        Self {
            renderer: Renderer::new(scene, camera),
            output: FileOutput::new(args.output),
        }
    }

    pub fn run(self) -> Result<()> {
        let frame = timed_scope_log("Render frame", || self.renderer.render());
        self.output.commit(&frame)?;

        log::info!("Done");
        Ok(())
    }
}
