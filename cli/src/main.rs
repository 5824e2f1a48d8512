mod cli;
mod output;

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use cli::Cli;
use whitted::math::vec::Vec3;
use whitted::scene::{
    examples::{DemoScene, SingleSphereScene},
    Scene,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Demo,
    SingleSphere,
}

impl From<AvailableScene> for Scene {
    fn from(value: AvailableScene) -> Scene {
        match value {
            AvailableScene::Demo => DemoScene.into(),
            AvailableScene::SingleSphere => SingleSphereScene.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableProjection {
    #[default]
    Orthographic,
    Perspective,
}

#[derive(Clone, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b)) = (split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// A point parsed from `x,y,z`.
#[derive(Clone, Debug)]
pub struct Position(Vec3);

impl std::str::FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split(',');
        let (Some(x), Some(y), Some(z)) = (split_it.next(), split_it.next(), split_it.next())
        else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };

        Ok(Position(Vec3::new(x.parse()?, y.parse()?, z.parse()?)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{},{},{}", self.0.x, self.0.y, self.0.z))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "256x256")]
    /// Image dimensions in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, value_enum, default_value_t)]
    /// Projection mode for primary rays
    projection: AvailableProjection,

    #[arg(long, default_value_t = 144.0)]
    /// Distance to the image plane (perspective projection only)
    projection_distance: f32,

    #[arg(long, default_value = "100,100,0")]
    /// Camera position in format x,y,z
    camera: Position,

    #[arg(long, default_value_t = 0.0)]
    /// Camera pitch in degrees
    pitch: f32,

    #[arg(long, default_value_t = 0.0)]
    /// Camera yaw in degrees
    yaw: f32,

    #[arg(long, default_value_t = 1)]
    /// Reflection recursion limit
    max_depth: u32,

    #[arg(long)]
    /// Render light emitters as visible flat-colored geometry
    light_visualization: bool,

    #[arg(short, long, default_value = "render.ppm")]
    /// Output path; `.ppm` writes a binary P6 stream, other extensions go
    /// through the image crate
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args).run()
}
