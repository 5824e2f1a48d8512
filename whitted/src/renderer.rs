use rayon::prelude::*;

use crate::{
    camera::Camera,
    color::to_bytes,
    integrators::{Integrator, Whitted},
    math::vec::RgbAsVec3Ext,
    scene::Scene,
};

/// A completed render: row-major RGB bytes, three per pixel, with the
/// bottom image row stored first (row `j` follows the camera's v axis).
/// Encoders that want top-row-first output flip rows on the way out.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Wraps an existing buffer; `data` must hold `width * height` RGB
    /// triples.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The RGB bytes of row `j` (0 = bottom of the image).
    pub fn row(&self, j: u32) -> &[u8] {
        let stride = (self.width * 3) as usize;
        let start = j as usize * stride;
        &self.data[start..start + stride]
    }

    pub fn pixel(&self, i: u32, j: u32) -> [u8; 3] {
        let offset = (i * 3) as usize;
        let row = self.row(j);
        [row[offset], row[offset + 1], row[offset + 2]]
    }
}

/// Owns a scene and a camera and produces frames from them. Each render
/// call allocates a fresh frame; the scene is never mutated.
pub struct Renderer {
    pub scene: Scene,
    pub camera: Camera,
    pub integrator: Box<dyn Integrator>,
}

impl Renderer {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self {
            scene,
            camera,
            integrator: Box::new(Whitted),
        }
    }

    /// Traces one primary ray per pixel and packs the clamped colors into
    /// bytes. Rows are independent and rendered in parallel.
    pub fn render(&self) -> Frame {
        let width = self.camera.width;
        let height = self.camera.height;
        log::debug!("rendering {width}x{height} frame");

        let mut data = vec![0u8; (width * height * 3) as usize];
        data.par_chunks_mut(width as usize * 3)
            .enumerate()
            .for_each(|(j, row)| {
                for i in 0..width {
                    let ray = self.camera.ray(i, j as u32);
                    let color = self.integrator.ray_color(&self.scene, ray, 0);
                    row[(i * 3) as usize..(i * 3) as usize + 3]
                        .copy_from_slice(&to_bytes(color.vec()));
                }
            });

        Frame {
            width,
            height,
            data,
        }
    }
}
