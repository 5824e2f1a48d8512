use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use image::RgbImage;
use whitted::renderer::Frame;

use super::FinalOutput;

/// Writes a frame to disk. `.ppm` paths get a binary P6 stream; any other
/// extension is encoded by the image crate.
pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, frame: &Frame) -> Result<()> {
        if self.path.extension().map_or(false, |ext| ext == "ppm") {
            write_ppm(frame, &self.path)?;
        } else {
            to_image(frame).save(&self.path)?;
        }

        log::info!("Saved {}", self.path.display());
        Ok(())
    }
}

/// P6 header (`P6`, width, height, max value 255), then raw RGB rows. The
/// format wants the top image row first and the frame stores the bottom
/// row first, so rows go out in reverse.
fn write_ppm(frame: &Frame, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write!(file, "P6\n{}\n{}\n255\n", frame.width, frame.height)?;
    for j in (0..frame.height).rev() {
        file.write_all(frame.row(j))?;
    }
    file.flush()?;
    Ok(())
}

fn to_image(frame: &Frame) -> RgbImage {
    let mut image = RgbImage::new(frame.width, frame.height);
    for j in 0..frame.height {
        for i in 0..frame.width {
            image.put_pixel(i, frame.height - 1 - j, image::Rgb(frame.pixel(i, j)));
        }
    }
    image
}
