mod file_output;

pub use file_output::FileOutput;

use anyhow::Result;
use whitted::renderer::Frame;

/// Sink for a completed frame.
pub trait FinalOutput {
    fn commit(&self, frame: &Frame) -> Result<()>;
}
