//! PNG output of a single [`Frame`].
//!
//! Feature-gated behind `png` (default on) so the registry can be used
//! without pulling in the `image` crate.

use flowart_core::error::EngineError;
use flowart_core::frame::Frame;
use std::path::Path;

/// File name of frame `index` within a sequence directory.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

/// Writes a frame as an RGB PNG.
///
/// Returns `EngineError::InvalidDimensions` if the frame dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(frame: &Frame, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(frame.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(frame.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, frame.data().to_vec())
        .ok_or_else(|| EngineError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
