//! Reproducible description of a rendered animation.
//!
//! A [`Seed`] captures everything needed to re-render a clip: engine name,
//! frame dimensions, parameters, PRNG seed, and the fps/duration schedule.
//! It describes the render, not the simulation state; replaying a seed
//! always starts from the first frame.

use crate::error::EngineError;
use crate::schedule::FrameSchedule;
use serde::{Deserialize, Serialize};

/// Reproducible description of a flowart clip.
///
/// Two identical `Seed` values fed to the same binary produce bit-identical
/// frame sequences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub fps: f64,
    pub duration: f64,
}

impl Seed {
    pub const DEFAULT_WIDTH: usize = 1280;
    pub const DEFAULT_HEIGHT: usize = 720;
    pub const DEFAULT_FPS: f64 = 30.0;
    pub const DEFAULT_DURATION: f64 = 10.0;

    /// Creates a seed with empty params and the default 30 fps, 10 s schedule.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            fps: Self::DEFAULT_FPS,
            duration: Self::DEFAULT_DURATION,
        }
    }

    /// Validates dimensions and timing.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        self.schedule().map(|_| ())
    }

    /// The frame schedule this seed describes.
    pub fn schedule(&self) -> Result<FrameSchedule, EngineError> {
        FrameSchedule::new(self.fps, self.duration)
    }
}
