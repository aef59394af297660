#![deny(unsafe_code)]
//! Engine registry, PNG snapshots and the frame-sequence driver.
//!
//! This crate sits between `flowart-core` (which defines the `Engine` trait)
//! and the engine crates (`flowart-flow`). The CLI depends on it so name
//! dispatch and frame writing live in one place.

#[cfg(feature = "png")]
pub mod driver;
#[cfg(feature = "png")]
pub mod snapshot;

use flowart_core::error::EngineError;
use flowart_core::frame::Frame;
use flowart_core::Engine;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["flow-field"];

/// Enumeration of all available animation engines.
///
/// Use [`EngineKind::from_name`] for string-based construction (CLI, seed files).
pub enum EngineKind {
    /// Particles advected through a flow field, with fading trails.
    FlowField(flowart_flow::FlowField),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "flow-field" => Ok(EngineKind::FlowField(flowart_flow::FlowField::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Constructs the engine a [`Seed`](flowart_core::Seed) describes.
    pub fn from_seed(seed: &flowart_core::Seed) -> Result<Self, EngineError> {
        seed.validate()?;
        Self::from_name(&seed.engine, seed.width, seed.height, seed.seed, &seed.params)
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn produce_frame(&mut self, t: f64) -> Frame {
        match self {
            EngineKind::FlowField(e) => e.produce_frame(t),
        }
    }

    fn width(&self) -> usize {
        match self {
            EngineKind::FlowField(e) => Engine::width(e),
        }
    }

    fn height(&self) -> usize {
        match self {
            EngineKind::FlowField(e) => Engine::height(e),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::FlowField(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::FlowField(e) => e.param_schema(),
        }
    }
}
