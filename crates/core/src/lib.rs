#![deny(unsafe_code)]
//! Core types and traits for the flowart animation system.
//!
//! Provides the `Engine` trait, the RGB `Frame` buffer, `EngineError`,
//! the `Xorshift64` PRNG, the reproducible `Seed`, the `FrameSchedule`
//! that maps frame indices to animation time, and JSON parameter helpers.

pub mod engine;
pub mod error;
pub mod frame;
pub mod params;
pub mod prng;
pub mod schedule;
pub mod seed;

pub use engine::Engine;
pub use error::EngineError;
pub use frame::{Frame, Rgb};
pub use prng::Xorshift64;
pub use schedule::FrameSchedule;
pub use seed::Seed;
