//! Flow samplers: pure functions from (position, time) to a flow angle.
//!
//! A [`FlowSampler`] steers particles without simulating any fluid. The
//! default [`SineFlow`] is a product of travelling sine and cosine waves;
//! [`NoiseFlow`] swaps in 3D Perlin noise for a less regular texture.
//!
//! All implementations are deterministic: same inputs produce the same output.

use std::f64::consts::TAU;

use noise::{NoiseFn, Perlin};

/// A source of flow direction for particle advection.
///
/// Implementations must be continuous in `(x, y, t)` and finite for finite
/// inputs. A non-finite angle is a sampler defect; the integrator does not
/// guard against it.
pub trait FlowSampler: Send + Sync {
    /// Flow direction in radians at `(x, y)` and time `t` (seconds).
    fn angle(&self, x: f64, y: f64, t: f64) -> f64;
}

/// Travelling-wave field:
/// `sin(x·scale + t·time_scale) · cos(y·scale − t·time_scale) · 2π`.
///
/// The x phase advances with time while the y phase retreats, so the
/// pattern drifts diagonally but stays periodic and never pushes the whole
/// cloud in one direction for long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineFlow {
    pub scale: f64,
    pub time_scale: f64,
}

impl SineFlow {
    pub fn new(scale: f64, time_scale: f64) -> Self {
        Self { scale, time_scale }
    }
}

impl FlowSampler for SineFlow {
    fn angle(&self, x: f64, y: f64, t: f64) -> f64 {
        let phase = t * self.time_scale;
        (x * self.scale + phase).sin() * (y * self.scale - phase).cos() * TAU
    }
}

/// Perlin noise field, sampled in 3D with time as the third axis.
pub struct NoiseFlow {
    noise: Perlin,
    scale: f64,
    time_scale: f64,
}

impl NoiseFlow {
    pub fn new(scale: f64, time_scale: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            time_scale,
        }
    }
}

impl FlowSampler for NoiseFlow {
    fn angle(&self, x: f64, y: f64, t: f64) -> f64 {
        self.noise
            .get([x * self.scale, y * self.scale, t * self.time_scale])
            * TAU
    }
}
