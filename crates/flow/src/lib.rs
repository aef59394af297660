#![deny(unsafe_code)]
//! Particle flow-field animation engine.
//!
//! Particles drift through a time-varying flow field and leave fading
//! trails. Unlike a stateless pattern generator, the engine carries its
//! particle cloud and a bounded trail history from one frame to the next:
//! each [`FlowField::produce_frame`] call integrates one step, records the
//! new positions, and composites the whole trail into a fresh RGB frame.
//!
//! Per call: sample field → integrate → push snapshot (evicting the oldest)
//! → composite.

pub mod compositor;
pub mod integrator;
pub mod params;
pub mod particles;
pub mod sampler;
pub mod trail;

use flowart_core::error::EngineError;
use flowart_core::frame::Frame;
use flowart_core::prng::Xorshift64;
use flowart_core::Engine;
use glam::DVec2;
use log::{debug, trace, warn};
use serde_json::Value;

pub use compositor::Compositor;
pub use params::{FieldKind, FlowParams};
pub use particles::Particles;
pub use sampler::{FlowSampler, NoiseFlow, SineFlow};
pub use trail::TrailBuffer;

/// Stateful flow-field engine.
///
/// Owns the particle cloud and its trail exclusively; nothing outside the
/// engine can mutate either. Given the same dimensions, params, seed and
/// sequence of `t` values, output is bit-identical across runs.
pub struct FlowField {
    extent: DVec2,
    seed: u64,
    params: FlowParams,
    sampler: Box<dyn FlowSampler>,
    particles: Particles,
    trail: TrailBuffer,
    compositor: Compositor,
    frames_produced: u64,
    last_t: Option<f64>,
}

impl FlowField {
    /// Creates an engine with a seeded particle cloud and an empty trail.
    ///
    /// Fails fast on zero or overflowing dimensions, zero particles, zero
    /// history, or out-of-range float params.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: FlowParams,
    ) -> Result<Self, EngineError> {
        let compositor = Compositor::new(width, height, params.halo_weight)?;
        params.validate()?;
        let trail = TrailBuffer::new(params.max_history)?;
        let extent = DVec2::new(width as f64, height as f64);
        let mut rng = Xorshift64::new(seed);
        let particles = Particles::seeded(params.particle_count, extent, &mut rng)?;
        let sampler = build_sampler(&params, seed);

        debug!(
            "flow-field {width}x{height}: {} particles, history {}, {} field, seed {seed}",
            params.particle_count,
            params.max_history,
            params.field.name()
        );

        Ok(Self {
            extent,
            seed,
            params,
            sampler,
            particles,
            trail,
            compositor,
            frames_produced: 0,
            last_t: None,
        })
    }

    /// Creates an engine from a JSON params object; see [`FlowParams::from_json`].
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, FlowParams::from_json(json_params)?)
    }

    /// Advances to time `t` and renders the trail.
    ///
    /// Callers should pass non-decreasing `t`. A step backwards in time is
    /// logged and then processed like any other call.
    pub fn produce_frame(&mut self, t: f64) -> Frame {
        if let Some(prev) = self.last_t {
            if t < prev {
                warn!("flow-field frame {} requested at t={t} after t={prev}", self.frames_produced);
            }
        }
        integrator::step(
            &mut self.particles,
            self.sampler.as_ref(),
            self.params.speed,
            self.extent,
            t,
        );
        self.trail.push(self.particles.positions());
        self.frames_produced += 1;
        self.last_t = Some(t);
        trace!(
            "flow-field frame {} at t={t}, trail {}/{}",
            self.frames_produced,
            self.trail.len(),
            self.trail.capacity()
        );
        self.render_current()
    }

    /// Composites the current trail without stepping. Black before the
    /// first `produce_frame` call.
    pub fn render_current(&self) -> Frame {
        self.compositor.render(&self.trail, self.particles.colors())
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn sampler(&self) -> &dyn FlowSampler {
        self.sampler.as_ref()
    }

    pub fn flow_params(&self) -> &FlowParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of `produce_frame` calls so far.
    pub fn frames_produced(&self) -> u64 {
        self.frames_produced
    }
}

impl Engine for FlowField {
    fn produce_frame(&mut self, t: f64) -> Frame {
        FlowField::produce_frame(self, t)
    }

    fn width(&self) -> usize {
        self.compositor.width()
    }

    fn height(&self) -> usize {
        self.compositor.height()
    }

    fn params(&self) -> Value {
        self.params.to_json()
    }

    fn param_schema(&self) -> Value {
        FlowParams::schema()
    }
}

fn build_sampler(params: &FlowParams, seed: u64) -> Box<dyn FlowSampler> {
    match params.field {
        FieldKind::Sine => Box::new(SineFlow::new(params.flow_scale, params.time_scale)),
        FieldKind::Noise => {
            let folded = (seed ^ (seed >> 32)) as u32;
            Box::new(NoiseFlow::new(params.flow_scale, params.time_scale, folded))
        }
    }
}
