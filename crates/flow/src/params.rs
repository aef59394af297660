//! Tunable parameters of the flow engine and their JSON mapping.

use flowart_core::error::EngineError;
use flowart_core::params::{param_f64, param_string, param_usize};
use serde_json::{json, Value};

/// Default number of particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
/// Default trail depth in frames.
pub const DEFAULT_MAX_HISTORY: usize = 20;
/// Default distance travelled per step, in pixels.
pub const DEFAULT_SPEED: f64 = 2.0;
/// Default spatial frequency of the flow field.
pub const DEFAULT_FLOW_SCALE: f64 = 0.005;
/// Default temporal frequency of the flow field.
pub const DEFAULT_TIME_SCALE: f64 = 0.5;
/// Default halo strength relative to the particle's faded color.
pub const DEFAULT_HALO_WEIGHT: f64 = 0.3;

/// Which [`FlowSampler`](crate::sampler::FlowSampler) drives the particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Travelling sine/cosine waves.
    #[default]
    Sine,
    /// 3D Perlin noise seeded from the engine seed.
    Noise,
}

impl FieldKind {
    const NAMES: &'static [&'static str] = &["sine", "noise"];

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Sine => "sine",
            FieldKind::Noise => "noise",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "sine" => Ok(FieldKind::Sine),
            "noise" => Ok(FieldKind::Noise),
            other => Err(EngineError::InvalidParam {
                name: "field".into(),
                reason: format!("unknown field '{other}', expected one of {:?}", Self::NAMES),
            }),
        }
    }
}

/// Flow engine configuration.
///
/// Use [`Default`] for the classic look: 1000 particles, 20-frame trails,
/// speed 2, sine field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub particle_count: usize,
    pub max_history: usize,
    pub speed: f64,
    pub flow_scale: f64,
    pub time_scale: f64,
    pub halo_weight: f64,
    pub field: FieldKind,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_history: DEFAULT_MAX_HISTORY,
            speed: DEFAULT_SPEED,
            flow_scale: DEFAULT_FLOW_SCALE,
            time_scale: DEFAULT_TIME_SCALE,
            halo_weight: DEFAULT_HALO_WEIGHT,
            field: FieldKind::Sine,
        }
    }
}

impl FlowParams {
    /// Extracts parameters from a JSON object, using defaults for missing keys.
    ///
    /// Present keys with the wrong type, and out-of-range values, are errors.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        let parsed = Self {
            particle_count: param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT)?,
            max_history: param_usize(params, "max_history", DEFAULT_MAX_HISTORY)?,
            speed: param_f64(params, "speed", DEFAULT_SPEED)?,
            flow_scale: param_f64(params, "flow_scale", DEFAULT_FLOW_SCALE)?,
            time_scale: param_f64(params, "time_scale", DEFAULT_TIME_SCALE)?,
            halo_weight: param_f64(params, "halo_weight", DEFAULT_HALO_WEIGHT)?,
            field: FieldKind::from_name(&param_string(params, "field", FieldKind::Sine.name())?)?,
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Checks ranges. Called by the engine constructor as well, so params
    /// built in code get the same treatment as params read from JSON.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.particle_count == 0 {
            return Err(EngineError::InvalidParticleCount);
        }
        if self.max_history == 0 {
            return Err(EngineError::InvalidHistory);
        }
        for (name, value) in [
            ("speed", self.speed),
            ("flow_scale", self.flow_scale),
            ("time_scale", self.time_scale),
            ("halo_weight", self.halo_weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(name, "must be finite"));
            }
        }
        if self.halo_weight < 0.0 {
            return Err(invalid("halo_weight", "must not be negative"));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        json!({
            "particle_count": self.particle_count,
            "max_history": self.max_history,
            "speed": self.speed,
            "flow_scale": self.flow_scale,
            "time_scale": self.time_scale,
            "halo_weight": self.halo_weight,
            "field": self.field.name(),
        })
    }

    pub fn schema() -> Value {
        json!({
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 1,
                "description": "Number of particles advected through the field"
            },
            "max_history": {
                "type": "integer",
                "default": DEFAULT_MAX_HISTORY,
                "min": 1,
                "description": "Trail length in frames; older positions are evicted first"
            },
            "speed": {
                "type": "number",
                "default": DEFAULT_SPEED,
                "description": "Distance in pixels each particle moves per frame"
            },
            "flow_scale": {
                "type": "number",
                "default": DEFAULT_FLOW_SCALE,
                "description": "Spatial frequency of the flow field"
            },
            "time_scale": {
                "type": "number",
                "default": DEFAULT_TIME_SCALE,
                "description": "How fast the flow field evolves per second"
            },
            "halo_weight": {
                "type": "number",
                "default": DEFAULT_HALO_WEIGHT,
                "min": 0.0,
                "description": "Brightness of the glow around each particle"
            },
            "field": {
                "type": "string",
                "default": FieldKind::Sine.name(),
                "enum": FieldKind::NAMES,
                "description": "Flow field generator: sine waves or Perlin noise"
            }
        })
    }
}

fn invalid(name: &str, reason: &str) -> EngineError {
    EngineError::InvalidParam {
        name: name.into(),
        reason: reason.into(),
    }
}
