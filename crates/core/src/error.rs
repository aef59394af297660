//! Error types for the flowart core.

use thiserror::Error;

/// Errors produced by engine construction and the surrounding render pipeline.
///
/// Everything except `Io` is a configuration error: it surfaces before the
/// first frame is produced and is never recovered from by clamping.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The particle count was zero.
    #[error("invalid particle count: at least one particle is required")]
    InvalidParticleCount,

    /// The trail history capacity was zero.
    #[error("invalid trail history: max_history must be at least 1")]
    InvalidHistory,

    /// Frames-per-second or duration was non-positive or non-finite.
    #[error("invalid timing: fps ({fps}) and duration ({duration}) must be positive and finite")]
    InvalidTiming { fps: f64, duration: f64 },

    /// A parameter had the right type but an unusable value.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// No engine is registered under the requested name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Writing frames or seed files failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = EngineError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_history_mentions_max_history() {
        let msg = EngineError::InvalidHistory.to_string();
        assert!(msg.contains("max_history"), "got: {msg}");
    }

    #[test]
    fn invalid_timing_includes_values() {
        let msg = EngineError::InvalidTiming {
            fps: 0.0,
            duration: 12.5,
        }
        .to_string();
        assert!(msg.contains("fps (0)"), "missing fps in: {msg}");
        assert!(msg.contains("12.5"), "missing duration in: {msg}");
    }

    #[test]
    fn param_type_mismatch_includes_all_fields() {
        let err = EngineError::ParamTypeMismatch {
            name: "particle_count".into(),
            expected: "non-negative integer".into(),
            got: "string".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("particle_count"), "missing param name in: {msg}");
        assert!(msg.contains("non-negative integer"), "missing expected type in: {msg}");
        assert!(msg.contains("string"), "missing got type in: {msg}");
    }

    #[test]
    fn invalid_param_includes_name_and_reason() {
        let err = EngineError::InvalidParam {
            name: "speed".into(),
            reason: "must be finite".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("speed") && msg.contains("finite"), "got: {msg}");
    }

    #[test]
    fn io_error_converts_from_std() {
        let std_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let err = EngineError::from(std_err);
        assert!(matches!(err, EngineError::Io(ref m) if m.contains("no such dir")));
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}
