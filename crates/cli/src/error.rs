//! Exit-code mapping for `flowart` failures.
//!
//! | code | meaning |
//! | --- | --- |
//! | 0 | success |
//! | 2 | argument parse error (reported by clap) |
//! | 10 | engine configuration: unknown engine, dimensions, params, timing |
//! | 11 | filesystem: frame or seed write, seed read |
//! | 12 | malformed JSON in `--params` or a seed file |
//! | 13 | JSON output could not be serialized |

use flowart_core::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(EngineError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// PNG write failures surface from the engines crate as `EngineError::Io`
/// and keep their filesystem exit code.
impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
