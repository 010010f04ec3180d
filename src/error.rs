//=========================================================================
// Errors
//=========================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::core::platform_bridge::PlatformError;

/// Crate-wide result alias.
pub type DrillResult<T> = Result<T, DrillError>;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("core thread could not be started: {0}")]
    CoreThreadSpawn(#[source] std::io::Error),

    #[error("core thread panicked")]
    CoreThreadPanicked,
}

impl DrillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = DrillError::io(
            "drill_scores.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on drill_scores.json: denied");

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = DrillError::json("config.json", parse);
        assert!(err.to_string().starts_with("malformed JSON in config.json"));
    }

    #[test]
    fn panicked_core_has_stable_message() {
        assert_eq!(DrillError::CoreThreadPanicked.to_string(), "core thread panicked");
    }
}
