//! Host-level error types.
//!
//! The simulation itself never fails; everything that can go wrong lives at
//! the edges: reading settings, parsing the command line, and talking to the
//! game loop thread.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    /// A settings file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A settings file was read but is not valid TOML for `Settings`.
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A command-line argument was missing its value or could not be parsed.
    InvalidArgument {
        flag: String,
        /// Human-readable description of what was expected.
        reason: String,
    },

    /// The game loop thread could not be started.
    Spawn(std::io::Error),

    /// The game loop hung up before the session finished.
    LoopDisconnected,

    /// Snapshots were requested while no run was in progress.
    NoActiveRun,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { path, source } => {
                write!(f, "failed to read settings '{}': {}", path.display(), source)
            }
            AppError::SettingsParse { path, source } => {
                write!(f, "failed to parse settings '{}': {}", path.display(), source)
            }
            AppError::InvalidArgument { flag, reason } => {
                write!(f, "invalid argument '{}': {}", flag, reason)
            }
            AppError::Spawn(source) => write!(f, "failed to spawn game loop thread: {}", source),
            AppError::LoopDisconnected => write!(f, "game loop disconnected unexpectedly"),
            AppError::NoActiveRun => write!(f, "no run in progress"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            AppError::SettingsParse { source, .. } => Some(source),
            AppError::Spawn(source) => Some(source),
            AppError::InvalidArgument { .. }
            | AppError::LoopDisconnected
            | AppError::NoActiveRun => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_flag() {
        let err = AppError::InvalidArgument {
            flag: "--seed".into(),
            reason: "expected an unsigned integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument '--seed': expected an unsigned integer"
        );
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = AppError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("missing.toml"));
        assert!(std::error::Error::source(&AppError::LoopDisconnected).is_none());
    }
}
