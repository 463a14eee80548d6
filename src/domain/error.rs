use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for senaite-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading a target file failed.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a target file failed.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error in the paths config file.
    #[error("Config parse error in {}: {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// An embedded template could not be registered or rendered.
    #[error("Template '{template}' failed: {reason}")]
    Template { template: String, reason: String },

    /// Unknown step name passed on the command line.
    #[error("Unknown step '{0}': expected one of {1}")]
    UnknownStep(String, String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileRead { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileWrite { path: path.into(), source }
    }
}
