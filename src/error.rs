//! Errors raised while reading a daily log.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    /// The log file does not exist
    #[error("Log file {} not found.", path.display())]
    NotFound { path: PathBuf },

    /// The log file exists but could not be opened or read
    #[error("Failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogError::NotFound { .. })
    }
}

pub type Result<T, E = LogError> = std::result::Result<T, E>;
