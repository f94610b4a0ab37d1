//! Error types for ffind
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should be actionable - include context about what to do
//! - Almost nothing inside the walk itself is fatal: a directory that
//!   cannot be read is skipped and counted, never propagated

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the ffind application
#[derive(Error, Debug)]
pub enum FindError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid worker count
    #[error("Invalid worker count {count}: must be between 1 and {max}")]
    InvalidWorkerCount { count: usize, max: usize },

    /// Root path does not exist or is unreadable
    #[error("Root path '{path}' is not accessible: {reason}")]
    RootNotFound { path: PathBuf, reason: String },

    /// Root path is not a directory
    #[error("Root path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker thread creation failed
    #[error("Failed to spawn worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },

    /// Worker panicked
    #[error("Worker {id} panicked")]
    Panicked { id: usize },

    /// Not a single worker thread could be started
    #[error("No worker threads could be started")]
    NoWorkers,
}

/// Result type alias for FindError
pub type Result<T> = std::result::Result<T, FindError>;

/// Represents the outcome of walking a single directory
#[derive(Debug)]
pub enum WalkOutcome {
    /// Successfully enumerated the directory
    Success { entries: usize, subdirs: usize },

    /// Skipped before any filesystem work (path capacity)
    Skipped { reason: &'static str },

    /// Enumeration failed; the directory was abandoned
    Failed { error: std::io::Error },
}

impl WalkOutcome {
    /// Returns true if this outcome represents success
    pub fn is_success(&self) -> bool {
        matches!(self, WalkOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let worker_err = WorkerError::NoWorkers;
        let find_err: FindError = worker_err.into();
        assert!(matches!(find_err, FindError::Worker(_)));
    }

    #[test]
    fn test_outcome_success() {
        let ok = WalkOutcome::Success {
            entries: 3,
            subdirs: 1,
        };
        assert!(ok.is_success());

        let skipped = WalkOutcome::Skipped {
            reason: "path exceeds working capacity",
        };
        assert!(!skipped.is_success());
    }
}
