//! Error types for project-collector.
//!
//! A missing or unresolvable root, a bad explicit config file and a failed
//! write of the output document abort a run. Everything that goes wrong with a single file is
//! reported and skipped by the collector.

mod context;

pub use context::IoOperation;

pub use crate::config::ConfigError;

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all collector operations.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The configured root does not exist.
    #[error("Root path not found: {0}")]
    RootNotFound(PathBuf),

    /// I/O operation failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CollectorError {
    /// Create an I/O read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Read,
            source,
        }
    }

    /// Create an I/O probe error.
    pub fn probe_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Probe,
            source,
        }
    }

    /// Create an I/O write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    /// Create an error for a root that exists but cannot be resolved.
    pub fn resolve_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Resolve,
            source,
        }
    }

    /// Create a directory enumeration error.
    pub fn walk_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Walk,
            source,
        }
    }

    /// Get the root cause of the error chain.
    pub fn root_cause(&self) -> &dyn std::error::Error {
        let mut current: &dyn std::error::Error = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}

/// Result type alias for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;
