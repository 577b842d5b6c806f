//! Error types
//!
//! Configuration problems stop the process before the first round; sink
//! failures stop the engine mid-run. Nothing is retried.

use std::path::PathBuf;

use crate::sink::SinkError;

/// Invalid or unreadable configuration, detected at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("crash scale must be between 0 and 42000000, got {0}")]
    InvalidCrashScale(f64),

    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("file sink selected but no output path given")]
    MissingOutputPath,

    #[error("output directory {0} does not exist")]
    MissingOutputDir(PathBuf),

    #[error("invalid output path {0}")]
    InvalidOutputPath(PathBuf),
}

/// Fatal failure of a running engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}
