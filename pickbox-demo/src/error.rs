use std::path::PathBuf;

use thiserror::Error;

/// Demo error type.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read options from {path}: {source}")]
    ReadOptions {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid options in {path}: {source}")]
    ParseOptions {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
