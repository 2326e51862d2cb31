use experience_core::StoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup and configuration failures for the API server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid port '{0}'")]
    InvalidPort(String),
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead { path: PathBuf, source: io::Error },
    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ServerError {
    /// Line printed to stderr before the binary exits
    pub fn exit_message(&self) -> String {
        format!("An error occurred: {}", self)
    }
}
