//! Error handling for cookiesweep

use thiserror::Error;

/// Main error type for cookiesweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Unsupported browser: \"{0}\"")]
    UnsupportedBrowser(String),

    #[error("Could not find a cookies database under \"{0}\"")]
    DatabaseNotFound(String),

    #[error("Could not read containers.json in \"{0}\"")]
    RegistryUnreadable(String),

    #[error("Could not find container \"{0}\" in containers.json")]
    ContainerNotFound(String),

    #[error("Cookie database error: {0}")]
    DatabaseAccess(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for cookiesweep operations
pub type Result<T> = std::result::Result<T, SweepError>;
