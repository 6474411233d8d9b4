use std::path::PathBuf;

use thiserror::Error;

use crate::profile::ResourceKind;

/// Errors raised while assembling a system prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("required resource '{resource}' is missing or empty")]
    MissingResource { resource: ResourceKind },

    #[error("system clock unavailable: {0}")]
    ClockUnavailable(#[from] ClockError),
}

/// Failure to read the current wall-clock time.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ClockError(pub String);

/// Errors raised while loading resource files from disk.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
