use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for vcbench operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Operator input rejected before any filesystem work.
    #[error("{0}")]
    Validation(String),

    /// Filesystem failure while building the project layout.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copy or extraction failure during file acquisition.
    #[error("{context}: {source}")]
    FileOperation {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Unreadable or malformed configuration.
    #[error("{0}")]
    Config(String),
}

impl AppError {
    pub(crate) fn file_operation<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::FileOperation { context: context.into(), source: Box::new(source) }
    }
}
