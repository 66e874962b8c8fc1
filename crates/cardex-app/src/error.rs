use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (file and CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Refusing to overwrite existing file {0} (use --force)")]
    OutputExists(PathBuf),

    #[error(transparent)]
    ServiceError(#[from] cardex_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] cardex_core::error::CoreError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
