// Creator Lens Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreatorLensError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CreatorLensError {
    fn from(err: anyhow::Error) -> Self {
        CreatorLensError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CreatorLensError>;
