use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
