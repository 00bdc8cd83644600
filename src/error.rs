use thiserror::Error;

/// Errors raised while loading a [`Dataset`](crate::record::Dataset).
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to parse TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {kind} at index {index}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
