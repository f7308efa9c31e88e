//! Top-level error aggregating every fatal Storyline failure.

use super::error_code::StoryErrorCode;
use super::{AdapterError, ConfigError, SerializationError};

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoryErrorCode for StoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Adapter(e) => e.error_code(),
            Self::Serialization(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type StoryResult<T> = Result<T, StoryError>;
