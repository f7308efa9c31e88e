//! Error handling for Storyline.
//! One error enum per concern, `thiserror` only.

pub mod adapter_error;
pub mod config_error;
pub mod error_code;
pub mod extraction_warning;
pub mod serialization_error;
pub mod story_error;

pub use adapter_error::AdapterError;
pub use config_error::ConfigError;
pub use error_code::StoryErrorCode;
pub use extraction_warning::ExtractionWarning;
pub use serialization_error::SerializationError;
pub use story_error::{StoryError, StoryResult};
