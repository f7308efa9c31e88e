//! Insight adapter errors. All of them abort a build.

use super::error_code::{self, StoryErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("no insight records supplied")]
    EmptyInput,

    #[error("all {total} insight records lack text")]
    NoTextualRecords { total: usize },

    #[error("insight document {path} could not be read: {message}")]
    Unreadable { path: String, message: String },

    #[error("insight document {path} is malformed: {message}")]
    Malformed { path: String, message: String },
}

impl StoryErrorCode for AdapterError {
    fn error_code(&self) -> &'static str {
        error_code::ADAPTER_ERROR
    }
}
