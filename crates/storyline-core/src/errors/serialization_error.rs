//! Manifest persistence errors.
//!
//! Write failures keep the in-memory manifest so the caller can still
//! inspect or retry it.

use super::error_code::{self, StoryErrorCode};
use crate::models::StoryManifest;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("manifest {} could not be encoded: {message}", .manifest.id)]
    Encode {
        message: String,
        manifest: Box<StoryManifest>,
    },

    #[error("manifest {} could not be written to {path}: {message}", .manifest.id)]
    WriteFailed {
        path: String,
        message: String,
        manifest: Box<StoryManifest>,
    },

    #[error("manifest at {path} could not be read: {message}")]
    ReadFailed { path: String, message: String },

    #[error("manifest at {path} is malformed: {message}")]
    Decode { path: String, message: String },
}

impl SerializationError {
    /// The manifest that failed to persist, if this was a write-side failure.
    pub fn manifest(&self) -> Option<&StoryManifest> {
        match self {
            Self::Encode { manifest, .. } | Self::WriteFailed { manifest, .. } => Some(manifest),
            Self::ReadFailed { .. } | Self::Decode { .. } => None,
        }
    }

    /// Take ownership of the retained manifest.
    pub fn into_manifest(self) -> Option<StoryManifest> {
        match self {
            Self::Encode { manifest, .. } | Self::WriteFailed { manifest, .. } => Some(*manifest),
            Self::ReadFailed { .. } | Self::Decode { .. } => None,
        }
    }
}

impl StoryErrorCode for SerializationError {
    fn error_code(&self) -> &'static str {
        error_code::SERIALIZATION_ERROR
    }
}
