//! # storyline-builder
//!
//! Orchestrates the story pipeline: adapt → thesis → top KPIs → sections →
//! narrative, then assembles a [`StoryManifest`](storyline_core::StoryManifest).
//! Multi-mode builds share one immutable [`StoryIntermediate`] and render the
//! modes on the rayon pool. All file I/O lives in [`persistence`].

pub mod builder;
pub mod intermediate;
pub mod persistence;
pub mod validation;

pub use builder::StoryBuilder;
pub use intermediate::{BuildReport, StoryIntermediate};
pub use persistence::{load_insights, manifest_file_name, read_manifest, write_manifest, write_manifests};
pub use validation::{validate_manifest, ManifestViolation};
