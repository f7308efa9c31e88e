//! # storyline-observability
//!
//! Structured tracing for the Storyline pipeline: subscriber setup, span
//! definitions per build phase, and named events with stable `event` fields.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, LOG_ENV_VAR};
