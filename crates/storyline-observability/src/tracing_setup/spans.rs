//! Span definitions per build phase: prepare, render, persist.

/// Create a span around the shared preparation phase of a build.
#[macro_export]
macro_rules! build_span {
    ($project:expr, $record_count:expr) => {
        tracing::info_span!("storyline.build", project = %$project, record_count = $record_count)
    };
}

/// Create a span around one mode render.
#[macro_export]
macro_rules! render_span {
    ($mode:expr) => {
        tracing::info_span!("storyline.render", mode = %$mode)
    };
}

/// Create a span around manifest persistence.
#[macro_export]
macro_rules! persist_span {
    ($path:expr) => {
        tracing::info_span!("storyline.persist", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BUILD: &str = "storyline.build";
    pub const RENDER: &str = "storyline.render";
    pub const PERSIST: &str = "storyline.persist";
}
