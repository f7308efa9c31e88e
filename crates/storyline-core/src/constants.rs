/// Storyline version, stamped into manifest metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator name recorded in manifest metadata.
pub const GENERATOR: &str = "storyline";

/// Global top-KPI count a well-populated corpus is expected to reach.
pub const MIN_TOP_KPIS: usize = 3;

/// Hard cap on global top KPIs.
pub const MAX_TOP_KPIS: usize = 5;

/// Hard cap on KPIs attached to one section.
pub const MAX_SECTION_KPIS: usize = 3;

/// Hard cap on sections in a manifest.
pub const MAX_SECTIONS: usize = 5;

/// Title of the fallback section when it is the only section.
pub const FALLBACK_SECTION_TITLE: &str = "Key Findings";

/// Title of the fallback section when thematic sections already exist.
pub const ADDITIONAL_SECTION_TITLE: &str = "Additional Findings";

/// Title of the fallback thesis.
pub const FALLBACK_THESIS_TITLE: &str = "Key Findings";

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILE: &str = "storyline.toml";

/// Suffix of manifest files written by the builder.
pub const MANIFEST_FILE_SUFFIX: &str = "story.json";
