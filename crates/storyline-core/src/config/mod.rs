//! Configuration for every pipeline stage, with compiled defaults and
//! layered loading.

mod adapter_config;
mod chart_config;
pub mod defaults;
mod grouping_config;
mod kpi_config;
mod narrative_config;
mod observability_config;
mod story_config;
mod thesis_config;

pub use adapter_config::AdapterConfig;
pub use chart_config::ChartConfig;
pub use grouping_config::GroupingConfig;
pub use kpi_config::KpiConfig;
pub use narrative_config::NarrativeConfig;
pub use observability_config::ObservabilityConfig;
pub use story_config::StoryConfig;
pub use thesis_config::ThesisConfig;
