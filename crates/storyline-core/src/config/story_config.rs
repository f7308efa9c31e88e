//! Top-level Storyline configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    AdapterConfig, ChartConfig, GroupingConfig, KpiConfig, NarrativeConfig,
    ObservabilityConfig, ThesisConfig,
};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::NarrativeMode;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`STORYLINE_*`)
/// 2. Project config (`storyline.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoryConfig {
    pub adapter: AdapterConfig,
    pub thesis: ThesisConfig,
    pub kpi: KpiConfig,
    pub grouping: GroupingConfig,
    pub charts: ChartConfig,
    pub narrative: NarrativeConfig,
    pub observability: ObservabilityConfig,
}

impl StoryConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `STORYLINE_*` overrides read through `lookup`.
    ///
    /// Takes a lookup function instead of reading the process environment
    /// directly so tests can drive it without touching global state.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("STORYLINE_NARRATIVE_MODE") {
            self.narrative.default_mode = NarrativeMode::from_str(&mode)?;
        }
        if let Some(level) = lookup("STORYLINE_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(v) = lookup("STORYLINE_MAX_SECTIONS") {
            self.grouping.max_sections = parse_env("STORYLINE_MAX_SECTIONS", &v)?;
        }
        if let Some(v) = lookup("STORYLINE_SMALL_CORPUS_SIZE") {
            self.grouping.small_corpus_size = parse_env("STORYLINE_SMALL_CORPUS_SIZE", &v)?;
        }
        if let Some(v) = lookup("STORYLINE_DEFAULT_CONFIDENCE") {
            self.adapter.default_confidence = parse_env("STORYLINE_DEFAULT_CONFIDENCE", &v)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("adapter.default_confidence", self.adapter.default_confidence),
            ("thesis.theme_dominance", self.thesis.theme_dominance),
            ("thesis.surprise_confidence", self.thesis.surprise_confidence),
            ("thesis.confidence_cap", self.thesis.confidence_cap),
            ("thesis.fallback_confidence", self.thesis.fallback_confidence),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        if self.thesis.max_supporting_insights == 0 || self.thesis.max_supporting_insights > 3 {
            return Err(ConfigError::ValidationFailed {
                field: "thesis.max_supporting_insights".to_string(),
                message: "must be between 1 and 3".to_string(),
            });
        }
        if self.kpi.global_limit == 0 || self.kpi.global_limit > constants::MAX_TOP_KPIS {
            return Err(ConfigError::ValidationFailed {
                field: "kpi.global_limit".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_TOP_KPIS),
            });
        }
        if self.kpi.section_limit == 0 || self.kpi.section_limit > constants::MAX_SECTION_KPIS {
            return Err(ConfigError::ValidationFailed {
                field: "kpi.section_limit".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_SECTION_KPIS),
            });
        }
        if self.grouping.max_sections == 0 || self.grouping.max_sections > constants::MAX_SECTIONS
        {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.max_sections".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_SECTIONS),
            });
        }
        if self.grouping.small_corpus_min_occurrences == 0
            || self.grouping.small_corpus_min_occurrences > self.grouping.min_occurrences
        {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.small_corpus_min_occurrences".to_string(),
                message: "must be at least 1 and no greater than grouping.min_occurrences"
                    .to_string(),
            });
        }
        if self.grouping.max_title_words == 0 || self.grouping.max_title_words > 3 {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.max_title_words".to_string(),
                message: "must be between 1 and 3".to_string(),
            });
        }
        if self.charts.pie_min_categories > self.charts.pie_max_categories {
            return Err(ConfigError::ValidationFailed {
                field: "charts.pie_min_categories".to_string(),
                message: "must not exceed charts.pie_max_categories".to_string(),
            });
        }
        if !(1..=2).contains(&self.narrative.quoted_kpis) {
            return Err(ConfigError::ValidationFailed {
                field: "narrative.quoted_kpis".to_string(),
                message: "must be 1 or 2".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("cannot parse '{raw}'"),
    })
}
