use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::NarrativeMode;

/// Narrative synthesis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Mode used when the caller does not ask for one.
    pub default_mode: NarrativeMode,
    pub max_key_findings: usize,
    /// How many KPI values the summary quotes (1 or 2).
    pub quoted_kpis: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            default_mode: NarrativeMode::default(),
            max_key_findings: defaults::DEFAULT_MAX_KEY_FINDINGS,
            quoted_kpis: defaults::DEFAULT_QUOTED_KPIS,
        }
    }
}
