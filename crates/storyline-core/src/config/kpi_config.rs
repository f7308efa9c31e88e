use serde::{Deserialize, Serialize};

use super::defaults;

/// KPI extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    pub global_limit: usize,
    pub section_limit: usize,
    /// Plain integers need at least this many digits to count as magnitudes.
    pub magnitude_min_digits: usize,
}

impl KpiConfig {
    /// Story-level KPI limit for a corpus of `insight_count` insights.
    ///
    /// A single insight is one finding, so it headlines at most one figure.
    pub fn top_limit(&self, insight_count: usize) -> usize {
        if insight_count <= 1 {
            self.global_limit.min(1)
        } else {
            self.global_limit
        }
    }
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            global_limit: defaults::DEFAULT_GLOBAL_KPI_LIMIT,
            section_limit: defaults::DEFAULT_SECTION_KPI_LIMIT,
            magnitude_min_digits: defaults::DEFAULT_MAGNITUDE_MIN_DIGITS,
        }
    }
}
