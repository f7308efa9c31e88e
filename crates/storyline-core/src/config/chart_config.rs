use serde::{Deserialize, Serialize};

use super::defaults;

/// Chart selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub pie_min_categories: usize,
    pub pie_max_categories: usize,
    /// Above this many categories comparisons switch to horizontal bars.
    pub horizontal_category_limit: usize,
    /// Labels longer than this switch comparisons to horizontal bars.
    pub horizontal_label_len: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            pie_min_categories: defaults::DEFAULT_PIE_MIN_CATEGORIES,
            pie_max_categories: defaults::DEFAULT_PIE_MAX_CATEGORIES,
            horizontal_category_limit: defaults::DEFAULT_HORIZONTAL_CATEGORY_LIMIT,
            horizontal_label_len: defaults::DEFAULT_HORIZONTAL_LABEL_LEN,
        }
    }
}
