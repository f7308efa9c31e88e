use serde::{Deserialize, Serialize};

use super::defaults;

/// Insight adapter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Confidence assigned to records that arrive without one.
    pub default_confidence: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_confidence: defaults::DEFAULT_CONFIDENCE,
        }
    }
}
