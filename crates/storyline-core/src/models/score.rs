use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit-interval scalar clamped to [0.0, 1.0].
///
/// Used for confidence, business value and actionability. Clamping happens
/// on construction and on deserialization, so no path can produce a value
/// outside the interval. NaN collapses to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub const MIN: Score = Score(0.0);
    pub const MAX: Score = Score(1.0);

    /// Create a new Score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Mean of a set of scores. Empty input yields 0.0.
    pub fn mean(scores: impl IntoIterator<Item = Score>) -> Self {
        let (sum, n) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.0, n + 1));
        if n == 0 {
            Self(0.0)
        } else {
            Self::new(sum / n as f64)
        }
    }

    /// Cap the score at `ceiling`.
    pub fn capped(self, ceiling: f64) -> Self {
        Self::new(self.0.min(ceiling))
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}
