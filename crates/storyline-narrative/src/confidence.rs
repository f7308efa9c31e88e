//! Confidence verbalization.

/// Confidence level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "moderate",
            Self::Low => "low",
            Self::VeryLow => "very low",
        }
    }

    /// Caveat sentence for technical prose.
    pub fn caveat(&self) -> &'static str {
        match self {
            Self::High => "Upstream confidence is strong; the usual caveats on observational data still apply.",
            Self::Medium => "Treat the direction as reliable and the exact size as indicative.",
            Self::Low => "Evidence is thin; corroborate before acting on it.",
            Self::VeryLow => "Evidence is weak and should be treated as a lead, not a finding.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_by_threshold() {
        assert_eq!(ConfidenceLevel::from_score(0.95), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.8), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.5), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.3), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(0.1), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn words_carry_no_digits() {
        for level in [
            ConfidenceLevel::High,
            ConfidenceLevel::Medium,
            ConfidenceLevel::Low,
            ConfidenceLevel::VeryLow,
        ] {
            assert!(!level.as_str().chars().any(|c| c.is_ascii_digit()));
            assert!(!level.caveat().chars().any(|c| c.is_ascii_digit()));
        }
    }
}
