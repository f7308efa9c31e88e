//! KPI rank score.

use storyline_core::models::KpiKind;

pub const KIND_WEIGHT: f64 = 0.4;
pub const BUSINESS_VALUE_WEIGHT: f64 = 0.3;
pub const CONFIDENCE_WEIGHT: f64 = 0.2;
pub const MAGNITUDE_WEIGHT: f64 = 0.1;

/// Saturating bonus in [0, 1) that grows with |value|.
///
/// `l / (1 + l)` with `l = log10(1 + |value|)`: 23 → ~0.58, 4.2M → ~0.87.
pub fn magnitude_bonus(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let l = (1.0 + value.abs()).log10();
    l / (1.0 + l)
}

/// Weighted rank score of a KPI candidate.
pub fn rank_score(kind: KpiKind, business_value: f64, confidence: f64, value: f64) -> f64 {
    KIND_WEIGHT * kind.weight()
        + BUSINESS_VALUE_WEIGHT * business_value
        + CONFIDENCE_WEIGHT * confidence
        + MAGNITUDE_WEIGHT * magnitude_bonus(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_is_monotone_and_saturating() {
        let values = [0.0, 1.0, 23.0, 4_200.0, 4_200_000.0, 1e15];
        let bonuses: Vec<f64> = values.iter().map(|v| magnitude_bonus(*v)).collect();
        assert!(bonuses.windows(2).all(|w| w[0] < w[1]));
        assert!(bonuses.iter().all(|b| (0.0..1.0).contains(b)));
        assert_eq!(magnitude_bonus(-23.0), magnitude_bonus(23.0));
    }

    #[test]
    fn kind_dominates_magnitude() {
        let headline = rank_score(KpiKind::Headline, 0.9, 0.7, 1.0);
        let count = rank_score(KpiKind::Count, 0.9, 0.7, 1e12);
        assert!(headline > count);
    }
}
