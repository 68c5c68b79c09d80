use crate::types::WeightSummary;

/// Slack allowed before a load is reported as over its payload limit.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A weight the caller actually knows. Non-finite or negative values are unknown.
pub(super) fn known_weight(weight: Option<f64>) -> Option<f64> {
    weight.filter(|w| w.is_finite() && *w >= 0.0)
}

/// A usable payload limit. Zero or negative limits are treated as unknown.
pub(super) fn known_limit(limit: Option<f64>) -> Option<f64> {
    limit.filter(|l| l.is_finite() && *l > 0.0)
}

impl WeightSummary {
    /// Summary for a load where nothing could be placed.
    pub(super) fn empty(per_unit: Option<f64>, max_payload: Option<f64>) -> Self {
        Self {
            per_unit,
            max_payload,
            total: None,
            utilization_pct: None,
            exceeds_max: false,
        }
    }

    /// Summary for `count` pieces of `per_unit` weight each.
    pub(super) fn for_load(per_unit: Option<f64>, count: u64, max_payload: Option<f64>) -> Self {
        let Some(unit_weight) = per_unit else {
            return Self::empty(None, max_payload);
        };

        let total = unit_weight * count as f64;
        let (utilization_pct, exceeds_max) = match max_payload {
            Some(max) => (
                Some((total / max) * 100.0),
                total > max + WEIGHT_TOLERANCE,
            ),
            None => (None, false),
        };

        Self {
            per_unit,
            max_payload,
            total: Some(total),
            utilization_pct,
            exceeds_max,
        }
    }
}
