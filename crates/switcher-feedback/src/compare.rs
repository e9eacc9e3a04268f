//! Quantized numeric comparison helpers.

use serde::{Deserialize, Serialize};

/// Compare a user-facing decimal target against a device-domain integer.
///
/// The target is scaled into the device's integer domain by `scale`. When
/// `quantum` is nonzero the device value is first rounded to the nearest
/// multiple of it (ties away from zero), absorbing the encoding jitter the
/// option's precision cannot express. A missing target never matches.
pub fn compare_as_int(target: Option<f64>, actual: i64, scale: i64, quantum: i64) -> bool {
    let Some(target) = target else {
        return false;
    };

    let target_scaled = (target * scale as f64).round() as i64;
    let actual = if quantum != 0 {
        (actual as f64 / quantum as f64).round() as i64 * quantum
    } else {
        actual
    };

    target_scaled == actual
}

/// Ordered comparison applied to already-scaled values.
///
/// No implicit tolerance: equality is exact, any rounding is the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberComparator {
    Equal,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl NumberComparator {
    /// All comparators.
    pub const ALL: [NumberComparator; 5] = [
        Self::Equal,
        Self::Less,
        Self::Greater,
        Self::LessEqual,
        Self::GreaterEqual,
    ];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::Less => "lt",
            Self::Greater => "gt",
            Self::LessEqual => "lte",
            Self::GreaterEqual => "gte",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::Less => "Less than",
            Self::Greater => "Greater than",
            Self::LessEqual => "Less than or equal",
            Self::GreaterEqual => "Greater than or equal",
        }
    }

    /// Parse a string id back into a comparator.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|comparator| comparator.id() == id)
    }

    /// Whether `actual` stands in this relation to `target`.
    pub fn compare(self, target: f64, actual: f64) -> bool {
        match self {
            Self::Equal => actual == target,
            Self::Less => actual < target,
            Self::Greater => actual > target,
            Self::LessEqual => actual <= target,
            Self::GreaterEqual => actual >= target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_as_int_rounds_down_within_quantum() {
        // 13 rounds to 10; 1 x 10 = 10.
        assert!(compare_as_int(Some(1.0), 13, 10, 10));
    }

    #[test]
    fn test_compare_as_int_rounds_up_past_quantum() {
        // 16 rounds to 20, which is not 10.
        assert!(!compare_as_int(Some(1.0), 16, 10, 10));
    }

    #[test]
    fn test_compare_as_int_ties_round_away_from_zero() {
        assert!(compare_as_int(Some(2.0), 15, 10, 10));
        assert!(compare_as_int(Some(-2.0), -15, 10, 10));
    }

    #[test]
    fn test_compare_as_int_without_quantum_is_exact() {
        assert!(compare_as_int(Some(25.5), 255, 10, 0));
        assert!(!compare_as_int(Some(25.5), 254, 10, 0));
    }

    #[test]
    fn test_compare_as_int_missing_target_never_matches() {
        assert!(!compare_as_int(None, 0, 10, 0));
    }

    #[test]
    fn test_comparator_orientation() {
        assert!(NumberComparator::Equal.compare(1.0, 1.0));
        assert!(NumberComparator::Less.compare(1.0, 0.5));
        assert!(!NumberComparator::Less.compare(1.0, 1.0));
        assert!(NumberComparator::Greater.compare(1.0, 1.5));
        assert!(NumberComparator::LessEqual.compare(1.0, 1.0));
        assert!(NumberComparator::GreaterEqual.compare(1.0, 1.0));
    }

    #[test]
    fn test_comparator_id_round_trip() {
        for comparator in NumberComparator::ALL {
            assert_eq!(NumberComparator::parse(comparator.id()), Some(comparator));
        }
    }
}
