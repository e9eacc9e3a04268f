//! Transition selection calculation and matching.
//!
//! A selection is a set of layer ids: 0 is the background layer, 1..=N the
//! upstream keyers of the stage. Match modes compare the expected set
//! computed from option flags against the device-reported current set.
//! Exact matching is order-independent set equality; the order the device
//! lists the ids in carries no meaning.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::options::OptionValues;

/// Derive the expected selection set from per-layer option flags.
///
/// Reads the `background` flag and `key1`..`keyN` flags for the stage's
/// keyer count; unset or malformed flags count as excluded.
pub fn calculate_transition_selection(keyer_count: u8, options: &OptionValues) -> BTreeSet<u8> {
    let mut selection = BTreeSet::new();

    if options.bool_value("background").unwrap_or(false) {
        selection.insert(0);
    }

    for keyer in 1..=keyer_count {
        if options.bool_value(&format!("key{keyer}")).unwrap_or(false) {
            selection.insert(keyer);
        }
    }

    selection
}

/// How an expected selection set is held against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMethod {
    /// Same members, regardless of reported order.
    Exact,

    /// Every expected id is present.
    Contains,

    /// No expected id is present.
    NotContain,
}

impl MatchMethod {
    /// All methods.
    pub const ALL: [MatchMethod; 3] = [Self::Exact, Self::Contains, Self::NotContain];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Contains => "contains",
            Self::NotContain => "not-contain",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::Contains => "Contains",
            Self::NotContain => "Does not contain",
        }
    }

    /// Parse a string id back into a method.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.id() == id)
    }

    /// Whether `current` satisfies this method for `expected`.
    pub fn matches(self, expected: &BTreeSet<u8>, current: &BTreeSet<u8>) -> bool {
        match self {
            Self::Exact => expected == current,
            Self::Contains => expected.is_subset(current),
            Self::NotContain => expected.is_disjoint(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(background: bool, keys: &[bool]) -> OptionValues {
        let mut options = OptionValues::new();
        options.set_bool("background", background);
        for (index, &key) in keys.iter().enumerate() {
            options.set_bool(format!("key{}", index + 1), key);
        }
        options
    }

    #[test]
    fn test_selection_includes_flagged_layers() {
        let selection = calculate_transition_selection(2, &options(true, &[true, false]));
        assert_eq!(selection, BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_selection_ignores_keyers_beyond_count() {
        // key2 is flagged but the stage only has one keyer.
        let selection = calculate_transition_selection(1, &options(false, &[true, true]));
        assert_eq!(selection, BTreeSet::from([1]));
    }

    #[test]
    fn test_exact_match_is_order_independent() {
        let expected = calculate_transition_selection(2, &options(true, &[true, false]));
        // Device reported the same members in a different order.
        let current: BTreeSet<u8> = [1, 0].into_iter().collect();
        assert!(MatchMethod::Exact.matches(&expected, &current));
    }

    #[test]
    fn test_exact_match_rejects_extra_members() {
        let expected = BTreeSet::from([0, 1]);
        let current = BTreeSet::from([0, 1, 2]);
        assert!(!MatchMethod::Exact.matches(&expected, &current));
    }

    #[test]
    fn test_contains_and_not_contain() {
        let expected = BTreeSet::from([1]);
        let current = BTreeSet::from([0, 1]);
        assert!(MatchMethod::Contains.matches(&expected, &current));
        assert!(!MatchMethod::NotContain.matches(&expected, &current));

        let disjoint = BTreeSet::from([2]);
        assert!(MatchMethod::NotContain.matches(&disjoint, &current));
    }

    #[test]
    fn test_method_id_round_trip() {
        for method in MatchMethod::ALL {
            assert_eq!(MatchMethod::parse(method.id()), Some(method));
        }
    }
}
