//! Declarative option schema and host-supplied option values.
//!
//! Option values arrive from the host untyped (JSON-shaped) and are never
//! trusted: every getter coerces where reasonable and returns `None` for
//! anything malformed, which evaluation degrades to a non-match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selectable choice of a dropdown parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownChoice {
    /// Stable value id.
    pub id: String,

    /// Display name.
    pub label: String,
}

impl DropdownChoice {
    /// Create a new choice.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One typed parameter of a feedback's option schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionParam {
    /// A boolean flag.
    Checkbox {
        id: String,
        label: String,
        default: bool,
    },

    /// A ranged decimal.
    Number {
        id: String,
        label: String,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    },

    /// An enumerated choice.
    Dropdown {
        id: String,
        label: String,
        choices: Vec<DropdownChoice>,
        default: String,
    },
}

impl OptionParam {
    /// The parameter's option id.
    pub fn id(&self) -> &str {
        match self {
            Self::Checkbox { id, .. } | Self::Number { id, .. } | Self::Dropdown { id, .. } => id,
        }
    }
}

/// One untyped-at-the-boundary option value.
///
/// Serde-untagged so raw host JSON (`true`, `3`, `2.5`, `"wipe"`) lands in
/// the right variant on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Number(f64),
    Choice(String),
}

/// The option values supplied for one feedback instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValues {
    values: BTreeMap<String, OptionValue>,
}

impl OptionValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value.
    pub fn insert(&mut self, id: impl Into<String>, value: OptionValue) {
        self.values.insert(id.into(), value);
    }

    /// Insert a boolean.
    pub fn set_bool(&mut self, id: impl Into<String>, value: bool) {
        self.insert(id, OptionValue::Bool(value));
    }

    /// Insert an integer.
    pub fn set_int(&mut self, id: impl Into<String>, value: i64) {
        self.insert(id, OptionValue::Int(value));
    }

    /// Insert a decimal.
    pub fn set_number(&mut self, id: impl Into<String>, value: f64) {
        self.insert(id, OptionValue::Number(value));
    }

    /// Insert a choice id.
    pub fn set_choice(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.insert(id, OptionValue::Choice(value.into()));
    }

    /// The raw value for `id`, if present.
    pub fn get(&self, id: &str) -> Option<&OptionValue> {
        self.values.get(id)
    }

    /// The value for `id` as a boolean.
    pub fn bool_value(&self, id: &str) -> Option<bool> {
        match self.get(id)? {
            OptionValue::Bool(value) => Some(*value),
            OptionValue::Int(0) => Some(false),
            OptionValue::Int(1) => Some(true),
            _ => None,
        }
    }

    /// The value for `id` as an integer, coercing integral decimals and
    /// numeric strings.
    pub fn int_value(&self, id: &str) -> Option<i64> {
        match self.get(id)? {
            OptionValue::Int(value) => Some(*value),
            OptionValue::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            OptionValue::Choice(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// The value for `id` as a non-negative index.
    pub fn index_value(&self, id: &str) -> Option<usize> {
        usize::try_from(self.int_value(id)?).ok()
    }

    /// The value for `id` as a decimal, coercing integers and numeric
    /// strings.
    pub fn number_value(&self, id: &str) -> Option<f64> {
        match self.get(id)? {
            OptionValue::Number(value) => Some(*value),
            OptionValue::Int(value) => Some(*value as f64),
            OptionValue::Choice(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// The value for `id` as a choice id.
    pub fn choice_value(&self, id: &str) -> Option<&str> {
        match self.get(id)? {
            OptionValue::Choice(value) => Some(value),
            _ => None,
        }
    }
}

impl FromIterator<(String, OptionValue)> for OptionValues {
    fn from_iter<T: IntoIterator<Item = (String, OptionValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
