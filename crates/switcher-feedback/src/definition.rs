//! The feedback definition: schema, evaluate, learn, presentation hint.

use std::fmt;

use serde::{Deserialize, Serialize};

use switcher_state::StateSnapshot;

use crate::options::{OptionParam, OptionValues};

/// Evaluation function: total over the declared option domain.
pub type EvaluateFn = Box<dyn Fn(&StateSnapshot, &OptionValues) -> bool + Send + Sync>;

/// Reverse-inference function.
///
/// Returns the full learned option set, or `None` when the snapshot lacks
/// the needed sub-state. Never a partial fill.
pub type LearnFn = Box<dyn Fn(&StateSnapshot, &OptionValues) -> Option<OptionValues> + Send + Sync>;

/// An RGB color for presentation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const PALE_YELLOW: Rgb = Rgb::new(238, 238, 0);

    /// Create a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Declarative styling the host applies while a feedback holds true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHint {
    /// Foreground color.
    pub color: Rgb,

    /// Background color.
    pub background: Rgb,
}

impl StyleHint {
    /// Create a hint from foreground and background colors.
    pub const fn new(color: Rgb, background: Rgb) -> Self {
        Self { color, background }
    }
}

/// One feedback: option schema plus evaluate, optional learn, and a style
/// hint.
pub struct FeedbackDefinition {
    /// Display name.
    pub label: String,

    /// Longer description for the host UI.
    pub description: String,

    /// Ordered option schema.
    pub options: Vec<OptionParam>,

    /// Presentation hint.
    pub style: StyleHint,

    evaluate: EvaluateFn,
    learn: Option<LearnFn>,
}

impl FeedbackDefinition {
    /// Create a definition without a learn function.
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        options: Vec<OptionParam>,
        style: StyleHint,
        evaluate: impl Fn(&StateSnapshot, &OptionValues) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            options,
            style,
            evaluate: Box::new(evaluate),
            learn: None,
        }
    }

    /// Attach a learn function.
    pub fn with_learn(
        mut self,
        learn: impl Fn(&StateSnapshot, &OptionValues) -> Option<OptionValues> + Send + Sync + 'static,
    ) -> Self {
        self.learn = Some(Box::new(learn));
        self
    }

    /// Evaluate against the given snapshot and options.
    pub fn evaluate(&self, snapshot: &StateSnapshot, options: &OptionValues) -> bool {
        (self.evaluate)(snapshot, options)
    }

    /// Whether this feedback supports learning.
    pub fn supports_learn(&self) -> bool {
        self.learn.is_some()
    }

    /// Learn option values from the current snapshot.
    ///
    /// `None` means unsupported: either this feedback has no learn
    /// function, or the snapshot lacks the needed sub-state.
    pub fn learn(&self, snapshot: &StateSnapshot, options: &OptionValues) -> Option<OptionValues> {
        (self.learn.as_ref()?)(snapshot, options)
    }
}

impl fmt::Debug for FeedbackDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackDefinition")
            .field("label", &self.label)
            .field("options", &self.options.len())
            .field("supports_learn", &self.supports_learn())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_absent_by_default() {
        let definition = FeedbackDefinition::new(
            "Test",
            "",
            Vec::new(),
            StyleHint::new(Rgb::WHITE, Rgb::RED),
            |_, _| true,
        );
        assert!(!definition.supports_learn());
        assert!(definition
            .learn(&StateSnapshot::default(), &OptionValues::new())
            .is_none());
    }

    #[test]
    fn test_with_learn_round_trips_options() {
        let definition = FeedbackDefinition::new(
            "Test",
            "",
            Vec::new(),
            StyleHint::new(Rgb::WHITE, Rgb::RED),
            |_, options| options.bool_value("flag").unwrap_or(false),
        )
        .with_learn(|_, options| {
            let mut learned = options.clone();
            learned.set_bool("flag", true);
            Some(learned)
        });

        let snapshot = StateSnapshot::default();
        let learned = definition.learn(&snapshot, &OptionValues::new()).unwrap();
        assert!(definition.evaluate(&snapshot, &learned));
    }
}
