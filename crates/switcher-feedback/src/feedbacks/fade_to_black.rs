//! Fade-to-black feedbacks.

use switcher_model::CapabilityModel;
use switcher_state::FadeToBlackStatus;

use crate::compare::compare_as_int;
use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::registry::FeedbackId;
use crate::schema;

use super::{stage_for, FeedbackSet};

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::YELLOW);

fn state(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Fade to black: State",
        "True while the selected stage's fade-to-black is in the selected state",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::fade_to_black_state_option(),
        ],
        STYLE,
        |snapshot, options| {
            let Some(ftb) = stage_for(snapshot, options, "stage")
                .and_then(|stage| stage.fade_to_black.as_ref())
            else {
                return false;
            };
            let Some(status) = options.choice_value("state").and_then(FadeToBlackStatus::parse)
            else {
                return false;
            };
            ftb.status == status
        },
    )
    .with_learn(|snapshot, options| {
        let ftb = stage_for(snapshot, options, "stage")?.fade_to_black.as_ref()?;
        let mut learned = options.clone();
        learned.set_choice("state", ftb.status.id());
        Some(learned)
    })
}

fn rate(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Fade to black: Rate",
        "True while the selected stage's fade-to-black rate matches",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::rate_option("rate", "Rate"),
        ],
        STYLE,
        |snapshot, options| {
            let Some(ftb) = stage_for(snapshot, options, "stage")
                .and_then(|stage| stage.fade_to_black.as_ref())
            else {
                return false;
            };
            compare_as_int(options.number_value("rate"), i64::from(ftb.rate), 1, 0)
        },
    )
    .with_learn(|snapshot, options| {
        let ftb = stage_for(snapshot, options, "stage")?.fade_to_black.as_ref()?;
        let mut learned = options.clone();
        learned.set_int("rate", i64::from(ftb.rate));
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    vec![
        (FeedbackId::FadeToBlackState, state(model)),
        (FeedbackId::FadeToBlackRate, rate(model)),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::options::OptionValues;
    use switcher_state::FadeToBlackState;

    fn definition(id: FeedbackId) -> FeedbackDefinition {
        feedbacks(&fixtures::model())
            .into_iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, definition)| definition)
            .unwrap()
    }

    #[test]
    fn test_state_matches_reported_status() {
        let definition = definition(FeedbackId::FadeToBlackState);
        let mut snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("stage", "0");
        options.set_choice("state", "off");
        assert!(definition.evaluate(&snapshot, &options));

        snapshot.stages[0].fade_to_black = Some(FadeToBlackState {
            status: FadeToBlackStatus::FullyBlack,
            rate: 30,
        });
        assert!(!definition.evaluate(&snapshot, &options));
        options.set_choice("state", "on");
        assert!(definition.evaluate(&snapshot, &options));
    }

    #[test]
    fn test_unreported_ftb_is_false_and_unlearnable() {
        let definition = definition(FeedbackId::FadeToBlackState);
        let mut snapshot = fixtures::snapshot();
        snapshot.stages[0].fade_to_black = None;

        let mut options = OptionValues::new();
        options.set_choice("stage", "0");
        options.set_choice("state", "off");
        assert!(!definition.evaluate(&snapshot, &options));
        assert!(definition.learn(&snapshot, &options).is_none());
    }

    #[test]
    fn test_rate_learn() {
        let definition = definition(FeedbackId::FadeToBlackRate);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("stage", "0");
        options.set_number("rate", 25.0);
        assert!(!definition.evaluate(&snapshot, &options));

        let learned = definition.learn(&snapshot, &options).unwrap();
        assert_eq!(learned.int_value("rate"), Some(30));
        assert!(definition.evaluate(&snapshot, &learned));
    }
}
