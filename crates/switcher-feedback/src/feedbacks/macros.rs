//! Macro system feedbacks.
//!
//! Macro options are numbered from one to match the device UI; internal
//! indices are zero-based.

use switcher_model::CapabilityModel;
use switcher_state::{MacroPlayerState, MacroRecorderState, StateSnapshot};

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::{DropdownChoice, OptionParam, OptionValues};
use crate::registry::FeedbackId;
use crate::schema;

use super::FeedbackSet;

const STYLE: StyleHint = StyleHint::new(Rgb::WHITE, Rgb::PALE_YELLOW);

fn macro_index(options: &OptionValues) -> Option<u32> {
    let number = options.int_value("macro")?;
    u32::try_from(number.checked_sub(1)?).ok()
}

fn state_option() -> OptionParam {
    let choices = vec![
        DropdownChoice::new("running", "Running"),
        DropdownChoice::new("waiting", "Waiting"),
        DropdownChoice::new("recording", "Recording"),
        DropdownChoice::new("used", "Used"),
    ];
    OptionParam::Dropdown {
        id: "state".to_string(),
        label: "State".to_string(),
        choices,
        default: "waiting".to_string(),
    }
}

fn state_matches(snapshot: &StateSnapshot, index: u32, state: &str) -> bool {
    let macros = &snapshot.macros;
    match state {
        "running" => {
            matches!(macros.player.state, MacroPlayerState::Running { macro_index } if macro_index == index)
        }
        "waiting" => {
            matches!(macros.player.state, MacroPlayerState::Waiting { macro_index } if macro_index == index)
        }
        "recording" => {
            matches!(macros.recorder, MacroRecorderState::Recording { macro_index } if macro_index == index)
        }
        "used" => macros
            .registered
            .get(&index)
            .map(|entry| entry.is_used)
            .unwrap_or(false),
        _ => false,
    }
}

fn macro_state(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Macro: State",
        "True while the selected macro is in the selected state",
        vec![schema::macro_option(model), state_option()],
        STYLE,
        |snapshot, options| {
            let Some(index) = macro_index(options) else {
                return false;
            };
            let Some(state) = options.choice_value("state") else {
                return false;
            };
            state_matches(snapshot, index, state)
        },
    )
}

fn macro_looping() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Macro: Looping",
        "True while macro playback looping matches the selected setting",
        vec![schema::checkbox("looping", "Looping", true)],
        STYLE,
        |snapshot, options| {
            let Some(looping) = options.bool_value("looping") else {
                return false;
            };
            snapshot.macros.player.looping == looping
        },
    )
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    if model.macros == 0 {
        return FeedbackSet::new();
    }

    vec![
        (FeedbackId::MacroState, macro_state(model)),
        (FeedbackId::MacroLooping, macro_looping()),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    fn definition(id: FeedbackId) -> FeedbackDefinition {
        feedbacks(&fixtures::model())
            .into_iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, definition)| definition)
            .unwrap()
    }

    fn state_options(number: i64, state: &str) -> OptionValues {
        let mut options = OptionValues::new();
        options.set_choice("macro", number.to_string());
        options.set_choice("state", state);
        options
    }

    #[test]
    fn test_running_tracks_player_index() {
        let definition = definition(FeedbackId::MacroState);
        // Fixture player runs macro index 6, i.e. macro number 7.
        let snapshot = fixtures::snapshot();

        assert!(definition.evaluate(&snapshot, &state_options(7, "running")));
        assert!(!definition.evaluate(&snapshot, &state_options(8, "running")));
        assert!(!definition.evaluate(&snapshot, &state_options(7, "waiting")));
    }

    #[test]
    fn test_recording_is_independent_of_player() {
        let definition = definition(FeedbackId::MacroState);
        // Fixture recorder records macro index 9, i.e. number 10.
        let snapshot = fixtures::snapshot();

        assert!(definition.evaluate(&snapshot, &state_options(10, "recording")));
        assert!(!definition.evaluate(&snapshot, &state_options(7, "recording")));
    }

    #[test]
    fn test_used_reads_registered_entry() {
        let definition = definition(FeedbackId::MacroState);
        let snapshot = fixtures::snapshot();

        assert!(definition.evaluate(&snapshot, &state_options(7, "used")));
        assert!(!definition.evaluate(&snapshot, &state_options(3, "used")));
    }

    #[test]
    fn test_macro_number_zero_is_malformed() {
        let definition = definition(FeedbackId::MacroState);
        let snapshot = fixtures::snapshot();
        assert!(!definition.evaluate(&snapshot, &state_options(0, "running")));
    }

    #[test]
    fn test_looping() {
        let definition = definition(FeedbackId::MacroLooping);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_bool("looping", true);
        assert!(definition.evaluate(&snapshot, &options));
        options.set_bool("looping", false);
        assert!(!definition.evaluate(&snapshot, &options));
    }
}
