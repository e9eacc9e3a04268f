//! Streaming and recording status feedbacks.

use switcher_model::CapabilityModel;
use switcher_state::{RecordingStatus, StreamingStatus};

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::{DropdownChoice, OptionParam};
use crate::registry::FeedbackId;

use super::FeedbackSet;

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::GREEN);

fn streaming_state_option() -> OptionParam {
    let choices = StreamingStatus::ALL
        .into_iter()
        .map(|status| DropdownChoice::new(status.id(), status.label()))
        .collect();
    OptionParam::Dropdown {
        id: "state".to_string(),
        label: "State".to_string(),
        choices,
        default: StreamingStatus::Streaming.id().to_string(),
    }
}

fn recording_state_option() -> OptionParam {
    let choices = RecordingStatus::ALL
        .into_iter()
        .map(|status| DropdownChoice::new(status.id(), status.label()))
        .collect();
    OptionParam::Dropdown {
        id: "state".to_string(),
        label: "State".to_string(),
        choices,
        default: RecordingStatus::Recording.id().to_string(),
    }
}

fn streaming_status() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Streaming: Status",
        "True while the stream is in the selected state",
        vec![streaming_state_option()],
        STYLE,
        |snapshot, options| {
            let Some(streaming) = snapshot.streaming.as_ref() else {
                return false;
            };
            options.choice_value("state").and_then(StreamingStatus::parse)
                == Some(streaming.status)
        },
    )
    .with_learn(|snapshot, options| {
        let streaming = snapshot.streaming.as_ref()?;
        let mut learned = options.clone();
        learned.set_choice("state", streaming.status.id());
        Some(learned)
    })
}

fn recording_status() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Recording: Status",
        "True while the recorder is in the selected state",
        vec![recording_state_option()],
        STYLE,
        |snapshot, options| {
            let Some(recording) = snapshot.recording.as_ref() else {
                return false;
            };
            options.choice_value("state").and_then(RecordingStatus::parse)
                == Some(recording.status)
        },
    )
    .with_learn(|snapshot, options| {
        let recording = snapshot.recording.as_ref()?;
        let mut learned = options.clone();
        learned.set_choice("state", recording.status.id());
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    let mut set = FeedbackSet::new();
    if model.streaming {
        set.push((FeedbackId::StreamingStatus, streaming_status()));
    }
    if model.recording {
        set.push((FeedbackId::RecordingStatus, recording_status()));
    }
    set
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::options::OptionValues;

    fn definition(id: FeedbackId) -> FeedbackDefinition {
        feedbacks(&fixtures::model())
            .into_iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, definition)| definition)
            .unwrap()
    }

    #[test]
    fn test_streaming_status() {
        let definition = definition(FeedbackId::StreamingStatus);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("state", "streaming");
        assert!(definition.evaluate(&snapshot, &options));
        options.set_choice("state", "idle");
        assert!(!definition.evaluate(&snapshot, &options));
    }

    #[test]
    fn test_recording_learn() {
        let definition = definition(FeedbackId::RecordingStatus);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("state", "recording");
        assert!(!definition.evaluate(&snapshot, &options));

        let learned = definition.learn(&snapshot, &options).unwrap();
        assert_eq!(learned.choice_value("state"), Some("idle"));
        assert!(definition.evaluate(&snapshot, &learned));
    }

    #[test]
    fn test_unreported_status_is_false() {
        let definition = definition(FeedbackId::StreamingStatus);
        let mut snapshot = fixtures::snapshot();
        snapshot.streaming = None;

        let mut options = OptionValues::new();
        options.set_choice("state", "streaming");
        assert!(!definition.evaluate(&snapshot, &options));
        assert!(definition.learn(&snapshot, &options).is_none());
    }
}
