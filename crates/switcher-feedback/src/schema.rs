//! Shared option parameter constructors.
//!
//! All enumerated choices are derived from the capability model alone, so
//! a registry's schema never depends on snapshot content.

use switcher_model::{AudioInput, CapabilityModel};
use switcher_state::{
    ArtPlacement, AudioMixOption, FadeToBlackStatus, KeyFrame, TransitionStyle,
};

use crate::compare::NumberComparator;
use crate::options::{DropdownChoice, OptionParam};
use crate::selection::MatchMethod;

/// Media-pool clips share the media player source choice list with stills;
/// their ids are offset by this amount.
pub const MEDIA_PLAYER_CLIP_OFFSET: i64 = 1000;

fn indexed_choices(count: usize, label_prefix: &str) -> Vec<DropdownChoice> {
    (0..count)
        .map(|index| DropdownChoice::new(index.to_string(), format!("{} {}", label_prefix, index + 1)))
        .collect()
}

fn dropdown(
    id: impl Into<String>,
    label: impl Into<String>,
    choices: Vec<DropdownChoice>,
    default: impl Into<String>,
) -> OptionParam {
    OptionParam::Dropdown {
        id: id.into(),
        label: label.into(),
        choices,
        default: default.into(),
    }
}

pub(crate) fn checkbox(
    id: impl Into<String>,
    label: impl Into<String>,
    default: bool,
) -> OptionParam {
    OptionParam::Checkbox {
        id: id.into(),
        label: label.into(),
        default,
    }
}

pub(crate) fn invert_option() -> OptionParam {
    checkbox("invert", "Invert", false)
}

pub(crate) fn stage_option(
    model: &CapabilityModel,
    id: impl Into<String>,
    default_index: u8,
) -> OptionParam {
    let default = default_index.min(model.stages.saturating_sub(1));
    dropdown(
        id,
        "Stage",
        indexed_choices(usize::from(model.stages), "Stage"),
        default.to_string(),
    )
}

pub(crate) fn source_option(
    model: &CapabilityModel,
    id: impl Into<String>,
    label: impl Into<String>,
) -> OptionParam {
    let choices = model
        .sources
        .iter()
        .map(|source| DropdownChoice::new(source.id.to_string(), source.label.clone()))
        .collect::<Vec<_>>();
    let default = choices.first().map(|choice| choice.id.clone()).unwrap_or_default();
    dropdown(id, label, choices, default)
}

pub(crate) fn upstream_keyer_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "keyer",
        "Key",
        indexed_choices(usize::from(model.keyers_per_stage), "Key"),
        "0",
    )
}

pub(crate) fn downstream_keyer_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "keyer",
        "Key",
        indexed_choices(usize::from(model.downstream_keyers), "Key"),
        "0",
    )
}

pub(crate) fn rate_option(id: impl Into<String>, label: impl Into<String>) -> OptionParam {
    OptionParam::Number {
        id: id.into(),
        label: label.into(),
        default: 25.0,
        min: 1.0,
        max: 250.0,
        step: 1.0,
    }
}

pub(crate) fn gain_option(label: impl Into<String>, min: f64, max: f64) -> OptionParam {
    OptionParam::Number {
        id: "gain".to_string(),
        label: label.into(),
        default: 0.0,
        min,
        max,
        step: 0.1,
    }
}

pub(crate) fn decimal_option(
    id: impl Into<String>,
    label: impl Into<String>,
    default: f64,
    min: f64,
    max: f64,
    step: f64,
) -> OptionParam {
    OptionParam::Number {
        id: id.into(),
        label: label.into(),
        default,
        min,
        max,
        step,
    }
}

pub(crate) fn comparator_option() -> OptionParam {
    let choices = NumberComparator::ALL
        .into_iter()
        .map(|comparator| DropdownChoice::new(comparator.id(), comparator.label()))
        .collect();
    dropdown("comparator", "Comparison", choices, NumberComparator::Equal.id())
}

pub(crate) fn match_method_option() -> OptionParam {
    let choices = MatchMethod::ALL
        .into_iter()
        .map(|method| DropdownChoice::new(method.id(), method.label()))
        .collect();
    dropdown("match_method", "Match method", choices, MatchMethod::Exact.id())
}

pub(crate) fn transition_style_option(no_sting: bool) -> OptionParam {
    let choices = TransitionStyle::ALL
        .into_iter()
        .filter(|style| !(no_sting && *style == TransitionStyle::Sting))
        .map(|style| DropdownChoice::new(style.id(), style.label()))
        .collect();
    dropdown("style", "Transition style", choices, TransitionStyle::Mix.id())
}

pub(crate) fn fade_to_black_state_option() -> OptionParam {
    let choices = FadeToBlackStatus::ALL
        .into_iter()
        .map(|status| DropdownChoice::new(status.id(), status.label()))
        .collect();
    dropdown("state", "State", choices, FadeToBlackStatus::FullyBlack.id())
}

pub(crate) fn key_frame_option() -> OptionParam {
    let choices = KeyFrame::ALL
        .into_iter()
        .map(|frame| DropdownChoice::new(frame.id(), frame.label()))
        .collect();
    dropdown("key_frame", "Key frame", choices, KeyFrame::A.id())
}

pub(crate) fn art_placement_option() -> OptionParam {
    let choices = ArtPlacement::ALL
        .into_iter()
        .map(|placement| DropdownChoice::new(placement.id(), placement.label()))
        .collect();
    dropdown("placement", "Placement", choices, ArtPlacement::Background.id())
}

pub(crate) fn mix_option_option() -> OptionParam {
    let choices = AudioMixOption::ALL
        .into_iter()
        .map(|option| DropdownChoice::new(option.id(), option.label()))
        .collect();
    dropdown("mix_option", "Mix option", choices, AudioMixOption::Off.id())
}

pub(crate) fn audio_input_option(inputs: &[AudioInput]) -> OptionParam {
    let choices = inputs
        .iter()
        .map(|input| DropdownChoice::new(input.id.to_string(), input.label.clone()))
        .collect::<Vec<_>>();
    let default = choices.first().map(|choice| choice.id.clone()).unwrap_or_default();
    dropdown("input", "Audio input", choices, default)
}

pub(crate) fn strip_source_option() -> OptionParam {
    let choices = vec![
        DropdownChoice::new("-65280", "Stereo"),
        DropdownChoice::new("-256", "Mono (Ch1)"),
        DropdownChoice::new("-255", "Mono (Ch2)"),
    ];
    dropdown("source", "Audio source", choices, "-65280")
}

/// The compositor picker is only offered on variants carrying more than
/// one; single-compositor devices address it implicitly.
pub(crate) fn super_source_option(model: &CapabilityModel) -> Option<OptionParam> {
    (model.super_sources > 1).then(|| {
        dropdown(
            "super_source",
            "Supersource",
            indexed_choices(usize::from(model.super_sources), "Supersource"),
            "0",
        )
    })
}

pub(crate) fn super_source_box_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "box",
        "Box",
        indexed_choices(usize::from(model.super_source_boxes), "Box"),
        "0",
    )
}

pub(crate) fn aux_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "aux",
        "Aux bus",
        indexed_choices(usize::from(model.aux_buses), "Aux"),
        "0",
    )
}

pub(crate) fn multiviewer_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "multiviewer",
        "Multiviewer",
        indexed_choices(usize::from(model.multiviewers), "Multiviewer"),
        "0",
    )
}

pub(crate) fn multiviewer_window_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "window",
        "Window",
        indexed_choices(usize::from(model.multiviewer_windows), "Window"),
        "0",
    )
}

pub(crate) fn media_player_option(model: &CapabilityModel) -> OptionParam {
    dropdown(
        "media_player",
        "Media player",
        indexed_choices(usize::from(model.media_players), "Media player"),
        "0",
    )
}

pub(crate) fn media_source_option(model: &CapabilityModel) -> OptionParam {
    let mut choices = Vec::new();
    for still in 0..u16::from(model.media_stills) {
        choices.push(DropdownChoice::new(
            still.to_string(),
            format!("Still {}", still + 1),
        ));
    }
    for clip in 0..u16::from(model.media_clips) {
        choices.push(DropdownChoice::new(
            (i64::from(clip) + MEDIA_PLAYER_CLIP_OFFSET).to_string(),
            format!("Clip {}", clip + 1),
        ));
    }
    let default = choices.first().map(|choice| choice.id.clone()).unwrap_or_default();
    dropdown("source", "Source", choices, default)
}

pub(crate) fn macro_option(model: &CapabilityModel) -> OptionParam {
    let choices = (1..=model.macros)
        .map(|number| DropdownChoice::new(number.to_string(), format!("Macro {number}")))
        .collect();
    dropdown("macro", "Macro", choices, "1")
}
