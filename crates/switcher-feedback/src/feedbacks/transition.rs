//! Transition feedbacks: style, selection, rate, in-progress.

use std::collections::BTreeSet;

use switcher_model::CapabilityModel;
use switcher_state::TransitionStyle;

use crate::compare::compare_as_int;
use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::registry::FeedbackId;
use crate::schema;
use crate::selection::{calculate_transition_selection, MatchMethod};

use super::{stage_for, FeedbackSet};

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::YELLOW);

fn style(model: &CapabilityModel) -> FeedbackDefinition {
    // Devices without a media pool for clips cannot run sting transitions.
    let no_sting = model.media_clips == 0;
    FeedbackDefinition::new(
        "Transition: Style",
        "True while the selected stage has the selected next-transition style",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::transition_style_option(no_sting),
        ],
        STYLE,
        |snapshot, options| {
            let Some(stage) = stage_for(snapshot, options, "stage") else {
                return false;
            };
            let Some(style) = options.choice_value("style").and_then(TransitionStyle::parse)
            else {
                return false;
            };
            stage.transition.style == style
        },
    )
    .with_learn(|snapshot, options| {
        let stage = stage_for(snapshot, options, "stage")?;
        let mut learned = options.clone();
        learned.set_choice("style", stage.transition.style.id());
        Some(learned)
    })
}

fn selection(model: &CapabilityModel) -> FeedbackDefinition {
    let keyer_count = model.keyers_per_stage;

    let mut options = vec![
        schema::stage_option(model, "stage", 0),
        schema::match_method_option(),
        schema::checkbox("background", "Background", true),
    ];
    for keyer in 1..=keyer_count {
        options.push(schema::checkbox(format!("key{keyer}"), format!("Key {keyer}"), false));
    }

    FeedbackDefinition::new(
        "Transition: Selection",
        "True while the stage's next-transition selection satisfies the chosen layers",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(stage) = stage_for(snapshot, options, "stage") else {
                return false;
            };
            let Some(method) = options
                .choice_value("match_method")
                .and_then(MatchMethod::parse)
            else {
                return false;
            };
            let expected = calculate_transition_selection(keyer_count, options);
            let current: BTreeSet<u8> = stage.transition.selection.iter().copied().collect();
            method.matches(&expected, &current)
        },
    )
}

fn rate(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Transition: Rate",
        "True while the selected style's transition rate matches",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::transition_style_option(true),
            schema::rate_option("rate", "Rate"),
        ],
        STYLE,
        |snapshot, options| {
            let Some(stage) = stage_for(snapshot, options, "stage") else {
                return false;
            };
            let Some(style) = options.choice_value("style").and_then(TransitionStyle::parse)
            else {
                return false;
            };
            let Some(rate) = stage.transition.rates.rate(style) else {
                return false;
            };
            compare_as_int(options.number_value("rate"), i64::from(rate), 1, 0)
        },
    )
    .with_learn(|snapshot, options| {
        let stage = stage_for(snapshot, options, "stage")?;
        let style = options.choice_value("style").and_then(TransitionStyle::parse)?;
        let rate = stage.transition.rates.rate(style)?;
        let mut learned = options.clone();
        learned.set_int("rate", i64::from(rate));
        Some(learned)
    })
}

fn in_transition(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Transition: In progress",
        "True while the selected stage is mid-transition",
        vec![schema::stage_option(model, "stage", 0)],
        STYLE,
        |snapshot, options| {
            stage_for(snapshot, options, "stage")
                .map(|stage| stage.transition.in_transition)
                .unwrap_or(false)
        },
    )
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    vec![
        (FeedbackId::TransitionStyle, style(model)),
        (FeedbackId::TransitionSelection, selection(model)),
        (FeedbackId::TransitionRate, rate(model)),
        (FeedbackId::InTransition, in_transition(model)),
    ]
}
