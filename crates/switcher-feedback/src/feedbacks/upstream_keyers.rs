//! Upstream keyer feedbacks.

use switcher_model::CapabilityModel;
use switcher_state::{KeyFrame, KeyerState, StateSnapshot};

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::OptionValues;
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, FeedbackSet};

fn keyer<'a>(snapshot: &'a StateSnapshot, options: &OptionValues) -> Option<&'a KeyerState> {
    snapshot.upstream_keyer(options.index_value("stage")?, options.index_value("keyer")?)
}

fn on_air(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Upstream key: On air",
        "True while the selected upstream keyer is on air",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::upstream_keyer_option(model),
            schema::invert_option(),
        ],
        StyleHint::new(Rgb::WHITE, Rgb::RED),
        |snapshot, options| {
            let invert = options.bool_value("invert").unwrap_or(false);
            let on_air = keyer(snapshot, options).map(|keyer| keyer.on_air).unwrap_or(false);
            on_air == !invert
        },
    )
}

fn fill_source(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Upstream key: Fill source",
        "True while the selected upstream keyer uses the selected fill source",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::upstream_keyer_option(model),
            schema::source_option(model, "fill", "Fill source"),
        ],
        StyleHint::new(Rgb::BLACK, Rgb::PALE_YELLOW),
        |snapshot, options| {
            let Some(keyer) = keyer(snapshot, options) else {
                return false;
            };
            let Some(fill) = source_value(options, "fill") else {
                return false;
            };
            keyer.fill_source == fill
        },
    )
    .with_learn(|snapshot, options| {
        let keyer = keyer(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_int("fill", i64::from(keyer.fill_source));
        Some(learned)
    })
}

fn key_frame(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Upstream key: Fly key frame",
        "True while the selected upstream keyer rests at the selected fly key frame",
        vec![
            schema::stage_option(model, "stage", 0),
            schema::upstream_keyer_option(model),
            schema::key_frame_option(),
        ],
        StyleHint::new(Rgb::BLACK, Rgb::PALE_YELLOW),
        |snapshot, options| {
            let Some(keyer) = keyer(snapshot, options) else {
                return false;
            };
            let Some(frame) = options.choice_value("key_frame").and_then(KeyFrame::parse) else {
                return false;
            };
            keyer.fly_key_frame == Some(frame)
        },
    )
    .with_learn(|snapshot, options| {
        let frame = keyer(snapshot, options)?.fly_key_frame?;
        let mut learned = options.clone();
        learned.set_choice("key_frame", frame.id());
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    if model.keyers_per_stage == 0 {
        return FeedbackSet::new();
    }

    let mut set = vec![
        (FeedbackId::UpstreamKeyerOnAir, on_air(model)),
        (FeedbackId::UpstreamKeyerFillSource, fill_source(model)),
    ];
    if model.dves > 0 {
        set.push((FeedbackId::UpstreamKeyerKeyFrame, key_frame(model)));
    }
    set
}
