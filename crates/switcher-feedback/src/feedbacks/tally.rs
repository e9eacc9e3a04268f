//! Device-reported tally feedbacks.
//!
//! Unlike the bus-source predicates these follow the tally flags the
//! device computes itself, so they account for keyer fills, compositor
//! boxes and other indirect contributions.

use switcher_model::CapabilityModel;
use switcher_state::{StateSnapshot, TallyState};

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::OptionValues;
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, FeedbackSet};

fn tally(
    model: &CapabilityModel,
    label: &str,
    description: &str,
    style: StyleHint,
    flag: fn(&TallyState) -> bool,
) -> FeedbackDefinition {
    FeedbackDefinition::new(
        label,
        description,
        vec![
            schema::source_option(model, "source", "Source"),
            schema::invert_option(),
        ],
        style,
        move |snapshot: &StateSnapshot, options: &OptionValues| {
            let Some(source) = source_value(options, "source") else {
                return false;
            };
            let invert = options.bool_value("invert").unwrap_or(false);
            // A source the device has not reported on is not lit.
            let lit = snapshot.tally.get(&source).map(flag).unwrap_or(false);
            lit == !invert
        },
    )
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    vec![
        (
            FeedbackId::ProgramTally,
            tally(
                model,
                "Tally: Program",
                "True while the selected source contributes to program output",
                StyleHint::new(Rgb::WHITE, Rgb::RED),
                |tally| tally.program,
            ),
        ),
        (
            FeedbackId::PreviewTally,
            tally(
                model,
                "Tally: Preview",
                "True while the selected source contributes to preview output",
                StyleHint::new(Rgb::BLACK, Rgb::GREEN),
                |tally| tally.preview,
            ),
        ),
    ]
}
