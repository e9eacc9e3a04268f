//! Downstream keyer feedbacks.
//!
//! Tie and fill-source read sub-nodes the device reports lazily; until
//! they arrive those predicates stay false and learn declines.

use switcher_model::CapabilityModel;
use switcher_state::{DownstreamKeyerState, StateSnapshot};

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::OptionValues;
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, FeedbackSet};

fn keyer<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
) -> Option<&'a DownstreamKeyerState> {
    snapshot.downstream_keyer(options.index_value("keyer")?)
}

fn on_air(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Downstream key: On air",
        "True while the selected downstream keyer is on air",
        vec![schema::downstream_keyer_option(model), schema::invert_option()],
        StyleHint::new(Rgb::WHITE, Rgb::RED),
        |snapshot, options| {
            let invert = options.bool_value("invert").unwrap_or(false);
            let on_air = keyer(snapshot, options).map(|keyer| keyer.on_air).unwrap_or(false);
            on_air == !invert
        },
    )
}

fn tie(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Downstream key: Tied",
        "True while the selected downstream keyer is tied to the next transition",
        vec![schema::downstream_keyer_option(model), schema::invert_option()],
        StyleHint::new(Rgb::WHITE, Rgb::RED),
        |snapshot, options| {
            let invert = options.bool_value("invert").unwrap_or(false);
            let tied = keyer(snapshot, options)
                .and_then(|keyer| keyer.properties.as_ref())
                .map(|properties| properties.tie)
                .unwrap_or(false);
            tied == !invert
        },
    )
}

fn fill_source(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Downstream key: Fill source",
        "True while the selected downstream keyer uses the selected fill source",
        vec![
            schema::downstream_keyer_option(model),
            schema::source_option(model, "fill", "Fill source"),
        ],
        StyleHint::new(Rgb::BLACK, Rgb::PALE_YELLOW),
        |snapshot, options| {
            let Some(sources) = keyer(snapshot, options).and_then(|keyer| keyer.sources.as_ref())
            else {
                return false;
            };
            let Some(fill) = source_value(options, "fill") else {
                return false;
            };
            sources.fill_source == fill
        },
    )
    .with_learn(|snapshot, options| {
        let sources = keyer(snapshot, options)?.sources.as_ref()?;
        let mut learned = options.clone();
        learned.set_int("fill", i64::from(sources.fill_source));
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    if model.downstream_keyers == 0 {
        return FeedbackSet::new();
    }

    vec![
        (FeedbackId::DownstreamKeyerOnAir, on_air(model)),
        (FeedbackId::DownstreamKeyerTie, tie(model)),
        (FeedbackId::DownstreamKeyerFillSource, fill_source(model)),
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

    #[test]
    fn test_tie_reads_lazy_properties() {
        let definition = definition(FeedbackId::DownstreamKeyerTie);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("keyer", "0");
        assert!(definition.evaluate(&snapshot, &options));

        // Keyer 1 has no reported properties yet.
        options.set_choice("keyer", "1");
        assert!(!definition.evaluate(&snapshot, &options));
    }

    #[test]
    fn test_fill_source_declines_learn_until_reported() {
        let definition = definition(FeedbackId::DownstreamKeyerFillSource);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("keyer", "0");
        let learned = definition.learn(&snapshot, &options).unwrap();
        assert_eq!(learned.int_value("fill"), Some(3));
        assert!(definition.evaluate(&snapshot, &learned));

        options.set_choice("keyer", "1");
        assert!(definition.learn(&snapshot, &options).is_none());
    }

    #[test]
    fn test_on_air() {
        let definition = definition(FeedbackId::DownstreamKeyerOnAir);
        let snapshot = fixtures::snapshot();

        let mut options = OptionValues::new();
        options.set_choice("keyer", "0");
        assert!(definition.evaluate(&snapshot, &options));
        options.set_choice("keyer", "1");
        assert!(!definition.evaluate(&snapshot, &options));
    }
}
