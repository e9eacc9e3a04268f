//! Program and preview bus source feedbacks.
//!
//! Each bus gets a single-stage predicate plus one k-way variant per
//! simultaneous stage count the model supports (capped at four). The
//! k-way variants hold only when every addressed stage carries its
//! expected source.

use switcher_model::CapabilityModel;
use switcher_state::StageState;

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::OptionParam;
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, stage_for, FeedbackSet};

const MAX_SIMULTANEOUS_STAGES: u8 = 4;

#[derive(Clone, Copy)]
enum Bus {
    Program,
    Preview,
}

impl Bus {
    fn source(self, stage: &StageState) -> u16 {
        match self {
            Self::Program => stage.program_source,
            Self::Preview => stage.preview_source,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Preview => "Preview",
        }
    }

    fn id(self, stages: u8) -> FeedbackId {
        match self {
            Self::Program => FeedbackId::ProgramSources(stages),
            Self::Preview => FeedbackId::PreviewSources(stages),
        }
    }

    fn style(self) -> StyleHint {
        match self {
            Self::Program => StyleHint::new(Rgb::WHITE, Rgb::RED),
            Self::Preview => StyleHint::new(Rgb::BLACK, Rgb::GREEN),
        }
    }
}

fn single_stage(model: &CapabilityModel, bus: Bus) -> FeedbackDefinition {
    FeedbackDefinition::new(
        format!("{}: Source", bus.name()),
        format!(
            "True while the selected source is on the {} bus of the selected stage",
            bus.name().to_lowercase()
        ),
        vec![
            schema::stage_option(model, "stage", 0),
            schema::source_option(model, "source", "Source"),
        ],
        bus.style(),
        move |snapshot, options| {
            let Some(stage) = stage_for(snapshot, options, "stage") else {
                return false;
            };
            let Some(source) = source_value(options, "source") else {
                return false;
            };
            bus.source(stage) == source
        },
    )
    .with_learn(move |snapshot, options| {
        let stage = stage_for(snapshot, options, "stage")?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(bus.source(stage)));
        Some(learned)
    })
}

fn multi_stage(model: &CapabilityModel, bus: Bus, stages: u8) -> FeedbackDefinition {
    let mut options: Vec<OptionParam> = Vec::with_capacity(usize::from(stages) * 2);
    for index in 1..=stages {
        options.push(schema::stage_option(
            model,
            format!("stage{index}"),
            index - 1,
        ));
        options.push(schema::source_option(
            model,
            format!("source{index}"),
            format!("Source {index}"),
        ));
    }

    FeedbackDefinition::new(
        format!("{}: Sources across {stages} stages", bus.name()),
        format!(
            "True while every one of the {stages} selected stages carries its expected {} source",
            bus.name().to_lowercase()
        ),
        options,
        bus.style(),
        move |snapshot, options| {
            (1..=stages).all(|index| {
                let Some(stage) = stage_for(snapshot, options, &format!("stage{index}")) else {
                    return false;
                };
                let Some(source) = source_value(options, &format!("source{index}")) else {
                    return false;
                };
                bus.source(stage) == source
            })
        },
    )
    .with_learn(move |snapshot, options| {
        // Collect every stage before writing anything: a learn either
        // fills all sources or none.
        let mut sources = Vec::with_capacity(usize::from(stages));
        for index in 1..=stages {
            let stage = stage_for(snapshot, options, &format!("stage{index}"))?;
            sources.push(bus.source(stage));
        }

        let mut learned = options.clone();
        for (index, source) in (1..).zip(sources) {
            learned.set_int(format!("source{index}"), i64::from(source));
        }
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    let mut set = FeedbackSet::new();
    for bus in [Bus::Program, Bus::Preview] {
        set.push((bus.id(1), single_stage(model, bus)));
        for stages in 2..=model.stages.min(MAX_SIMULTANEOUS_STAGES) {
            set.push((bus.id(stages), multi_stage(model, bus, stages)));
        }
    }
    set
}
