//! Output routing feedbacks: aux buses, multiviewer windows, media
//! players.
//!
//! Media player clip choices share the still id space shifted by
//! [`MEDIA_PLAYER_CLIP_OFFSET`](crate::schema::MEDIA_PLAYER_CLIP_OFFSET).

use switcher_model::CapabilityModel;
use switcher_state::MediaPlayerSource;

use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::registry::FeedbackId;
use crate::schema::{self, MEDIA_PLAYER_CLIP_OFFSET};

use super::{source_value, FeedbackSet};

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::YELLOW);

fn aux_source(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Aux: Source",
        "True while the selected aux bus outputs the selected source",
        vec![
            schema::aux_option(model),
            schema::source_option(model, "source", "Source"),
        ],
        STYLE,
        |snapshot, options| {
            let Some(aux) = options.index_value("aux") else {
                return false;
            };
            let Some(source) = source_value(options, "source") else {
                return false;
            };
            // Unreported routing reads as no match.
            snapshot.aux_source(aux) == Some(source)
        },
    )
    .with_learn(|snapshot, options| {
        let source = snapshot.aux_source(options.index_value("aux")?)?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(source));
        Some(learned)
    })
}

fn multiviewer_window_source(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Multiviewer: Window source",
        "True while the selected multiviewer window shows the selected source",
        vec![
            schema::multiviewer_option(model),
            schema::multiviewer_window_option(model),
            schema::source_option(model, "source", "Source"),
        ],
        STYLE,
        |snapshot, options| {
            let window = options.index_value("multiviewer").and_then(|multiviewer| {
                snapshot.multiviewer_window(multiviewer, options.index_value("window")?)
            });
            let Some(window) = window else {
                return false;
            };
            source_value(options, "source") == Some(window.source)
        },
    )
    .with_learn(|snapshot, options| {
        let window = snapshot
            .multiviewer_window(options.index_value("multiviewer")?, options.index_value("window")?)?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(window.source));
        Some(learned)
    })
}

fn media_player_source(model: &CapabilityModel) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Media player: Source",
        "True while the selected media player plays the selected still or clip",
        vec![
            schema::media_player_option(model),
            schema::media_source_option(model),
        ],
        STYLE,
        |snapshot, options| {
            let Some(player) = options
                .index_value("media_player")
                .and_then(|player| snapshot.media_player(player))
            else {
                return false;
            };
            let Some(target) = options.int_value("source") else {
                return false;
            };
            match player.source {
                MediaPlayerSource::Still { index } => i64::from(index) == target,
                MediaPlayerSource::Clip { index } => {
                    i64::from(index) + MEDIA_PLAYER_CLIP_OFFSET == target
                }
            }
        },
    )
    .with_learn(|snapshot, options| {
        let player = snapshot.media_player(options.index_value("media_player")?)?;
        let learned_source = match player.source {
            MediaPlayerSource::Still { index } => i64::from(index),
            MediaPlayerSource::Clip { index } => i64::from(index) + MEDIA_PLAYER_CLIP_OFFSET,
        };
        let mut learned = options.clone();
        learned.set_int("source", learned_source);
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    let mut set = FeedbackSet::new();
    if model.aux_buses > 0 {
        set.push((FeedbackId::AuxSource, aux_source(model)));
    }
    if model.multiviewers > 0 {
        set.push((
            FeedbackId::MultiviewerWindowSource,
            multiviewer_window_source(model),
        ));
    }
    if model.media_players > 0 {
        set.push((FeedbackId::MediaPlayerSource, media_player_source(model)));
    }
    set
}
