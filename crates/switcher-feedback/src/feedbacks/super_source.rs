//! Compositor (supersource) feedbacks.
//!
//! Fixed-point encodings follow the device protocol: art clip and gain
//! are stored in tenths of a percent-point, box size in thousandths,
//! box position in hundredths, box crops in thousandths. Crop values are
//! only held against the target while cropping is enabled on the box.

use switcher_model::CapabilityModel;
use switcher_state::{ArtPlacement, StateSnapshot, SuperSourceArt, SuperSourceBox};

use crate::compare::compare_as_int;
use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::{OptionParam, OptionValues};
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, FeedbackSet};

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::YELLOW);

/// Single-compositor devices address index 0 implicitly.
fn super_source_index(multiple: bool, options: &OptionValues) -> usize {
    if multiple {
        options.index_value("super_source").unwrap_or(0)
    } else {
        0
    }
}

fn art<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
    multiple: bool,
) -> Option<&'a SuperSourceArt> {
    snapshot
        .super_source(super_source_index(multiple, options))?
        .art
        .as_ref()
}

fn super_source_box<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
    multiple: bool,
) -> Option<&'a SuperSourceBox> {
    snapshot.super_source_box(
        super_source_index(multiple, options),
        options.index_value("box")?,
    )
}

fn base_options(model: &CapabilityModel) -> Vec<OptionParam> {
    schema::super_source_option(model).into_iter().collect()
}

fn art_properties(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.extend([
        schema::checkbox("match_fill", "Match fill source", true),
        schema::source_option(model, "fill", "Fill source"),
        schema::checkbox("match_key", "Match key source", false),
        schema::source_option(model, "key", "Key source"),
        schema::checkbox("match_placement", "Match art placement", false),
        schema::art_placement_option(),
        schema::checkbox("match_pre_multiplied", "Match pre-multiplied", false),
        schema::checkbox("pre_multiplied", "Pre-multiplied", false),
        schema::checkbox("match_clip", "Match clip", false),
        schema::decimal_option("clip", "Clip", 50.0, 0.0, 100.0, 0.1),
        schema::checkbox("match_gain", "Match gain", false),
        schema::decimal_option("gain", "Gain", 50.0, 0.0, 100.0, 0.1),
        schema::checkbox("match_invert_key", "Match invert key", false),
        schema::checkbox("invert_key", "Invert key", false),
    ]);

    FeedbackDefinition::new(
        "Supersource: Art properties",
        "True while every checked art property matches its target value",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(art) = art(snapshot, options, multiple) else {
                return false;
            };

            let wanted = |id: &str| options.bool_value(id).unwrap_or(false);

            if wanted("match_fill")
                && source_value(options, "fill") != Some(art.fill_source)
            {
                return false;
            }
            if wanted("match_key") && source_value(options, "key") != Some(art.key_source) {
                return false;
            }
            if wanted("match_placement")
                && options.choice_value("placement").and_then(ArtPlacement::parse)
                    != Some(art.placement)
            {
                return false;
            }
            if wanted("match_pre_multiplied")
                && options.bool_value("pre_multiplied") != Some(art.pre_multiplied)
            {
                return false;
            }
            if wanted("match_clip")
                && !compare_as_int(options.number_value("clip"), i64::from(art.clip), 10, 0)
            {
                return false;
            }
            if wanted("match_gain")
                && !compare_as_int(options.number_value("gain"), i64::from(art.gain), 10, 0)
            {
                return false;
            }
            if wanted("match_invert_key")
                && options.bool_value("invert_key") != Some(art.invert_key)
            {
                return false;
            }
            true
        },
    )
    .with_learn(move |snapshot, options| {
        let art = art(snapshot, options, multiple)?;
        let mut learned = options.clone();
        learned.set_int("fill", i64::from(art.fill_source));
        learned.set_int("key", i64::from(art.key_source));
        learned.set_choice("placement", art.placement.id());
        learned.set_bool("pre_multiplied", art.pre_multiplied);
        learned.set_number("clip", f64::from(art.clip) / 10.0);
        learned.set_number("gain", f64::from(art.gain) / 10.0);
        learned.set_bool("invert_key", art.invert_key);
        Some(learned)
    })
}

fn art_fill_source(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.push(schema::source_option(model, "source", "Fill source"));

    FeedbackDefinition::new(
        "Supersource: Art fill source",
        "True while the compositor art uses the selected fill source",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(art) = art(snapshot, options, multiple) else {
                return false;
            };
            source_value(options, "source") == Some(art.fill_source)
        },
    )
    .with_learn(move |snapshot, options| {
        let art = art(snapshot, options, multiple)?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(art.fill_source));
        Some(learned)
    })
}

fn art_placement(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.push(schema::art_placement_option());

    FeedbackDefinition::new(
        "Supersource: Art placement",
        "True while the compositor art sits in the selected layer",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(art) = art(snapshot, options, multiple) else {
                return false;
            };
            options.choice_value("placement").and_then(ArtPlacement::parse) == Some(art.placement)
        },
    )
    .with_learn(move |snapshot, options| {
        let art = art(snapshot, options, multiple)?;
        let mut learned = options.clone();
        learned.set_choice("placement", art.placement.id());
        Some(learned)
    })
}

fn box_enabled(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.push(schema::super_source_box_option(model));
    options.push(schema::invert_option());

    FeedbackDefinition::new(
        "Supersource: Box enabled",
        "True while the selected box is enabled",
        options,
        STYLE,
        move |snapshot, options| {
            let invert = options.bool_value("invert").unwrap_or(false);
            let enabled = super_source_box(snapshot, options, multiple)
                .map(|super_source_box| super_source_box.enabled)
                .unwrap_or(false);
            enabled == !invert
        },
    )
}

fn box_source(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.push(schema::super_source_box_option(model));
    options.push(schema::source_option(model, "source", "Source"));

    FeedbackDefinition::new(
        "Supersource: Box source",
        "True while the selected box carries the selected source",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(super_source_box) = super_source_box(snapshot, options, multiple) else {
                return false;
            };
            source_value(options, "source") == Some(super_source_box.source)
        },
    )
    .with_learn(move |snapshot, options| {
        let super_source_box = super_source_box(snapshot, options, multiple)?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(super_source_box.source));
        Some(learned)
    })
}

fn box_properties(model: &CapabilityModel) -> FeedbackDefinition {
    let multiple = model.super_sources > 1;

    let mut options = base_options(model);
    options.push(schema::super_source_box_option(model));
    options.extend([
        schema::checkbox("match_source", "Match source", true),
        schema::source_option(model, "source", "Source"),
        schema::checkbox("match_size", "Match size", false),
        schema::decimal_option("size", "Size", 0.5, 0.0, 1.0, 0.01),
        schema::checkbox("match_x", "Match X position", false),
        schema::decimal_option("x", "X position", 0.0, -48.0, 48.0, 0.01),
        schema::checkbox("match_y", "Match Y position", false),
        schema::decimal_option("y", "Y position", 0.0, -27.0, 27.0, 0.01),
        schema::checkbox("match_crop_enable", "Match crop enable", false),
        schema::checkbox("crop_enable", "Crop enabled", false),
        schema::checkbox("match_crop_top", "Match crop top", false),
        schema::decimal_option("crop_top", "Crop top", 0.0, 0.0, 18.0, 0.1),
        schema::checkbox("match_crop_bottom", "Match crop bottom", false),
        schema::decimal_option("crop_bottom", "Crop bottom", 0.0, 0.0, 18.0, 0.1),
        schema::checkbox("match_crop_left", "Match crop left", false),
        schema::decimal_option("crop_left", "Crop left", 0.0, 0.0, 32.0, 0.1),
        schema::checkbox("match_crop_right", "Match crop right", false),
        schema::decimal_option("crop_right", "Crop right", 0.0, 0.0, 32.0, 0.1),
    ]);

    FeedbackDefinition::new(
        "Supersource: Box properties",
        "True while every checked box property matches its target value",
        options,
        STYLE,
        move |snapshot, options| {
            let Some(super_source_box) = super_source_box(snapshot, options, multiple) else {
                return false;
            };

            let wanted = |id: &str| options.bool_value(id).unwrap_or(false);

            if wanted("match_source")
                && source_value(options, "source") != Some(super_source_box.source)
            {
                return false;
            }
            if wanted("match_size")
                && !compare_as_int(
                    options.number_value("size"),
                    i64::from(super_source_box.size),
                    1000,
                    10,
                )
            {
                return false;
            }
            if wanted("match_x")
                && !compare_as_int(options.number_value("x"), i64::from(super_source_box.x), 100, 0)
            {
                return false;
            }
            if wanted("match_y")
                && !compare_as_int(options.number_value("y"), i64::from(super_source_box.y), 100, 0)
            {
                return false;
            }
            if wanted("match_crop_enable")
                && options.bool_value("crop_enable") != Some(super_source_box.cropped)
            {
                return false;
            }

            // Crop extents only mean anything while cropping is on.
            let crops = [
                ("match_crop_top", "crop_top", super_source_box.crop_top),
                ("match_crop_bottom", "crop_bottom", super_source_box.crop_bottom),
                ("match_crop_left", "crop_left", super_source_box.crop_left),
                ("match_crop_right", "crop_right", super_source_box.crop_right),
            ];
            for (flag, id, actual) in crops {
                if wanted(flag)
                    && !(super_source_box.cropped
                        && compare_as_int(options.number_value(id), i64::from(actual), 1000, 10))
                {
                    return false;
                }
            }
            true
        },
    )
    .with_learn(move |snapshot, options| {
        let super_source_box = super_source_box(snapshot, options, multiple)?;
        let mut learned = options.clone();
        learned.set_int("source", i64::from(super_source_box.source));
        learned.set_number("size", f64::from(super_source_box.size) / 1000.0);
        learned.set_number("x", f64::from(super_source_box.x) / 100.0);
        learned.set_number("y", f64::from(super_source_box.y) / 100.0);
        learned.set_bool("crop_enable", super_source_box.cropped);
        learned.set_number("crop_top", f64::from(super_source_box.crop_top) / 1000.0);
        learned.set_number("crop_bottom", f64::from(super_source_box.crop_bottom) / 1000.0);
        learned.set_number("crop_left", f64::from(super_source_box.crop_left) / 1000.0);
        learned.set_number("crop_right", f64::from(super_source_box.crop_right) / 1000.0);
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    if model.super_sources == 0 {
        return FeedbackSet::new();
    }

    vec![
        (FeedbackId::SuperSourceArtProperties, art_properties(model)),
        (FeedbackId::SuperSourceArtFillSource, art_fill_source(model)),
        (FeedbackId::SuperSourceArtPlacement, art_placement(model)),
        (FeedbackId::SuperSourceBoxEnabled, box_enabled(model)),
        (FeedbackId::SuperSourceBoxSource, box_source(model)),
        (FeedbackId::SuperSourceBoxProperties, box_properties(model)),
    ]
}
