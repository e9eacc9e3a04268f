//! Audio mixer feedbacks, dispatched on the model's audio architecture.
//!
//! Classic mixers report channel gain as decibels directly; channel-strip
//! mixers report gains in hundredths of a decibel, so comparisons divide
//! by 100 first. The two families never coexist on one device.

use switcher_model::{AudioArchitecture, AudioInput, CapabilityModel};
use switcher_state::{ChannelStripSource, ClassicChannel, StateSnapshot};

use crate::compare::NumberComparator;
use crate::definition::{FeedbackDefinition, Rgb, StyleHint};
use crate::options::OptionValues;
use crate::registry::FeedbackId;
use crate::schema;

use super::{source_value, FeedbackSet};

const STYLE: StyleHint = StyleHint::new(Rgb::BLACK, Rgb::GREEN);

fn comparator(options: &OptionValues) -> Option<NumberComparator> {
    options.choice_value("comparator").and_then(NumberComparator::parse)
}

fn gain_matches(options: &OptionValues, actual: f64) -> bool {
    match (comparator(options), options.number_value("gain")) {
        (Some(comparator), Some(target)) => comparator.compare(target, actual),
        _ => false,
    }
}

fn classic_channel<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
) -> Option<&'a ClassicChannel> {
    snapshot
        .classic_audio()?
        .channels
        .get(&source_value(options, "input")?)
}

fn classic_gain(inputs: &[AudioInput]) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Channel gain",
        "Compares the selected channel's fader gain against the target",
        vec![
            schema::audio_input_option(inputs),
            schema::comparator_option(),
            schema::gain_option("Fader level (-60 = -inf)", -60.0, 6.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(channel) = classic_channel(snapshot, options) else {
                return false;
            };
            gain_matches(options, channel.gain)
        },
    )
    .with_learn(|snapshot, options| {
        let channel = classic_channel(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_number("gain", channel.gain);
        Some(learned)
    })
}

fn classic_mix_option(inputs: &[AudioInput]) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Channel mix option",
        "True while the selected channel has the selected mix option",
        vec![schema::audio_input_option(inputs), schema::mix_option_option()],
        STYLE,
        |snapshot, options| {
            let Some(channel) = classic_channel(snapshot, options) else {
                return false;
            };
            options
                .choice_value("mix_option")
                .and_then(switcher_state::AudioMixOption::parse)
                == Some(channel.mix_option)
        },
    )
    .with_learn(|snapshot, options| {
        let channel = classic_channel(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_choice("mix_option", channel.mix_option.id());
        Some(learned)
    })
}

fn classic_master_gain() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Master gain",
        "Compares the master fader gain against the target",
        vec![
            schema::comparator_option(),
            schema::gain_option("Fader level (-60 = -inf)", -60.0, 6.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(master) = snapshot.classic_audio().and_then(|audio| audio.master.as_ref())
            else {
                return false;
            };
            gain_matches(options, master.gain)
        },
    )
    .with_learn(|snapshot, options| {
        let master = snapshot.classic_audio()?.master.as_ref()?;
        let mut learned = options.clone();
        learned.set_number("gain", master.gain);
        Some(learned)
    })
}

fn strip_source<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
) -> Option<&'a ChannelStripSource> {
    snapshot
        .channel_strip_audio()?
        .inputs
        .get(&source_value(options, "input")?)?
        .sources
        .get(options.choice_value("source")?)
}

fn strip_input_gain(inputs: &[AudioInput]) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Input gain",
        "Compares the selected source's input gain against the target",
        vec![
            schema::audio_input_option(inputs),
            schema::strip_source_option(),
            schema::comparator_option(),
            schema::gain_option("Gain", -100.0, 6.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(source) = strip_source(snapshot, options) else {
                return false;
            };
            gain_matches(options, f64::from(source.gain) / 100.0)
        },
    )
    .with_learn(|snapshot, options| {
        let source = strip_source(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_number("gain", f64::from(source.gain) / 100.0);
        Some(learned)
    })
}

fn strip_fader_gain(inputs: &[AudioInput]) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Fader gain",
        "Compares the selected source's fader gain against the target",
        vec![
            schema::audio_input_option(inputs),
            schema::strip_source_option(),
            schema::comparator_option(),
            schema::gain_option("Fader level (-100 = -inf)", -100.0, 10.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(source) = strip_source(snapshot, options) else {
                return false;
            };
            gain_matches(options, f64::from(source.fader_gain) / 100.0)
        },
    )
    .with_learn(|snapshot, options| {
        let source = strip_source(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_number("gain", f64::from(source.fader_gain) / 100.0);
        Some(learned)
    })
}

fn strip_mix_option(inputs: &[AudioInput]) -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Source mix option",
        "True while the selected source has the selected mix option",
        vec![
            schema::audio_input_option(inputs),
            schema::strip_source_option(),
            schema::mix_option_option(),
        ],
        STYLE,
        |snapshot, options| {
            let Some(source) = strip_source(snapshot, options) else {
                return false;
            };
            options
                .choice_value("mix_option")
                .and_then(switcher_state::AudioMixOption::parse)
                == Some(source.mix_option)
        },
    )
    .with_learn(|snapshot, options| {
        let source = strip_source(snapshot, options)?;
        let mut learned = options.clone();
        learned.set_choice("mix_option", source.mix_option.id());
        Some(learned)
    })
}

fn strip_master_gain() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Master fader gain",
        "Compares the master fader gain against the target",
        vec![
            schema::comparator_option(),
            schema::gain_option("Fader level (-100 = -inf)", -100.0, 10.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(master) = snapshot
                .channel_strip_audio()
                .and_then(|audio| audio.master.as_ref())
            else {
                return false;
            };
            gain_matches(options, f64::from(master.fader_gain) / 100.0)
        },
    )
    .with_learn(|snapshot, options| {
        let master = snapshot.channel_strip_audio()?.master.as_ref()?;
        let mut learned = options.clone();
        learned.set_number("gain", f64::from(master.fader_gain) / 100.0);
        Some(learned)
    })
}

fn strip_monitor_muted() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Monitor input muted",
        "True while the monitor bus mutes input masters",
        Vec::new(),
        STYLE,
        |snapshot, _options| {
            snapshot
                .channel_strip_audio()
                .and_then(|audio| audio.monitor.as_ref())
                .map(|monitor| monitor.input_master_muted)
                .unwrap_or(false)
        },
    )
}

fn strip_monitor_gain() -> FeedbackDefinition {
    FeedbackDefinition::new(
        "Audio: Monitor gain",
        "Compares the monitor bus gain against the target",
        vec![
            schema::comparator_option(),
            schema::gain_option("Gain", -60.0, 10.0),
        ],
        STYLE,
        |snapshot, options| {
            let Some(monitor) = snapshot
                .channel_strip_audio()
                .and_then(|audio| audio.monitor.as_ref())
            else {
                return false;
            };
            gain_matches(options, f64::from(monitor.gain) / 100.0)
        },
    )
    .with_learn(|snapshot, options| {
        let monitor = snapshot.channel_strip_audio()?.monitor.as_ref()?;
        let mut learned = options.clone();
        learned.set_number("gain", f64::from(monitor.gain) / 100.0);
        Some(learned)
    })
}

pub(crate) fn feedbacks(model: &CapabilityModel) -> FeedbackSet {
    match &model.audio {
        AudioArchitecture::None => FeedbackSet::new(),
        AudioArchitecture::Classic { inputs } => vec![
            (FeedbackId::ClassicAudioGain, classic_gain(inputs)),
            (FeedbackId::ClassicAudioMixOption, classic_mix_option(inputs)),
            (FeedbackId::ClassicAudioMasterGain, classic_master_gain()),
        ],
        AudioArchitecture::ChannelStrip { inputs, monitor } => {
            let mut set = vec![
                (FeedbackId::ChannelStripInputGain, strip_input_gain(inputs)),
                (FeedbackId::ChannelStripFaderGain, strip_fader_gain(inputs)),
                (FeedbackId::ChannelStripMixOption, strip_mix_option(inputs)),
                (FeedbackId::ChannelStripMasterGain, strip_master_gain()),
            ];
            if *monitor {
                set.push((FeedbackId::ChannelStripMonitorMuted, strip_monitor_muted()));
                set.push((FeedbackId::ChannelStripMonitorGain, strip_monitor_gain()));
            }
            set
        }
    }
}
