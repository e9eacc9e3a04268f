//! Audio mixer state.
//!
//! The shape mirrors the capability model's architecture tag: exactly one
//! variant applies, selected once at state-sync time, so feedback code
//! never probes multiple optional sub-trees pairwise.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

/// Audio state, tagged by architecture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum AudioState {
    /// No controllable audio, or not yet reported.
    #[default]
    None,

    /// Classic mixer.
    Classic(ClassicAudioState),

    /// Channel-strip mixer.
    ChannelStrip(ChannelStripAudioState),
}

/// Classic mixer state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassicAudioState {
    /// Channels by audio input id.
    pub channels: BTreeMap<SourceId, ClassicChannel>,

    /// Master bus, absent until reported.
    pub master: Option<ClassicMaster>,
}

/// One classic mixer channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassicChannel {
    /// Fader gain in dB.
    pub gain: f64,

    /// Mix option.
    pub mix_option: AudioMixOption,
}

/// Classic mixer master bus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassicMaster {
    /// Master gain in dB.
    pub gain: f64,
}

/// Channel-strip mixer state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStripAudioState {
    /// Inputs by audio input id.
    pub inputs: BTreeMap<SourceId, ChannelStripInput>,

    /// Master bus, absent until reported.
    pub master: Option<ChannelStripMaster>,

    /// Monitor/headphone bus, absent on variants without one.
    pub monitor: Option<ChannelStripMonitor>,
}

/// One channel-strip input and its sub-sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStripInput {
    /// Sub-sources by device source key (e.g. "-65280" for the stereo pair).
    pub sources: BTreeMap<String, ChannelStripSource>,
}

/// One channel-strip sub-source.
///
/// Gains are device-reported in hundredths of a dB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStripSource {
    /// Input trim gain, centi-dB.
    pub gain: i32,

    /// Fader gain, centi-dB.
    pub fader_gain: i32,

    /// Mix option.
    pub mix_option: AudioMixOption,
}

/// Channel-strip master bus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStripMaster {
    /// Master fader gain, centi-dB.
    pub fader_gain: i32,
}

/// Channel-strip monitor/headphone bus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStripMonitor {
    /// Whether the input master feed into the monitor is muted.
    pub input_master_muted: bool,

    /// Monitor gain, centi-dB.
    pub gain: i32,
}

/// Per-channel mix options shared by both architectures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioMixOption {
    /// Channel is off.
    #[default]
    Off,

    /// Channel is always in the mix.
    On,

    /// Channel follows its video source.
    AudioFollowVideo,
}

impl AudioMixOption {
    /// All options.
    pub const ALL: [AudioMixOption; 3] = [Self::Off, Self::On, Self::AudioFollowVideo];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::AudioFollowVideo => "afv",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::AudioFollowVideo => "Audio follow video",
        }
    }

    /// Parse a string id back into a mix option.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_option_id_round_trip() {
        for option in AudioMixOption::ALL {
            assert_eq!(AudioMixOption::parse(option.id()), Some(option));
        }
        assert_eq!(AudioMixOption::parse("sometimes"), None);
    }
}
