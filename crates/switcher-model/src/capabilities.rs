//! The capability model and its building blocks.

use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

/// Identifier of a routable video source.
pub type SourceId = u16;

/// A routable video source exposed by a device variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Device-assigned source id.
    pub id: SourceId,

    /// Display name for option choices.
    pub label: String,
}

impl VideoSource {
    /// Create a new video source record.
    pub fn new(id: SourceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// An audio input exposed by a device variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInput {
    /// Device-assigned input id.
    pub id: SourceId,

    /// Display name for option choices.
    pub label: String,
}

impl AudioInput {
    /// Create a new audio input record.
    pub fn new(id: SourceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// The audio architecture a device variant carries.
///
/// Exactly one variant applies per device. The feedback registry dispatches
/// structurally on this tag: each architecture yields a disjoint predicate
/// set, and `None` contributes nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioArchitecture {
    /// No controllable audio mixer.
    #[default]
    None,

    /// Classic mixer: per-channel gain and mix option, master gain.
    Classic {
        /// Mixable audio inputs.
        inputs: Vec<AudioInput>,
    },

    /// Channel-strip mixer: per-channel-per-source input and fader gain,
    /// master fader, optional monitor bus.
    ChannelStrip {
        /// Mixable audio inputs.
        inputs: Vec<AudioInput>,

        /// Whether a monitor/headphone bus exists.
        monitor: bool,
    },
}

impl AudioArchitecture {
    /// Returns true if the device has no controllable audio.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The mixable inputs, empty for `None`.
    pub fn inputs(&self) -> &[AudioInput] {
        match self {
            Self::None => &[],
            Self::Classic { inputs } => inputs,
            Self::ChannelStrip { inputs, .. } => inputs,
        }
    }
}

/// Static per-device-variant feature-count descriptor.
///
/// Immutable after construction; a capability change requires building a
/// fresh feedback registry from a fresh model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityModel {
    /// Independently switchable mix stages.
    pub stages: u8,

    /// Upstream keyers per stage.
    pub keyers_per_stage: u8,

    /// Downstream keyers.
    pub downstream_keyers: u8,

    /// Fly-key engines (gates the keyer key-frame predicate).
    pub dves: u8,

    /// Multi-box compositors ("supersources").
    pub super_sources: u8,

    /// Boxes per compositor.
    pub super_source_boxes: u8,

    /// Aux output buses.
    pub aux_buses: u8,

    /// Macro pool size.
    pub macros: u16,

    /// Media players.
    pub media_players: u8,

    /// Media pool still slots.
    pub media_stills: u8,

    /// Media pool clip slots.
    pub media_clips: u8,

    /// Multiviewer monitoring grids.
    pub multiviewers: u8,

    /// Windows per multiviewer.
    pub multiviewer_windows: u8,

    /// Whether the device can stream.
    pub streaming: bool,

    /// Whether the device can record.
    pub recording: bool,

    /// Audio architecture tag.
    pub audio: AudioArchitecture,

    /// Routable video sources.
    pub sources: Vec<VideoSource>,
}

impl CapabilityModel {
    /// Checks the model for shapes no real device can report.
    ///
    /// The registry factory calls this before assembling anything, so a
    /// malformed model fails fast instead of producing a partial registry.
    pub fn validate(&self) -> Result<(), CapabilityError> {
        if self.stages == 0 {
            return Err(CapabilityError::NoStages);
        }
        if self.super_sources > 0 && self.super_source_boxes == 0 {
            return Err(CapabilityError::SuperSourceWithoutBoxes);
        }
        if self.multiviewers > 0 && self.multiviewer_windows == 0 {
            return Err(CapabilityError::MultiviewerWithoutWindows);
        }
        Ok(())
    }
}
