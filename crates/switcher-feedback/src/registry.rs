//! Feedback registry assembly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use switcher_model::CapabilityModel;

use crate::definition::FeedbackDefinition;
use crate::error::RegistryError;
use crate::feedbacks;

/// Identifier of one feedback.
///
/// The multi-stage source variants carry the number of simultaneous stages
/// they match (1..=4); the rest are singletons. `Display` yields the
/// stable string form hosts persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeedbackId {
    ProgramTally,
    PreviewTally,
    ProgramSources(u8),
    PreviewSources(u8),
    AuxSource,
    UpstreamKeyerOnAir,
    UpstreamKeyerFillSource,
    UpstreamKeyerKeyFrame,
    DownstreamKeyerOnAir,
    DownstreamKeyerTie,
    DownstreamKeyerFillSource,
    SuperSourceArtProperties,
    SuperSourceArtFillSource,
    SuperSourceArtPlacement,
    SuperSourceBoxEnabled,
    SuperSourceBoxSource,
    SuperSourceBoxProperties,
    TransitionStyle,
    TransitionSelection,
    TransitionRate,
    InTransition,
    FadeToBlackState,
    FadeToBlackRate,
    MediaPlayerSource,
    MultiviewerWindowSource,
    MacroState,
    MacroLooping,
    StreamingStatus,
    RecordingStatus,
    ClassicAudioGain,
    ClassicAudioMixOption,
    ClassicAudioMasterGain,
    ChannelStripInputGain,
    ChannelStripFaderGain,
    ChannelStripMixOption,
    ChannelStripMasterGain,
    ChannelStripMonitorMuted,
    ChannelStripMonitorGain,
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramTally => write!(f, "program_tally"),
            Self::PreviewTally => write!(f, "preview_tally"),
            Self::ProgramSources(1) => write!(f, "program_source"),
            Self::ProgramSources(stages) => write!(f, "program_sources_{stages}"),
            Self::PreviewSources(1) => write!(f, "preview_source"),
            Self::PreviewSources(stages) => write!(f, "preview_sources_{stages}"),
            Self::AuxSource => write!(f, "aux_source"),
            Self::UpstreamKeyerOnAir => write!(f, "usk_on_air"),
            Self::UpstreamKeyerFillSource => write!(f, "usk_fill_source"),
            Self::UpstreamKeyerKeyFrame => write!(f, "usk_key_frame"),
            Self::DownstreamKeyerOnAir => write!(f, "dsk_on_air"),
            Self::DownstreamKeyerTie => write!(f, "dsk_tie"),
            Self::DownstreamKeyerFillSource => write!(f, "dsk_fill_source"),
            Self::SuperSourceArtProperties => write!(f, "ssrc_art_properties"),
            Self::SuperSourceArtFillSource => write!(f, "ssrc_art_fill_source"),
            Self::SuperSourceArtPlacement => write!(f, "ssrc_art_placement"),
            Self::SuperSourceBoxEnabled => write!(f, "ssrc_box_enabled"),
            Self::SuperSourceBoxSource => write!(f, "ssrc_box_source"),
            Self::SuperSourceBoxProperties => write!(f, "ssrc_box_properties"),
            Self::TransitionStyle => write!(f, "transition_style"),
            Self::TransitionSelection => write!(f, "transition_selection"),
            Self::TransitionRate => write!(f, "transition_rate"),
            Self::InTransition => write!(f, "in_transition"),
            Self::FadeToBlackState => write!(f, "fade_to_black_state"),
            Self::FadeToBlackRate => write!(f, "fade_to_black_rate"),
            Self::MediaPlayerSource => write!(f, "media_player_source"),
            Self::MultiviewerWindowSource => write!(f, "multiviewer_window_source"),
            Self::MacroState => write!(f, "macro_state"),
            Self::MacroLooping => write!(f, "macro_looping"),
            Self::StreamingStatus => write!(f, "streaming_status"),
            Self::RecordingStatus => write!(f, "recording_status"),
            Self::ClassicAudioGain => write!(f, "classic_audio_gain"),
            Self::ClassicAudioMixOption => write!(f, "classic_audio_mix_option"),
            Self::ClassicAudioMasterGain => write!(f, "classic_audio_master_gain"),
            Self::ChannelStripInputGain => write!(f, "strip_audio_input_gain"),
            Self::ChannelStripFaderGain => write!(f, "strip_audio_fader_gain"),
            Self::ChannelStripMixOption => write!(f, "strip_audio_mix_option"),
            Self::ChannelStripMasterGain => write!(f, "strip_audio_master_gain"),
            Self::ChannelStripMonitorMuted => write!(f, "strip_audio_monitor_muted"),
            Self::ChannelStripMonitorGain => write!(f, "strip_audio_monitor_gain"),
        }
    }
}

/// The feedbacks one capability model supports.
///
/// Built once per model by [`build_registry`]; the host evaluates entries
/// on its own refresh cadence and calls learn on user request.
pub struct FeedbackRegistry {
    entries: BTreeMap<FeedbackId, FeedbackDefinition>,
}

impl FeedbackRegistry {
    /// The definition for `id`, if this model supports it.
    pub fn get(&self, id: &FeedbackId) -> Option<&FeedbackDefinition> {
        self.entries.get(id)
    }

    /// Whether this model supports `id`.
    pub fn contains(&self, id: &FeedbackId) -> bool {
        self.entries.contains_key(id)
    }

    /// All supported ids, in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &FeedbackId> {
        self.entries.keys()
    }

    /// All entries, in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeedbackId, &FeedbackDefinition)> {
        self.entries.iter()
    }

    /// Number of feedbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FeedbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackRegistry")
            .field("feedbacks", &self.entries.len())
            .finish()
    }
}

/// Build the feedback registry for one capability model.
///
/// Pure: the same model always yields the same id set. Fails fast on a
/// malformed model instead of assembling a partial registry.
pub fn build_registry(model: &CapabilityModel) -> Result<FeedbackRegistry, RegistryError> {
    model.validate()?;

    let entries: BTreeMap<_, _> = feedbacks::all(model).into_iter().collect();
    debug!(feedbacks = entries.len(), "built feedback registry");

    Ok(FeedbackRegistry { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use switcher_model::{AudioArchitecture, AudioInput, CapabilityError};

    fn model_with_stages(stages: u8) -> CapabilityModel {
        CapabilityModel {
            stages,
            ..CapabilityModel::default_profile()
        }
    }

    #[test]
    fn test_malformed_model_fails_fast() {
        let result = build_registry(&model_with_stages(0));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidModel(CapabilityError::NoStages))
        ));
    }

    #[test]
    fn test_multi_stage_ids_scale_with_stage_count() {
        for stages in 1..=4u8 {
            let registry = build_registry(&model_with_stages(stages)).unwrap();
            for k in 2..=4u8 {
                assert_eq!(
                    registry.contains(&FeedbackId::ProgramSources(k)),
                    stages >= k,
                    "stages={stages} k={k}"
                );
                assert_eq!(
                    registry.contains(&FeedbackId::PreviewSources(k)),
                    stages >= k,
                    "stages={stages} k={k}"
                );
            }
            // The single-stage variant always exists.
            assert!(registry.contains(&FeedbackId::ProgramSources(1)));
            assert!(registry.contains(&FeedbackId::PreviewSources(1)));
        }
    }

    #[test]
    fn test_id_set_is_pure_function_of_model() {
        let model = model_with_stages(2);
        let a: Vec<_> = build_registry(&model).unwrap().ids().copied().collect();
        let b: Vec<_> = build_registry(&model).unwrap().ids().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_capability_contributes_no_entries() {
        let model = CapabilityModel {
            keyers_per_stage: 0,
            downstream_keyers: 0,
            super_sources: 0,
            aux_buses: 0,
            macros: 0,
            media_players: 0,
            multiviewers: 0,
            streaming: false,
            recording: false,
            audio: AudioArchitecture::None,
            ..CapabilityModel::default_profile()
        };
        let registry = build_registry(&model).unwrap();

        for id in [
            FeedbackId::UpstreamKeyerOnAir,
            FeedbackId::UpstreamKeyerFillSource,
            FeedbackId::UpstreamKeyerKeyFrame,
            FeedbackId::DownstreamKeyerOnAir,
            FeedbackId::SuperSourceBoxSource,
            FeedbackId::AuxSource,
            FeedbackId::MacroState,
            FeedbackId::MediaPlayerSource,
            FeedbackId::MultiviewerWindowSource,
            FeedbackId::StreamingStatus,
            FeedbackId::RecordingStatus,
            FeedbackId::ClassicAudioGain,
            FeedbackId::ChannelStripInputGain,
        ] {
            assert!(!registry.contains(&id), "{id} should be absent");
        }

        // Transition and fade-to-black predicates remain.
        assert!(registry.contains(&FeedbackId::TransitionStyle));
        assert!(registry.contains(&FeedbackId::FadeToBlackState));
    }

    #[test]
    fn test_audio_dispatch_is_exclusive() {
        let classic_ids = [
            FeedbackId::ClassicAudioGain,
            FeedbackId::ClassicAudioMixOption,
            FeedbackId::ClassicAudioMasterGain,
        ];
        let strip_ids = [
            FeedbackId::ChannelStripInputGain,
            FeedbackId::ChannelStripFaderGain,
            FeedbackId::ChannelStripMixOption,
            FeedbackId::ChannelStripMasterGain,
        ];

        let classic = build_registry(&CapabilityModel {
            audio: AudioArchitecture::Classic {
                inputs: vec![AudioInput::new(1, "Input 1")],
            },
            ..CapabilityModel::default_profile()
        })
        .unwrap();
        for id in classic_ids {
            assert!(classic.contains(&id));
        }
        for id in strip_ids {
            assert!(!classic.contains(&id), "{id} must not exist on classic");
        }

        let strip = build_registry(&CapabilityModel {
            audio: AudioArchitecture::ChannelStrip {
                inputs: vec![AudioInput::new(1, "Input 1")],
                monitor: false,
            },
            ..CapabilityModel::default_profile()
        })
        .unwrap();
        for id in strip_ids {
            assert!(strip.contains(&id));
        }
        for id in classic_ids {
            assert!(!strip.contains(&id), "{id} must not exist on channel strip");
        }
    }

    #[test]
    fn test_monitor_predicates_require_monitor_bus() {
        let without = build_registry(&CapabilityModel {
            audio: AudioArchitecture::ChannelStrip {
                inputs: vec![AudioInput::new(1, "Input 1")],
                monitor: false,
            },
            ..CapabilityModel::default_profile()
        })
        .unwrap();
        assert!(!without.contains(&FeedbackId::ChannelStripMonitorMuted));
        assert!(!without.contains(&FeedbackId::ChannelStripMonitorGain));

        let with = build_registry(&CapabilityModel {
            audio: AudioArchitecture::ChannelStrip {
                inputs: vec![AudioInput::new(1, "Input 1")],
                monitor: true,
            },
            ..CapabilityModel::default_profile()
        })
        .unwrap();
        assert!(with.contains(&FeedbackId::ChannelStripMonitorMuted));
        assert!(with.contains(&FeedbackId::ChannelStripMonitorGain));
    }

    #[test]
    fn test_key_frame_requires_dve() {
        let model = CapabilityModel {
            dves: 0,
            ..CapabilityModel::default_profile()
        };
        let registry = build_registry(&model).unwrap();
        assert!(!registry.contains(&FeedbackId::UpstreamKeyerKeyFrame));
        assert!(registry.contains(&FeedbackId::UpstreamKeyerOnAir));
    }

    #[test]
    fn test_display_ids_are_stable() {
        assert_eq!(FeedbackId::ProgramSources(1).to_string(), "program_source");
        assert_eq!(FeedbackId::ProgramSources(3).to_string(), "program_sources_3");
        assert_eq!(FeedbackId::ChannelStripMonitorGain.to_string(), "strip_audio_monitor_gain");
    }
}
