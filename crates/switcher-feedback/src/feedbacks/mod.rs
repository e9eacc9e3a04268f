//! Per-subsystem feedback registries.
//!
//! Each module contributes its entries only when the capability model
//! carries the subsystem; a zero count means the ids are absent, not
//! disabled.

pub(crate) mod audio;
pub(crate) mod downstream_keyers;
pub(crate) mod fade_to_black;
pub(crate) mod macros;
pub(crate) mod routing;
pub(crate) mod sources;
pub(crate) mod stream_record;
pub(crate) mod super_source;
pub(crate) mod tally;
pub(crate) mod transition;
pub(crate) mod upstream_keyers;

use switcher_model::{CapabilityModel, SourceId};
use switcher_state::{StageState, StateSnapshot};

use crate::definition::FeedbackDefinition;
use crate::options::OptionValues;
use crate::registry::FeedbackId;

pub(crate) type FeedbackSet = Vec<(FeedbackId, FeedbackDefinition)>;

/// Union of all subsystem registries for one model.
pub(crate) fn all(model: &CapabilityModel) -> FeedbackSet {
    let mut set = FeedbackSet::new();
    set.extend(tally::feedbacks(model));
    set.extend(sources::feedbacks(model));
    set.extend(upstream_keyers::feedbacks(model));
    set.extend(downstream_keyers::feedbacks(model));
    set.extend(transition::feedbacks(model));
    set.extend(fade_to_black::feedbacks(model));
    set.extend(super_source::feedbacks(model));
    set.extend(routing::feedbacks(model));
    set.extend(macros::feedbacks(model));
    set.extend(stream_record::feedbacks(model));
    set.extend(audio::feedbacks(model));
    set
}

/// The stage the given option addresses, if the snapshot has it.
pub(crate) fn stage_for<'a>(
    snapshot: &'a StateSnapshot,
    options: &OptionValues,
    id: &str,
) -> Option<&'a StageState> {
    snapshot.stage(options.index_value(id)?)
}

/// A source-id option value, if present and in range.
pub(crate) fn source_value(options: &OptionValues, id: &str) -> Option<SourceId> {
    SourceId::try_from(options.int_value(id)?).ok()
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared model and snapshot builders for feedback tests.

    use std::collections::BTreeMap;

    use switcher_model::{AudioArchitecture, AudioInput, CapabilityModel, VideoSource};
    use switcher_state::{
        ArtPlacement, AudioState, ClassicAudioState, ClassicChannel, ClassicMaster,
        DownstreamKeyerProperties, DownstreamKeyerSources, DownstreamKeyerState, FadeToBlackState,
        FadeToBlackStatus, KeyFrame, KeyerState, MacroPlayer, MacroPlayerState,
        MacroRecorderState, MacroSystemState, MediaPlayerSource, MediaPlayerState,
        MultiviewerState, MultiviewerWindow, RecordingState, RecordingStatus, RegisteredMacro,
        StageState, StateSnapshot, StreamingState, StreamingStatus, SuperSourceArt,
        SuperSourceBox, SuperSourceState, TallyState, TransitionRates, TransitionState,
        TransitionStyle,
    };

    /// A mid-range model: two stages with two keyers each, one compositor,
    /// classic audio, streaming and recording.
    pub(crate) fn model() -> CapabilityModel {
        CapabilityModel {
            stages: 2,
            keyers_per_stage: 2,
            downstream_keyers: 2,
            dves: 1,
            super_sources: 1,
            super_source_boxes: 4,
            aux_buses: 3,
            macros: 100,
            media_players: 2,
            media_stills: 20,
            media_clips: 2,
            multiviewers: 1,
            multiviewer_windows: 10,
            streaming: true,
            recording: true,
            audio: AudioArchitecture::Classic {
                inputs: vec![AudioInput::new(1, "Input 1"), AudioInput::new(2, "Input 2")],
            },
            sources: vec![
                VideoSource::new(0, "Black"),
                VideoSource::new(1, "Camera 1"),
                VideoSource::new(2, "Camera 2"),
                VideoSource::new(3, "Camera 3"),
            ],
        }
    }

    fn stage(preview: u16, program: u16) -> StageState {
        StageState {
            preview_source: preview,
            program_source: program,
            transition: TransitionState {
                style: TransitionStyle::Wipe,
                selection: vec![1, 0],
                in_transition: false,
                rates: TransitionRates {
                    mix: Some(25),
                    dip: None,
                    wipe: Some(50),
                    dve: None,
                },
            },
            fade_to_black: Some(FadeToBlackState {
                status: FadeToBlackStatus::Off,
                rate: 30,
            }),
            keyers: vec![
                KeyerState {
                    on_air: true,
                    fill_source: 3,
                    fly_key_frame: Some(KeyFrame::A),
                },
                KeyerState {
                    on_air: false,
                    fill_source: 1,
                    fly_key_frame: None,
                },
            ],
        }
    }

    /// A populated snapshot consistent with [`model`].
    pub(crate) fn snapshot() -> StateSnapshot {
        StateSnapshot {
            stages: vec![stage(2, 1), stage(3, 2)],
            downstream_keyers: vec![
                DownstreamKeyerState {
                    on_air: true,
                    properties: Some(DownstreamKeyerProperties { tie: true }),
                    sources: Some(DownstreamKeyerSources {
                        fill_source: 3,
                        key_source: 3,
                    }),
                },
                DownstreamKeyerState::default(),
            ],
            super_sources: vec![SuperSourceState {
                art: Some(SuperSourceArt {
                    fill_source: 1,
                    key_source: 2,
                    placement: ArtPlacement::Foreground,
                    pre_multiplied: true,
                    clip: 500,
                    gain: 123,
                    invert_key: false,
                }),
                boxes: vec![
                    SuperSourceBox {
                        enabled: true,
                        source: 2,
                        size: 700,
                        x: -1600,
                        y: 200,
                        cropped: true,
                        crop_top: 1004,
                        crop_bottom: 0,
                        crop_left: 250,
                        crop_right: 0,
                    },
                    SuperSourceBox::default(),
                ],
            }],
            aux_routing: vec![Some(2), None, Some(0)],
            multiviewers: vec![MultiviewerState {
                windows: (0..10).map(|w| MultiviewerWindow { source: w }).collect(),
            }],
            media_players: vec![
                MediaPlayerState {
                    source: MediaPlayerSource::Still { index: 4 },
                },
                MediaPlayerState {
                    source: MediaPlayerSource::Clip { index: 1 },
                },
            ],
            macros: MacroSystemState {
                player: MacroPlayer {
                    state: MacroPlayerState::Running { macro_index: 6 },
                    looping: true,
                },
                recorder: MacroRecorderState::Recording { macro_index: 9 },
                registered: BTreeMap::from([(
                    6,
                    RegisteredMacro {
                        is_used: true,
                        name: Some("Opening".to_string()),
                    },
                )]),
            },
            audio: AudioState::Classic(ClassicAudioState {
                channels: BTreeMap::from([
                    (
                        1,
                        ClassicChannel {
                            gain: -6.0,
                            mix_option: switcher_state::AudioMixOption::On,
                        },
                    ),
                    (
                        2,
                        ClassicChannel {
                            gain: 0.0,
                            mix_option: switcher_state::AudioMixOption::AudioFollowVideo,
                        },
                    ),
                ]),
                master: Some(ClassicMaster { gain: 1.5 }),
            }),
            streaming: Some(StreamingState {
                status: StreamingStatus::Streaming,
            }),
            recording: Some(RecordingState {
                status: RecordingStatus::Idle,
            }),
            tally: BTreeMap::from([
                (
                    1,
                    TallyState {
                        program: true,
                        preview: false,
                    },
                ),
                (
                    2,
                    TallyState {
                        program: false,
                        preview: true,
                    },
                ),
            ]),
        }
    }
}
