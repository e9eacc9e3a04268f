//! The snapshot root and its read-only accessors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

use crate::audio::{AudioState, ChannelStripAudioState, ClassicAudioState};
use crate::compositor::{SuperSourceBox, SuperSourceState};
use crate::keyers::{DownstreamKeyerState, KeyerState};
use crate::macros::MacroSystemState;
use crate::media::{MediaPlayerState, MultiviewerState, MultiviewerWindow};
use crate::stage::StageState;
use crate::status::{RecordingState, StreamingState, TallyState};

/// Live operational state of a device, refreshed by the state-sync layer.
///
/// The default value is the just-connected empty tree. Accessors return
/// `None` for anything the device has not reported yet; feedback
/// evaluation degrades that to `false` rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Mix stages, indexed by stage number.
    pub stages: Vec<StageState>,

    /// Downstream keyers.
    pub downstream_keyers: Vec<DownstreamKeyerState>,

    /// Compositors.
    pub super_sources: Vec<SuperSourceState>,

    /// Source routed to each aux bus; inner `None` while unreported.
    pub aux_routing: Vec<Option<SourceId>>,

    /// Multiviewers.
    pub multiviewers: Vec<MultiviewerState>,

    /// Media players.
    pub media_players: Vec<MediaPlayerState>,

    /// Macro subsystem.
    pub macros: MacroSystemState,

    /// Audio mixer, tagged by architecture.
    pub audio: AudioState,

    /// Streaming status, absent when unsupported or unreported.
    pub streaming: Option<StreamingState>,

    /// Recording status, absent when unsupported or unreported.
    pub recording: Option<RecordingState>,

    /// Tally flags by source.
    pub tally: BTreeMap<SourceId, TallyState>,
}

impl StateSnapshot {
    /// The stage at `index`, if reported.
    pub fn stage(&self, index: usize) -> Option<&StageState> {
        self.stages.get(index)
    }

    /// The upstream keyer `keyer` on stage `stage`, if reported.
    pub fn upstream_keyer(&self, stage: usize, keyer: usize) -> Option<&KeyerState> {
        self.stages.get(stage)?.keyers.get(keyer)
    }

    /// The downstream keyer at `index`, if reported.
    pub fn downstream_keyer(&self, index: usize) -> Option<&DownstreamKeyerState> {
        self.downstream_keyers.get(index)
    }

    /// The compositor at `index`, if reported.
    pub fn super_source(&self, index: usize) -> Option<&SuperSourceState> {
        self.super_sources.get(index)
    }

    /// Box `box_index` of compositor `index`, if reported.
    pub fn super_source_box(&self, index: usize, box_index: usize) -> Option<&SuperSourceBox> {
        self.super_sources.get(index)?.boxes.get(box_index)
    }

    /// The source routed to aux bus `index`, if reported.
    pub fn aux_source(&self, index: usize) -> Option<SourceId> {
        self.aux_routing.get(index).copied().flatten()
    }

    /// Window `window` of multiviewer `index`, if reported.
    pub fn multiviewer_window(&self, index: usize, window: usize) -> Option<&MultiviewerWindow> {
        self.multiviewers.get(index)?.windows.get(window)
    }

    /// The media player at `index`, if reported.
    pub fn media_player(&self, index: usize) -> Option<&MediaPlayerState> {
        self.media_players.get(index)
    }

    /// Classic audio state, if that architecture is active.
    pub fn classic_audio(&self) -> Option<&ClassicAudioState> {
        match &self.audio {
            AudioState::Classic(state) => Some(state),
            _ => None,
        }
    }

    /// Channel-strip audio state, if that architecture is active.
    pub fn channel_strip_audio(&self) -> Option<&ChannelStripAudioState> {
        match &self.audio {
            AudioState::ChannelStrip(state) => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ClassicAudioState;

    #[test]
    fn test_empty_snapshot_resolves_nothing() {
        let snapshot = StateSnapshot::default();
        assert!(snapshot.stage(0).is_none());
        assert!(snapshot.upstream_keyer(0, 0).is_none());
        assert!(snapshot.downstream_keyer(0).is_none());
        assert!(snapshot.super_source_box(0, 0).is_none());
        assert!(snapshot.aux_source(0).is_none());
        assert!(snapshot.multiviewer_window(0, 0).is_none());
        assert!(snapshot.media_player(0).is_none());
        assert!(snapshot.classic_audio().is_none());
        assert!(snapshot.channel_strip_audio().is_none());
    }

    #[test]
    fn test_aux_source_flattens_unreported_buses() {
        let snapshot = StateSnapshot {
            aux_routing: vec![Some(3), None],
            ..Default::default()
        };
        assert_eq!(snapshot.aux_source(0), Some(3));
        assert_eq!(snapshot.aux_source(1), None);
        assert_eq!(snapshot.aux_source(2), None);
    }

    #[test]
    fn test_audio_accessors_are_exclusive() {
        let snapshot = StateSnapshot {
            audio: AudioState::Classic(ClassicAudioState::default()),
            ..Default::default()
        };
        assert!(snapshot.classic_audio().is_some());
        assert!(snapshot.channel_strip_audio().is_none());
    }

    #[test]
    fn test_stage_keyer_lookup() {
        let snapshot = StateSnapshot {
            stages: vec![StageState {
                keyers: vec![KeyerState::default(), KeyerState::default()],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(snapshot.upstream_keyer(0, 1).is_some());
        assert!(snapshot.upstream_keyer(0, 2).is_none());
        assert!(snapshot.upstream_keyer(1, 0).is_none());
    }
}
