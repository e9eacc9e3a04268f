//! Live operational state of a switcher device.
//!
//! The [`StateSnapshot`] tree is owned and refreshed by an external
//! state-sync component; this crate only defines its shape and read-only
//! accessors. Feedback evaluation treats a missing sub-node as a transient
//! desync, never as an error.

mod audio;
mod compositor;
mod keyers;
mod macros;
mod media;
mod snapshot;
mod stage;
mod status;

pub use audio::{
    AudioMixOption, AudioState, ChannelStripAudioState, ChannelStripInput, ChannelStripMaster,
    ChannelStripMonitor, ChannelStripSource, ClassicAudioState, ClassicChannel, ClassicMaster,
};
pub use compositor::{ArtPlacement, SuperSourceArt, SuperSourceBox, SuperSourceState};
pub use keyers::{
    DownstreamKeyerProperties, DownstreamKeyerSources, DownstreamKeyerState, KeyFrame, KeyerState,
};
pub use macros::{MacroPlayer, MacroPlayerState, MacroRecorderState, MacroSystemState, RegisteredMacro};
pub use media::{MediaPlayerSource, MediaPlayerState, MultiviewerState, MultiviewerWindow};
pub use snapshot::StateSnapshot;
pub use stage::{
    FadeToBlackState, FadeToBlackStatus, StageState, TransitionRates, TransitionState,
    TransitionStyle,
};
pub use status::{RecordingState, RecordingStatus, StreamingState, StreamingStatus, TallyState};
