//! Media player and multiviewer state.

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

/// One media player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPlayerState {
    /// What the player currently shows.
    pub source: MediaPlayerSource,
}

impl Default for MediaPlayerState {
    fn default() -> Self {
        Self {
            source: MediaPlayerSource::Still { index: 0 },
        }
    }
}

/// What a media player is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlayerSource {
    /// A still from the media pool.
    Still { index: u16 },

    /// A clip from the media pool.
    Clip { index: u16 },
}

/// One multiviewer monitoring grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiviewerState {
    /// Window tiles, indexed by window number.
    pub windows: Vec<MultiviewerWindow>,
}

/// One multiviewer window tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiviewerWindow {
    /// Source bound to this window.
    pub source: SourceId,
}
