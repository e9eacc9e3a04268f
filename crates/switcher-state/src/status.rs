//! Streaming, recording and tally status.

use serde::{Deserialize, Serialize};

/// Streaming subsystem status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingState {
    /// Current status.
    pub status: StreamingStatus,
}

/// Mutually exclusive streaming phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingStatus {
    #[default]
    Idle,
    Connecting,
    Streaming,
    Stopping,
}

impl StreamingStatus {
    /// All phases.
    pub const ALL: [StreamingStatus; 4] = [
        Self::Idle,
        Self::Connecting,
        Self::Streaming,
        Self::Stopping,
    ];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Streaming => "streaming",
            Self::Stopping => "stopping",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Connecting => "Connecting",
            Self::Streaming => "Streaming",
            Self::Stopping => "Stopping",
        }
    }

    /// Parse a string id back into a phase.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }
}

/// Recording subsystem status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingState {
    /// Current status.
    pub status: RecordingStatus,
}

/// Mutually exclusive recording phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingStatus {
    #[default]
    Idle,
    Recording,
    Stopping,
}

impl RecordingStatus {
    /// All phases.
    pub const ALL: [RecordingStatus; 3] = [Self::Idle, Self::Recording, Self::Stopping];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Stopping => "stopping",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Recording => "Recording",
            Self::Stopping => "Stopping",
        }
    }

    /// Parse a string id back into a phase.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }
}

/// Tally flags for one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyState {
    /// Source contributes to the program output.
    pub program: bool,

    /// Source contributes to the preview output.
    pub preview: bool,
}
