//! Upstream and downstream keyer state.

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

/// One upstream keyer on a stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyerState {
    /// Whether the keyer is cut into the program output.
    pub on_air: bool,

    /// Fill source.
    pub fill_source: SourceId,

    /// Key frame the fly engine currently rests at, absent when the keyer
    /// has no fly properties.
    pub fly_key_frame: Option<KeyFrame>,
}

/// Fly-key key frame positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFrame {
    /// Not resting at a stored key frame.
    #[default]
    None,
    A,
    B,
}

impl KeyFrame {
    /// All positions.
    pub const ALL: [KeyFrame; 3] = [Self::None, Self::A, Self::B];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::A => "a",
            Self::B => "b",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Parse a string id back into a position.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|frame| frame.id() == id)
    }
}

/// One downstream keyer.
///
/// The `properties` and `sources` sub-nodes arrive in separate device
/// reports, so either may be briefly absent after connect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownstreamKeyerState {
    /// Whether the keyer is cut into the program output.
    pub on_air: bool,

    /// Keyer properties.
    pub properties: Option<DownstreamKeyerProperties>,

    /// Keyer source routing.
    pub sources: Option<DownstreamKeyerSources>,
}

/// Downstream keyer properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownstreamKeyerProperties {
    /// Whether the keyer is tied to the next transition.
    pub tie: bool,
}

/// Downstream keyer source routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownstreamKeyerSources {
    /// Fill source.
    pub fill_source: SourceId,

    /// Key (cut) source.
    pub key_source: SourceId,
}
