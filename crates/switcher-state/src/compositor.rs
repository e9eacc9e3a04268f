//! Multi-box compositor ("supersource") state.
//!
//! Analog geometry values are kept in the device's scaled integer domain;
//! the feedback layer converts to and from user-facing decimals.

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

/// One compositor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperSourceState {
    /// Art layer properties, absent until the device reports them.
    pub art: Option<SuperSourceArt>,

    /// Composition boxes.
    pub boxes: Vec<SuperSourceBox>,
}

/// Art (fill/key overlay) properties of a compositor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperSourceArt {
    /// Art fill source.
    pub fill_source: SourceId,

    /// Art key (cut) source.
    pub key_source: SourceId,

    /// Whether the art sits behind or in front of the boxes.
    pub placement: ArtPlacement,

    /// Whether the key is pre-multiplied.
    pub pre_multiplied: bool,

    /// Key clip, device domain 0..=1000 (tenths of a percent).
    pub clip: i32,

    /// Key gain, device domain 0..=1000 (tenths of a percent).
    pub gain: i32,

    /// Whether the key is inverted.
    pub invert_key: bool,
}

/// Art placement relative to the boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtPlacement {
    #[default]
    Background,
    Foreground,
}

impl ArtPlacement {
    /// Both placements.
    pub const ALL: [ArtPlacement; 2] = [Self::Background, Self::Foreground];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Foreground => "Foreground",
        }
    }

    /// Parse a string id back into a placement.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|placement| placement.id() == id)
    }
}

/// One composition box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperSourceBox {
    /// Whether the box is composited.
    pub enabled: bool,

    /// Source shown in the box.
    pub source: SourceId,

    /// Size, device domain 0..=1000 (option value x1000).
    pub size: i32,

    /// Horizontal position, device domain (option value x100).
    pub x: i32,

    /// Vertical position, device domain (option value x100).
    pub y: i32,

    /// Whether cropping is enabled.
    pub cropped: bool,

    /// Crop edges, device domain (option value x1000).
    pub crop_top: i32,
    pub crop_bottom: i32,
    pub crop_left: i32,
    pub crop_right: i32,
}
