//! Per-stage switching state: buses, transition engine, fade to black.

use serde::{Deserialize, Serialize};

use switcher_model::SourceId;

use crate::keyers::KeyerState;

/// One independently switchable mix stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageState {
    /// Source currently on the preview bus.
    pub preview_source: SourceId,

    /// Source currently on the program bus.
    pub program_source: SourceId,

    /// Transition engine state.
    pub transition: TransitionState,

    /// Fade-to-black state, absent until the device reports it.
    pub fade_to_black: Option<FadeToBlackState>,

    /// Upstream keyers on this stage.
    pub keyers: Vec<KeyerState>,
}

/// Transition engine state for one stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionState {
    /// Style armed for the next transition.
    pub style: TransitionStyle,

    /// Layer ids armed for the next transition, in device-reported order.
    /// Id 0 is the background layer, ids 1..=N the upstream keyers.
    pub selection: Vec<u8>,

    /// Whether a transition is currently running.
    pub in_transition: bool,

    /// Per-style transition rates.
    pub rates: TransitionRates,
}

/// Per-style transition rates in frames.
///
/// A style's rate is absent until the device reports settings for it.
/// Sting transitions have no rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRates {
    pub mix: Option<u16>,
    pub dip: Option<u16>,
    pub wipe: Option<u16>,
    pub dve: Option<u16>,
}

impl TransitionRates {
    /// The rate for the given style, if the device has reported one.
    pub fn rate(&self, style: TransitionStyle) -> Option<u16> {
        match style {
            TransitionStyle::Mix => self.mix,
            TransitionStyle::Dip => self.dip,
            TransitionStyle::Wipe => self.wipe,
            TransitionStyle::Dve => self.dve,
            TransitionStyle::Sting => None,
        }
    }
}

/// Transition styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    #[default]
    Mix,
    Dip,
    Wipe,
    Dve,
    Sting,
}

impl TransitionStyle {
    /// All styles, in device order.
    pub const ALL: [TransitionStyle; 5] = [
        Self::Mix,
        Self::Dip,
        Self::Wipe,
        Self::Dve,
        Self::Sting,
    ];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Mix => "mix",
            Self::Dip => "dip",
            Self::Wipe => "wipe",
            Self::Dve => "dve",
            Self::Sting => "sting",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mix => "Mix",
            Self::Dip => "Dip",
            Self::Wipe => "Wipe",
            Self::Dve => "DVE",
            Self::Sting => "Sting",
        }
    }

    /// Parse a string id back into a style.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }
}

/// Fade-to-black state for one stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeToBlackState {
    /// Current status; exactly one applies at a time.
    pub status: FadeToBlackStatus,

    /// Fade rate in frames.
    pub rate: u16,
}

/// Mutually exclusive fade-to-black phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeToBlackStatus {
    /// Output is live.
    #[default]
    Off,

    /// Fade is running in either direction.
    Fading,

    /// Output is fully black.
    FullyBlack,
}

impl FadeToBlackStatus {
    /// All phases.
    pub const ALL: [FadeToBlackStatus; 3] = [Self::Off, Self::Fading, Self::FullyBlack];

    /// Stable string id for option round-trips.
    pub fn id(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fading => "fading",
            Self::FullyBlack => "on",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Fading => "Fading",
            Self::FullyBlack => "On (fully black)",
        }
    }

    /// Parse a string id back into a phase.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup_per_style() {
        let rates = TransitionRates {
            mix: Some(25),
            dip: None,
            wipe: Some(50),
            dve: None,
        };
        assert_eq!(rates.rate(TransitionStyle::Mix), Some(25));
        assert_eq!(rates.rate(TransitionStyle::Dip), None);
        assert_eq!(rates.rate(TransitionStyle::Wipe), Some(50));
        assert_eq!(rates.rate(TransitionStyle::Sting), None);
    }

    #[test]
    fn test_style_id_round_trip() {
        for style in TransitionStyle::ALL {
            assert_eq!(TransitionStyle::parse(style.id()), Some(style));
        }
        assert_eq!(TransitionStyle::parse("bogus"), None);
    }

    #[test]
    fn test_fade_to_black_id_round_trip() {
        for status in FadeToBlackStatus::ALL {
            assert_eq!(FadeToBlackStatus::parse(status.id()), Some(status));
        }
    }
}
