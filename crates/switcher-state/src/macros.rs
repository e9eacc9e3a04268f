//! Macro player, recorder and pool state.
//!
//! The player and recorder are small explicit state machines; mutual
//! exclusivity of their phases is owned here (by the state-sync layer that
//! fills the snapshot), never re-derived by feedback evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole macro subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSystemState {
    /// Stored-sequence player.
    pub player: MacroPlayer,

    /// Recorder state.
    pub recorder: MacroRecorderState,

    /// Registered macros by pool index.
    pub registered: BTreeMap<u32, RegisteredMacro>,
}

/// Macro player state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlayer {
    /// Current playback phase.
    pub state: MacroPlayerState,

    /// Whether playback loops.
    pub looping: bool,
}

/// Mutually exclusive macro player phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroPlayerState {
    /// Nothing playing.
    #[default]
    Idle,

    /// A macro is running.
    Running { macro_index: u32 },

    /// A macro is paused at a user-wait step.
    Waiting { macro_index: u32 },
}

/// Mutually exclusive macro recorder phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroRecorderState {
    /// Not recording.
    #[default]
    Idle,

    /// Recording into a pool slot.
    Recording { macro_index: u32 },
}

/// A macro registered in the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredMacro {
    /// Whether the slot holds a usable macro.
    pub is_used: bool,

    /// Macro name, if set.
    pub name: Option<String>,
}
