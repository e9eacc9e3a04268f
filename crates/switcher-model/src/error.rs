//! Error types for capability validation.

use thiserror::Error;

/// Errors raised when a capability model fails validation.
///
/// These only occur at construction time; once a model validates, every
/// downstream operation is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    /// A device must carry at least one mix stage.
    #[error("capability model reports zero mix stages")]
    NoStages,

    /// A compositor without boxes cannot composite anything.
    #[error("supersource reported without any boxes")]
    SuperSourceWithoutBoxes,

    /// A multiviewer without windows cannot bind sources.
    #[error("multiviewer reported without any windows")]
    MultiviewerWithoutWindows,
}
