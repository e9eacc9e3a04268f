//! Error types for registry construction.

use thiserror::Error;

use switcher_model::CapabilityError;

/// Errors raised while building a feedback registry.
///
/// Construction is the only fallible operation in this crate; evaluation
/// and learn are total.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The capability model failed validation.
    #[error("invalid capability model: {0}")]
    InvalidModel(#[from] CapabilityError),
}
