//! Capability-gated feedback registry.
//!
//! Given a resolved [`switcher_model::CapabilityModel`], [`build_registry`]
//! produces the full set of boolean predicates ("feedbacks") a control
//! surface can evaluate against a live [`switcher_state::StateSnapshot`].
//! Each feedback carries a declarative option schema, a total `evaluate`
//! function and, for most, a `learn` function that reads the option values
//! which would make it true right now.
//!
//! The registry's id set is a pure function of the capability model: the
//! same model always yields the same feedbacks, independent of snapshot
//! content. Evaluation never errors; malformed options and transiently
//! missing state degrade to `false` (or `None` from learn).

mod compare;
mod definition;
mod error;
mod feedbacks;
mod options;
mod registry;
mod schema;
mod selection;

pub use compare::{compare_as_int, NumberComparator};
pub use definition::{FeedbackDefinition, Rgb, StyleHint};
pub use error::RegistryError;
pub use options::{DropdownChoice, OptionParam, OptionValue, OptionValues};
pub use registry::{build_registry, FeedbackId, FeedbackRegistry};
pub use schema::MEDIA_PLAYER_CLIP_OFFSET;
pub use selection::{calculate_transition_selection, MatchMethod};
