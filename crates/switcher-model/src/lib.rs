//! Static capability description of a switcher device variant.
//!
//! A [`CapabilityModel`] records which subsystems a device variant carries
//! and how many of each. It is resolved once per connection (or model
//! switch) and never mutated afterwards; the feedback registry is a pure
//! function of it.

mod capabilities;
mod error;
mod resolve;

pub use capabilities::{
    AudioArchitecture, AudioInput, CapabilityModel, SourceId, VideoSource,
};
pub use error::CapabilityError;
pub use resolve::ReportedCapabilities;
