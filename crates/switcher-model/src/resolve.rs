//! Deterministic resolution of device-reported capabilities.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::{AudioArchitecture, AudioInput, CapabilityModel, VideoSource};

/// Raw capability record as reported by the device.
///
/// Shortly after connect the device may have announced only part of its
/// capability set, so every field is optional. Missing fields fall back to
/// the default profile during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedCapabilities {
    pub stages: Option<u8>,
    pub keyers_per_stage: Option<u8>,
    pub downstream_keyers: Option<u8>,
    pub dves: Option<u8>,
    pub super_sources: Option<u8>,
    pub super_source_boxes: Option<u8>,
    pub aux_buses: Option<u8>,
    pub macros: Option<u16>,
    pub media_players: Option<u8>,
    pub media_stills: Option<u8>,
    pub media_clips: Option<u8>,
    pub multiviewers: Option<u8>,
    pub multiviewer_windows: Option<u8>,
    pub streaming: Option<bool>,
    pub recording: Option<bool>,
    pub audio: Option<AudioArchitecture>,
    pub sources: Option<Vec<VideoSource>>,
}

impl CapabilityModel {
    /// Resolve a usable model from a possibly partial device report.
    ///
    /// Field-wise: the reported value wins, the default fills the gap.
    /// Never fails; the result may under-report capability for a few
    /// refresh cycles until the device finishes announcing itself.
    pub fn resolve(reported: &ReportedCapabilities, defaults: &CapabilityModel) -> CapabilityModel {
        let model = CapabilityModel {
            stages: reported.stages.unwrap_or(defaults.stages),
            keyers_per_stage: reported.keyers_per_stage.unwrap_or(defaults.keyers_per_stage),
            downstream_keyers: reported
                .downstream_keyers
                .unwrap_or(defaults.downstream_keyers),
            dves: reported.dves.unwrap_or(defaults.dves),
            super_sources: reported.super_sources.unwrap_or(defaults.super_sources),
            super_source_boxes: reported
                .super_source_boxes
                .unwrap_or(defaults.super_source_boxes),
            aux_buses: reported.aux_buses.unwrap_or(defaults.aux_buses),
            macros: reported.macros.unwrap_or(defaults.macros),
            media_players: reported.media_players.unwrap_or(defaults.media_players),
            media_stills: reported.media_stills.unwrap_or(defaults.media_stills),
            media_clips: reported.media_clips.unwrap_or(defaults.media_clips),
            multiviewers: reported.multiviewers.unwrap_or(defaults.multiviewers),
            multiviewer_windows: reported
                .multiviewer_windows
                .unwrap_or(defaults.multiviewer_windows),
            streaming: reported.streaming.unwrap_or(defaults.streaming),
            recording: reported.recording.unwrap_or(defaults.recording),
            audio: reported
                .audio
                .clone()
                .unwrap_or_else(|| defaults.audio.clone()),
            sources: reported
                .sources
                .clone()
                .unwrap_or_else(|| defaults.sources.clone()),
        };

        debug!(
            stages = model.stages,
            keyers = model.keyers_per_stage,
            aux_buses = model.aux_buses,
            "resolved capability model"
        );

        model
    }

    /// The fixed fallback profile used for fields the device has not
    /// reported yet.
    pub fn default_profile() -> CapabilityModel {
        CapabilityModel {
            stages: 1,
            keyers_per_stage: 1,
            downstream_keyers: 1,
            dves: 1,
            super_sources: 0,
            super_source_boxes: 4,
            aux_buses: 3,
            macros: 100,
            media_players: 2,
            media_stills: 20,
            media_clips: 2,
            multiviewers: 1,
            multiviewer_windows: 10,
            streaming: false,
            recording: false,
            audio: AudioArchitecture::Classic {
                inputs: (1..=4).map(|i| AudioInput::new(i, format!("Input {i}"))).collect(),
            },
            sources: default_sources(),
        }
    }
}

fn default_sources() -> Vec<VideoSource> {
    let mut sources = vec![VideoSource::new(0, "Black")];
    sources.extend((1..=4).map(|i| VideoSource::new(i, format!("Camera {i}"))));
    sources.push(VideoSource::new(1000, "Color Bars"));
    sources.push(VideoSource::new(2001, "Color 1"));
    sources.push(VideoSource::new(2002, "Color 2"));
    sources.push(VideoSource::new(3010, "Media Player 1"));
    sources.push(VideoSource::new(3011, "Media Player 1 Key"));
    sources.push(VideoSource::new(3020, "Media Player 2"));
    sources.push(VideoSource::new(3021, "Media Player 2 Key"));
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_resolves_to_defaults() {
        let defaults = CapabilityModel::default_profile();
        let resolved = CapabilityModel::resolve(&ReportedCapabilities::default(), &defaults);
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_reported_fields_take_precedence() {
        let defaults = CapabilityModel::default_profile();
        let reported = ReportedCapabilities {
            stages: Some(4),
            keyers_per_stage: Some(4),
            streaming: Some(true),
            audio: Some(AudioArchitecture::ChannelStrip {
                inputs: vec![AudioInput::new(1, "Input 1")],
                monitor: true,
            }),
            ..Default::default()
        };

        let resolved = CapabilityModel::resolve(&reported, &defaults);
        assert_eq!(resolved.stages, 4);
        assert_eq!(resolved.keyers_per_stage, 4);
        assert!(resolved.streaming);
        assert!(matches!(
            resolved.audio,
            AudioArchitecture::ChannelStrip { monitor: true, .. }
        ));

        // Unreported fields still come from the defaults.
        assert_eq!(resolved.aux_buses, defaults.aux_buses);
        assert_eq!(resolved.macros, defaults.macros);
        assert_eq!(resolved.sources, defaults.sources);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let defaults = CapabilityModel::default_profile();
        let reported = ReportedCapabilities {
            stages: Some(2),
            ..Default::default()
        };
        let a = CapabilityModel::resolve(&reported, &defaults);
        let b = CapabilityModel::resolve(&reported, &defaults);
        assert_eq!(a, b);
    }
}
