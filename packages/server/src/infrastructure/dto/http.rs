//! HTTP API response DTOs.

use serde::Serialize;

use crate::domain::{PowerState, SpeakerState, Volume};
use hibiki_shared::time::timestamp_to_rfc3339;

/// Speaker state as returned by `GET /api/state`
#[derive(Debug, Serialize)]
pub struct SpeakerStateDto {
    pub power: &'static str,
    pub discoverable: bool,
    pub volume: u8,
    pub volume_max: u8,
    pub updated_at: String,
}

impl SpeakerStateDto {
    /// Build the response body from a snapshot and the instant it was taken.
    ///
    /// The pairing window is timed, so `discoverable` depends on when the
    /// snapshot is observed.
    pub fn new(state: SpeakerState, now_millis: i64) -> Self {
        Self {
            power: match state.power {
                PowerState::On => "on",
                PowerState::Off => "off",
            },
            discoverable: state.is_discoverable(now_millis),
            volume: state.volume.value(),
            volume_max: Volume::MAX,
            updated_at: timestamp_to_rfc3339(state.updated_at_millis),
        }
    }
}
