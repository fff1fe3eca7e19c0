//! Domain model of the remote speaker.
//!
//! The speaker is the single entity commands act on: a Bluetooth radio
//! (on/off), a timed pairing-mode window and a playback volume. Applying a
//! command mutates the state and yields a [`StatusReport`] with the
//! human-readable text that gets pushed back to the controllers.

use hibiki_shared::command::Command;

/// Power state of the Bluetooth radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
}

/// Playback volume, in discrete steps.
///
/// The range mirrors the music stream of the speaker hardware: 0..=15,
/// one step per `volume_up` / `volume_down` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    /// Maximum volume step
    pub const MAX: u8 = 15;
    /// Volume a freshly booted speaker starts at
    pub const DEFAULT: Volume = Volume(7);

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One step louder, saturating at [`Volume::MAX`]
    pub fn up(self) -> Volume {
        Volume(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One step quieter, saturating at zero
    pub fn down(self) -> Volume {
        Volume(self.0.saturating_sub(1))
    }
}

/// Human-readable outcome of applying a command.
///
/// The text is the exact payload pushed to the controllers; they render it
/// verbatim into their status panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub text: String,
}

impl StatusReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The speaker entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerState {
    pub power: PowerState,
    /// While set, the speaker accepts pairing requests until this instant
    /// (unix millis). Cleared by `turn_off`.
    pub discoverable_until_millis: Option<i64>,
    pub volume: Volume,
    /// Unix timestamp (milliseconds) of the last state change
    pub updated_at_millis: i64,
}

impl SpeakerState {
    /// Pairing mode stays open this long after `make_discoverable`.
    pub const DISCOVERABLE_TIMEOUT_SECS: i64 = 60;

    /// A freshly booted speaker: radio off, not discoverable, default volume.
    pub fn new(now_millis: i64) -> Self {
        Self {
            power: PowerState::Off,
            discoverable_until_millis: None,
            volume: Volume::DEFAULT,
            updated_at_millis: now_millis,
        }
    }

    /// Whether the speaker accepts pairing requests at the given instant.
    pub fn is_discoverable(&self, now_millis: i64) -> bool {
        matches!(self.discoverable_until_millis, Some(until) if now_millis < until)
    }

    /// Apply a command and report the outcome.
    ///
    /// Commands other than `turn_on` and `make_discoverable` require the
    /// radio to be on; while it is off they report a rejection without
    /// touching the state. `make_discoverable` powers the radio on first
    /// when needed.
    pub fn apply(&mut self, command: Command, now_millis: i64) -> StatusReport {
        if self.power == PowerState::Off
            && !matches!(
                command,
                Command::TurnOnBluetooth | Command::MakeDiscoverable
            )
        {
            return StatusReport::new("Bluetooth is off. Turn it on first.");
        }

        let report = match command {
            Command::TurnOnBluetooth => {
                if self.power == PowerState::On {
                    return StatusReport::new("Bluetooth is already on.");
                }
                self.power = PowerState::On;
                StatusReport::new("Bluetooth is on.")
            }
            Command::TurnOffBluetooth => {
                self.power = PowerState::Off;
                self.discoverable_until_millis = None;
                StatusReport::new("Bluetooth is off.")
            }
            Command::MakeDiscoverable => {
                self.power = PowerState::On;
                self.discoverable_until_millis =
                    Some(now_millis + Self::DISCOVERABLE_TIMEOUT_SECS * 1000);
                StatusReport::new(format!(
                    "Bluetooth is discoverable for {} seconds.",
                    Self::DISCOVERABLE_TIMEOUT_SECS
                ))
            }
            Command::DisconnectAllDevices => {
                StatusReport::new("Disconnected all connected devices.")
            }
            Command::UnpairAllDevices => StatusReport::new("Unpaired all devices."),
            Command::VolumeUp => {
                self.volume = self.volume.up();
                StatusReport::new(format!("Volume: {}/{}", self.volume.value(), Volume::MAX))
            }
            Command::VolumeDown => {
                self.volume = self.volume.down();
                StatusReport::new(format!("Volume: {}/{}", self.volume.value(), Volume::MAX))
            }
        };

        self.updated_at_millis = now_millis;
        report
    }

    /// One-line summary pushed to a controller when it attaches.
    pub fn status_line(&self, now_millis: i64) -> String {
        match self.power {
            PowerState::Off => "Bluetooth is off.".to_string(),
            PowerState::On => {
                let discoverable = if self.is_discoverable(now_millis) {
                    " Speaker is discoverable."
                } else {
                    ""
                };
                format!(
                    "Bluetooth is on. Volume: {}/{}.{}",
                    self.volume.value(),
                    Volume::MAX,
                    discoverable
                )
            }
        }
    }
}
