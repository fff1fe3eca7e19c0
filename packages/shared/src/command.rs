//! Command vocabulary for the remote speaker.
//!
//! Commands travel over the WebSocket as plain wire strings; the client
//! treats them as opaque text, only the server parses them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a wire string does not match any known command.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command: '{0}'")]
pub struct UnknownCommand(pub String);

/// A control command the speaker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the Bluetooth radio on (`turn_on`)
    TurnOnBluetooth,
    /// Turn the Bluetooth radio off (`turn_off`)
    TurnOffBluetooth,
    /// Make the speaker discoverable to new devices (`make_discoverable`)
    MakeDiscoverable,
    /// Disconnect every currently connected device (`disconnect_device`)
    DisconnectAllDevices,
    /// Unpair every paired device (`unpair_all_device`)
    UnpairAllDevices,
    /// Raise the playback volume by one step (`volume_up`)
    VolumeUp,
    /// Lower the playback volume by one step (`volume_down`)
    VolumeDown,
}

impl Command {
    /// Every command, in wire order. Used by the client to print help.
    pub const ALL: [Command; 7] = [
        Command::TurnOnBluetooth,
        Command::TurnOffBluetooth,
        Command::MakeDiscoverable,
        Command::DisconnectAllDevices,
        Command::UnpairAllDevices,
        Command::VolumeUp,
        Command::VolumeDown,
    ];

    /// The wire string for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::TurnOnBluetooth => "turn_on",
            Command::TurnOffBluetooth => "turn_off",
            Command::MakeDiscoverable => "make_discoverable",
            Command::DisconnectAllDevices => "disconnect_device",
            Command::UnpairAllDevices => "unpair_all_device",
            Command::VolumeUp => "volume_up",
            Command::VolumeDown => "volume_down",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parse a wire string. Surrounding whitespace is ignored since
    /// commands typically arrive as stdin lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "turn_on" => Ok(Command::TurnOnBluetooth),
            "turn_off" => Ok(Command::TurnOffBluetooth),
            "make_discoverable" => Ok(Command::MakeDiscoverable),
            "disconnect_device" => Ok(Command::DisconnectAllDevices),
            "unpair_all_device" => Ok(Command::UnpairAllDevices),
            "volume_up" => Ok(Command::VolumeUp),
            "volume_down" => Ok(Command::VolumeDown),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
