//! Shared library for the hibiki remote speaker control application.
//!
//! Holds the pieces both binaries agree on: the command vocabulary, the
//! WebSocket subprotocol identifier, logging setup and time utilities.

pub mod command;
pub mod logger;
pub mod time;

/// WebSocket subprotocol requested during the handshake.
///
/// The control page and the CLI client both request this identifier; the
/// server selects it back. It carries no further semantics on the wire.
pub const SUBPROTOCOL: &str = "protocolOne";

/// Default TCP port the control server listens on.
pub const DEFAULT_PORT: u16 = 8085;
