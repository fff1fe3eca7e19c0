//! CLI control client for the hibiki remote speaker.
//!
//! Opens one WebSocket connection to the control server with subprotocol
//! `protocolOne`, forwards stdin lines to the socket unchanged and mirrors
//! incoming status text into a status panel. There is no reconnection: when
//! the session ends, so does the process.

mod error;
mod panel;
mod session;
mod ui;

pub use error::ClientError;
pub use panel::StatusPanel;
pub use session::run_control_session;
