//! Control server for the hibiki remote speaker.
//!
//! Serves the browser control page over HTTP, accepts WebSocket control
//! connections with subprotocol `protocolOne`, dispatches incoming command
//! strings against the speaker domain model and pushes status text back to
//! every attached controller.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
