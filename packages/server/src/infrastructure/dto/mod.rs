//! Data Transfer Objects (DTOs) for the control server.
//!
//! The WebSocket carries opaque text, so DTOs exist only for the HTTP API.

pub mod http;
