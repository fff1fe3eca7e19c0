//! Controller identity.
//!
//! Every attached WebSocket is a controller; the browser page and the CLI
//! client carry no identity of their own, so the server assigns one on
//! attach.

use uuid::Uuid;

/// Unique identifier of an attached controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(Uuid);

impl ControllerId {
    /// Generate a fresh controller ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ControllerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
