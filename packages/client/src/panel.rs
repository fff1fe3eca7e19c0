//! Status panel mirroring the latest server status.
//!
//! The browser control page writes every incoming payload into a single
//! page element, replacing whatever was there. This panel is the CLI
//! counterpart: it holds exactly one piece of text, the most recent payload,
//! verbatim.

/// The latest status text received from the server
#[derive(Debug, Default)]
pub struct StatusPanel {
    content: String,
}

impl StatusPanel {
    /// Create an empty panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire panel content with the given payload
    pub fn replace(&mut self, payload: &str) {
        self.content = payload.to_string();
    }

    /// The current panel content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render the panel for display
    pub fn render(&self) -> String {
        format!("\n← {}\n", self.content)
    }
}
