//! UI utilities for the client.

use std::io::Write;

/// Redisplay the prompt after receiving a status update
pub fn redisplay_prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}
