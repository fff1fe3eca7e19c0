//! Error types for the control client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server did not select the requested subprotocol
    #[error("Server did not accept subprotocol '{0}'")]
    SubprotocolRejected(String),
}
