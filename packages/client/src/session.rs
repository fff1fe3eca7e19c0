//! WebSocket control session management.

use futures_util::{SinkExt, Stream, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, client::IntoClientRequest, http::HeaderValue, protocol::Message},
};

use hibiki_shared::{SUBPROTOCOL, command::Command};

use crate::{error::ClientError, panel::StatusPanel, ui::redisplay_prompt};

/// Run a single WebSocket control session.
///
/// Connects to the control server requesting subprotocol `protocolOne`,
/// forwards stdin lines to the socket unchanged and mirrors incoming status
/// text into the status panel. Returns when the session ends; the caller
/// does not reconnect.
pub async fn run_control_session(url: &str) -> Result<(), ClientError> {
    let mut request = url
        .into_client_request()
        .map_err(|e| ClientError::Connection(e.to_string()))?;
    request.headers_mut().insert(
        "Sec-WebSocket-Protocol",
        HeaderValue::from_static(SUBPROTOCOL),
    );

    let (ws_stream, response) = connect_async(request)
        .await
        .map_err(|e| ClientError::Connection(e.to_string()))?;

    // Browser semantics: the connection fails if the server did not select
    // the requested subprotocol.
    let selected = response
        .headers()
        .get("Sec-WebSocket-Protocol")
        .and_then(|v| v.to_str().ok());
    if selected != Some(SUBPROTOCOL) {
        return Err(ClientError::SubprotocolRejected(SUBPROTOCOL.to_string()));
    }

    tracing::info!("Connected to the speaker control server");
    println!("\nConnected. Type a command and press Enter to send. Press Ctrl+C to exit.");
    println!("Available commands:");
    for command in Command::ALL {
        println!("  {}", command);
    }
    println!();

    let (mut write, read) = ws_stream.split();

    // Spawn a task to handle incoming status text
    let mut read_task = tokio::spawn(mirror_status(read));

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to forward stdin lines to the WebSocket, unchanged.
    // No envelope, no readiness check, no queuing.
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            if let Err(e) = write.send(Message::Text(line.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            let connection_error = read_result.unwrap_or(false);
            if connection_error {
                return Err(ClientError::Connection("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            let write_error = write_result.unwrap_or(false);
            if write_error {
                return Err(ClientError::Connection("Connection lost".to_string()));
            }
        }
    }

    Ok(())
}

/// Mirror incoming status text into the panel until the stream ends.
///
/// Returns `true` when the session ended abnormally (a transport error).
/// A close frame from the server is the expected end of the session, not
/// an error.
async fn mirror_status<S>(mut read: S) -> bool
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    let mut panel = StatusPanel::new();

    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => {
                // Incoming text replaces the whole panel content
                panel.replace(&text);
                print!("{}", panel.render());
                redisplay_prompt();
            }
            Ok(Message::Binary(data)) => {
                tracing::debug!("Ignoring {} bytes of binary data", data.len());
            }
            Ok(Message::Close(_)) => {
                tracing::info!("Server closed the connection");
                return false;
            }
            Err(e) => {
                tracing::error!("WebSocket error: {}", e);
                return true;
            }
            _ => {}
        }
    }

    false
}
