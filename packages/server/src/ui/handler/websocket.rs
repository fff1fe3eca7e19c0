//! WebSocket connection handlers.
//!
//! The control endpoint lives on the root path: a plain GET returns the
//! control page, a request carrying the WebSocket handshake is upgraded.
//! The control page script relies on both living at the same URL.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    response::{IntoResponse, Response},
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{domain::ControllerId, ui::state::AppState};
use hibiki_shared::{SUBPROTOCOL, command::Command};

use super::http::serve_home;

/// `GET /` — control page or WebSocket upgrade, depending on the request.
pub async fn control_endpoint(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match ws {
        Ok(ws) => ws
            .protocols([SUBPROTOCOL])
            .on_upgrade(move |socket| handle_socket(socket, state))
            .into_response(),
        // 通常の GET（アップグレードヘッダなし）には制御ページを返す
        Err(_) => serve_home().into_response(),
    }
}

/// Spawns a task that receives status text from the rx channel and pushes it
/// to the WebSocket sender.
///
/// This is the outbound half of a controller connection: status text queued
/// by the usecases (via the StatusPusher) is written to this socket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            // Send the status text to this controller
            if sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let controller_id = ControllerId::generate();

    // Create a channel for this controller to receive status text
    let (tx, rx) = mpsc::unbounded_channel();

    // Attach the controller; this also pushes the current status line
    match state
        .attach_controller_usecase
        .execute(controller_id, tx)
        .await
    {
        Ok(report) => {
            tracing::info!(
                "Controller '{}' attached, initial status: {}",
                controller_id,
                report.text
            );
        }
        Err(e) => {
            tracing::error!("Failed to attach controller '{}': {}", controller_id, e);
            return;
        }
    }

    let (sender, mut receiver) = socket.split();

    let state_clone = state.clone();

    // Spawn a task to receive commands from this controller
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on controller '{}': {}", controller_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::info!("Received command text: {}", text);

                    // Parse the wire string; unknown commands are dropped
                    let command = match text.parse::<Command>() {
                        Ok(command) => command,
                        Err(e) => {
                            tracing::warn!("Ignoring frame from '{}': {}", controller_id, e);
                            continue;
                        }
                    };

                    if let Err(e) = state_clone.dispatch_command_usecase.execute(command).await {
                        tracing::warn!("Failed to dispatch command '{}': {}", command, e);
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Controller '{}' requested close", controller_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to push queued status text to this controller
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Detach the controller from the status pusher
    state.detach_controller_usecase.execute(controller_id).await;
}
