use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use crate::state::AppState;

/// Maximum accepted client message size in bytes
const MAX_CLIENT_MESSAGE: usize = 1024;

/// WebSocket endpoint streaming game notifications
///
/// # Flow
///
/// 1. Subscribe to the broadcast channel
/// 2. Send the current match state
/// 3. Forward every notification as it is emitted
/// 4. Close when the client goes away
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // Subscribe before reading state so nothing emitted in between is missed
    let broadcast_rx = state.broadcast_tx.subscribe();
    let initial_state = state.engine.read().await.get_state();

    tracing::info!("WebSocket accepted");

    ws.on_upgrade(move |socket| handle_socket(socket, initial_state, broadcast_rx))
}

/// Build the message sent to a client when it connects
pub fn state_message(state: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "type": "state_update",
        "data": state
    })
}

/// Handle a WebSocket connection
///
/// # Arguments
///
/// * `socket` - The WebSocket connection
/// * `initial_state` - Match state to send first
/// * `broadcast_rx` - Receiver for serialized notifications
async fn handle_socket(
    socket: WebSocket,
    initial_state: serde_json::Value,
    mut broadcast_rx: broadcast::Receiver<String>,
) {
    let (mut sender, mut receiver) = socket.split();

    if let Ok(msg_text) = serde_json::to_string(&state_message(initial_state)) {
        if sender.send(Message::Text(msg_text)).await.is_err() {
            tracing::debug!("Client left before initial state was sent");
            return;
        }
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match broadcast_rx.recv().await {
                Ok(msg_text) => {
                    if sender.send(Message::Text(msg_text)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("WebSocket client lagged, skipped {} notifications", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Broadcast channel closed");
                    break;
                }
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    if text.len() > MAX_CLIENT_MESSAGE {
                        tracing::warn!("Client message too large: {} bytes", text.len());
                        break;
                    }
                    // Commands go through the HTTP API; text frames are only keep-alives
                    tracing::debug!("Received from client: {}", text);
                }
                Message::Close(_) => break,
                Message::Ping(_) | Message::Pong(_) => {}
                Message::Binary(_) => {
                    tracing::warn!("Unexpected binary message");
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("WebSocket connection closed");
}
