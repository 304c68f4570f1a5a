use crate::routes::AppState;
use crate::signaling::SignalingRouter;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use patchbay_core::ClientEvent;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.router))
}

async fn handle_socket(socket: WebSocket, router: SignalingRouter) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let sid = router.attach(tx);
    info!("New WebSocket connection: {sid}");

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let router = router.clone();
        let sid = sid.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => router.route(&sid, event),
                        // Malformed signaling is fire-and-forget: drop the
                        // frame, keep the connection.
                        Err(e) => warn!("Invalid event from {sid}: {e}"),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    router.detach(&sid);
    info!("WebSocket disconnected: {sid}");
}
