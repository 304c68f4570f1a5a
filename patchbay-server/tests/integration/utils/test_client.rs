use futures::{SinkExt, StreamExt};
use patchbay_core::{ClientEvent, ConnectionId, ServerEvent};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

const RECV_TIMEOUT_MS: u64 = 5000;

/// Default window for asserting that *nothing* arrives.
pub const SILENCE_MS: u64 = 300;

/// A signaling client speaking the relay's JSON event protocol over a real
/// WebSocket.
pub struct TestClient {
    /// The sid the relay assigned in its welcome frame.
    pub sid: ConnectionId,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    /// Connects and consumes the mandatory `welcome` frame.
    pub async fn connect(addr: SocketAddr) -> Self {
        let (mut stream, _) = connect_async(format!("ws://{addr}/ws"))
            .await
            .expect("Failed to open WebSocket");

        let event = next_event(&mut stream).await.expect("No welcome frame");
        let ServerEvent::Welcome { sid } = event else {
            panic!("Expected welcome, got {event:?}");
        };

        Self { sid, stream }
    }

    pub async fn send(&mut self, event: &ClientEvent) {
        let json = serde_json::to_string(event).expect("Failed to serialize event");
        self.stream
            .send(Message::Text(json))
            .await
            .expect("Failed to send frame");
    }

    /// Sends an arbitrary text frame, bypassing the typed catalogue.
    pub async fn send_raw(&mut self, text: &str) {
        self.stream
            .send(Message::Text(text.to_string()))
            .await
            .expect("Failed to send frame");
    }

    pub async fn join(&mut self, room: &str) {
        self.send(&ClientEvent::JoinRoom {
            room_name: room.to_string(),
        })
        .await;
    }

    pub async fn leave(&mut self, room: &str) {
        self.send(&ClientEvent::LeaveRoom {
            room_name: room.to_string(),
        })
        .await;
    }

    /// Round-trips a self-addressed candidate through the relay. Frames from
    /// one socket are processed in order, so once the echo is back every
    /// earlier frame from this client has taken effect.
    pub async fn sync(&mut self) {
        let marker = serde_json::json!({ "sync": true });
        self.send(&ClientEvent::WebrtcIceCandidate {
            target_sid: self.sid.clone(),
            candidate: marker.clone(),
        })
        .await;
        match self.recv_event().await {
            ServerEvent::WebrtcIceCandidate { candidate, .. } if candidate == marker => {}
            other => panic!("Expected sync echo, got {other:?}"),
        }
    }

    pub async fn recv_event(&mut self) -> ServerEvent {
        match tokio::time::timeout(
            Duration::from_millis(RECV_TIMEOUT_MS),
            next_event(&mut self.stream),
        )
        .await
        {
            Ok(Some(event)) => event,
            Ok(None) => panic!("Connection closed while waiting for event"),
            Err(_) => panic!("Timed out waiting for event"),
        }
    }

    /// Collects every event that arrives until the stream goes quiet for
    /// `window_ms`.
    pub async fn drain_events(&mut self, window_ms: u64) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = tokio::time::timeout(
            Duration::from_millis(window_ms),
            next_event(&mut self.stream),
        )
        .await
        {
            events.push(event);
        }
        events
    }

    /// Asserts that no event arrives within the window.
    pub async fn expect_silence(&mut self, window_ms: u64) {
        if let Ok(Some(event)) = tokio::time::timeout(
            Duration::from_millis(window_ms),
            next_event(&mut self.stream),
        )
        .await
        {
            panic!("Expected silence, got {event:?}");
        }
    }

    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}

async fn next_event(
    stream: &mut WebSocketStream<MaybeTlsStream<TcpStream>>,
) -> Option<ServerEvent> {
    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                return Some(serde_json::from_str(&text).expect("Invalid server event"));
            }
            Ok(Message::Close(_)) | Err(_) => return None,
            Ok(_) => {}
        }
    }
    None
}
