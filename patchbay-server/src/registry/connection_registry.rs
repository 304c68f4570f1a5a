use axum::extract::ws::Message;
use dashmap::DashMap;
use patchbay_core::{ConnectionId, RoomId, ServerEvent};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct ConnectionEntry {
    tx: mpsc::UnboundedSender<Message>,
    rooms: HashSet<RoomId>,
}

/// Registry of live connections: each entry holds the outbound channel of one
/// WebSocket writer task plus the rooms the connection has joined.
#[derive(Clone)]
pub struct ConnectionRegistry {
    connections: Arc<DashMap<ConnectionId, ConnectionEntry>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(DashMap::new()),
        }
    }

    pub fn register(&self, tx: mpsc::UnboundedSender<Message>) -> ConnectionId {
        let sid = ConnectionId::new();
        self.connections.insert(
            sid.clone(),
            ConnectionEntry {
                tx,
                rooms: HashSet::new(),
            },
        );
        sid
    }

    /// Removes the connection and returns the rooms it still occupied so the
    /// caller can broadcast departures. Idempotent: a second call yields an
    /// empty set.
    pub fn unregister(&self, sid: &ConnectionId) -> HashSet<RoomId> {
        match self.connections.remove(sid) {
            Some((_, entry)) => entry.rooms,
            None => HashSet::new(),
        }
    }

    pub fn is_live(&self, sid: &ConnectionId) -> bool {
        self.connections.contains_key(sid)
    }

    pub fn rooms_of(&self, sid: &ConnectionId) -> HashSet<RoomId> {
        self.connections
            .get(sid)
            .map(|entry| entry.rooms.clone())
            .unwrap_or_default()
    }

    pub fn track_room(&self, sid: &ConnectionId, room: RoomId) {
        if let Some(mut entry) = self.connections.get_mut(sid) {
            entry.rooms.insert(room);
        }
    }

    pub fn forget_room(&self, sid: &ConnectionId, room: &RoomId) {
        if let Some(mut entry) = self.connections.get_mut(sid) {
            entry.rooms.remove(room);
        }
    }

    /// Delivers one event to one connection. Best effort: an unknown or
    /// already-gone target is dropped without surfacing anything to the
    /// sender.
    pub fn send(&self, sid: &ConnectionId, event: &ServerEvent) {
        let Some(entry) = self.connections.get(sid) else {
            debug!("Dropping event for disconnected connection {sid}");
            return;
        };
        match serde_json::to_string(event) {
            Ok(json) => {
                if entry.tx.send(Message::Text(json.into())).is_err() {
                    warn!("Writer task for {sid} is gone, event dropped");
                }
            }
            Err(e) => error!("Failed to serialize server event: {e}"),
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
