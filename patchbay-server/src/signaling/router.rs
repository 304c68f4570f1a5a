use crate::registry::ConnectionRegistry;
use crate::room::RoomDirectory;
use axum::extract::ws::Message;
use patchbay_core::{ClientEvent, ConnectionId, RoomId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Routes signaling traffic between live connections: presence events fan
/// out to the other members of a room, WebRTC messages go point-to-point to
/// their target tagged with the sender id. Purely forward-and-drop; nothing
/// is buffered and nothing is echoed back to the sender.
///
/// All events for one connection arrive from its single socket task, so
/// join/leave/disconnect for a given sid never race each other. Cross-
/// connection races serialize on the registry and directory map entries.
#[derive(Clone)]
pub struct SignalingRouter {
    registry: ConnectionRegistry,
    directory: RoomDirectory,
}

impl SignalingRouter {
    pub fn new() -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            directory: RoomDirectory::new(),
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Registers a new connection and greets it with its assigned sid.
    pub fn attach(&self, tx: mpsc::UnboundedSender<Message>) -> ConnectionId {
        let sid = self.registry.register(tx);
        self.registry
            .send(&sid, &ServerEvent::Welcome { sid: sid.clone() });
        sid
    }

    /// Tears the connection down: every room it occupied sees exactly one
    /// `user_left`, and no membership survives. Idempotent.
    pub fn detach(&self, sid: &ConnectionId) {
        for room in self.registry.unregister(sid) {
            let remaining = self.directory.leave(&room, sid);
            let event = ServerEvent::UserLeft { sid: sid.clone() };
            for peer in &remaining {
                self.registry.send(peer, &event);
            }
        }
    }

    pub fn route(&self, sender: &ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::JoinRoom { room_name } => self.handle_join(sender, room_name.into()),
            ClientEvent::LeaveRoom { room_name } => self.handle_leave(sender, &room_name.into()),
            ClientEvent::WebrtcOffer { target_sid, sdp } => self.relay(
                sender,
                &target_sid,
                ServerEvent::WebrtcOffer {
                    sdp,
                    sender_sid: sender.clone(),
                },
            ),
            ClientEvent::WebrtcAnswer { target_sid, sdp } => self.relay(
                sender,
                &target_sid,
                ServerEvent::WebrtcAnswer {
                    sdp,
                    sender_sid: sender.clone(),
                },
            ),
            ClientEvent::WebrtcIceCandidate {
                target_sid,
                candidate,
            } => self.relay(
                sender,
                &target_sid,
                ServerEvent::WebrtcIceCandidate {
                    candidate,
                    sender_sid: sender.clone(),
                },
            ),
        }
    }

    fn handle_join(&self, sender: &ConnectionId, room: RoomId) {
        let peers = self.directory.join(&room, sender);
        self.registry.track_room(sender, room.clone());
        info!("Connection {sender} joined room {room}");

        let event = ServerEvent::UserJoined { sid: sender.clone() };
        for peer in &peers {
            self.registry.send(peer, &event);
        }
    }

    fn handle_leave(&self, sender: &ConnectionId, room: &RoomId) {
        let remaining = self.directory.leave(room, sender);
        self.registry.forget_room(sender, room);
        info!("Connection {sender} left room {room}");

        let event = ServerEvent::UserLeft { sid: sender.clone() };
        for peer in &remaining {
            self.registry.send(peer, &event);
        }
    }

    fn relay(&self, sender: &ConnectionId, target: &ConnectionId, event: ServerEvent) {
        if !self.registry.is_live(target) {
            debug!("Relay from {sender} to unknown target {target}, dropped");
            return;
        }
        self.registry.send(target, &event);
    }
}

impl Default for SignalingRouter {
    fn default() -> Self {
        Self::new()
    }
}
