use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a client may send over the signaling socket. The SDP and ICE
/// payloads are opaque to the relay; browsers send whole
/// `RTCSessionDescription` / `RTCIceCandidate` objects and we forward them
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    JoinRoom {
        room_name: String,
    },
    LeaveRoom {
        room_name: String,
    },
    WebrtcOffer {
        target_sid: ConnectionId,
        sdp: Value,
    },
    WebrtcAnswer {
        target_sid: ConnectionId,
        sdp: Value,
    },
    WebrtcIceCandidate {
        target_sid: ConnectionId,
        candidate: Value,
    },
}

/// Events the relay sends to clients. Routed WebRTC messages carry the
/// sender's id so the receiver can address its reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Welcome {
        sid: ConnectionId,
    },
    UserJoined {
        sid: ConnectionId,
    },
    UserLeft {
        sid: ConnectionId,
    },
    WebrtcOffer {
        sdp: Value,
        sender_sid: ConnectionId,
    },
    WebrtcAnswer {
        sdp: Value,
        sender_sid: ConnectionId,
    },
    WebrtcIceCandidate {
        candidate: Value,
        sender_sid: ConnectionId,
    },
}
