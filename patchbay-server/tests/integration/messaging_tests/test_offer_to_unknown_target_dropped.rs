use crate::init_tracing;
use crate::utils::{SILENCE_MS, TestClient, spawn_server};
use patchbay_core::{ClientEvent, ConnectionId, ServerEvent};
use serde_json::json;

#[tokio::test]
async fn test_offer_to_unknown_target_dropped() {
    init_tracing();
    let server = spawn_server().await;

    let mut a = TestClient::connect(server.addr).await;
    let mut b = TestClient::connect(server.addr).await;

    a.join("call-room").await;
    a.sync().await;
    b.join("call-room").await;
    assert!(matches!(a.recv_event().await, ServerEvent::UserJoined { sid } if sid == b.sid));

    // Target was never connected. No buffering, no retry, no nack: the
    // sender's own connection-state timeout is the recovery path.
    a.send(&ClientEvent::WebrtcOffer {
        target_sid: ConnectionId::new(),
        sdp: json!({ "type": "offer", "sdp": "v=0..." }),
    })
    .await;

    a.expect_silence(SILENCE_MS).await;
    b.expect_silence(SILENCE_MS).await;
}
