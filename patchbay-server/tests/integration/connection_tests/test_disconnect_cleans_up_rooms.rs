use crate::init_tracing;
use crate::utils::{SILENCE_MS, TestClient, spawn_server};
use patchbay_core::ServerEvent;

/// The Socket.IO predecessor skipped this cleanup entirely and left peers to
/// notice the gap via their own connection-state timeouts. The relay now
/// broadcasts the departure itself; this test pins that behavior down.
#[tokio::test]
async fn test_disconnect_cleans_up_rooms() {
    init_tracing();
    let server = spawn_server().await;

    let mut a = TestClient::connect(server.addr).await;
    let mut b = TestClient::connect(server.addr).await;
    let mut c = TestClient::connect(server.addr).await;
    let a_sid = a.sid.clone();

    a.join("room-1").await;
    a.join("room-2").await;
    a.sync().await;
    b.join("room-1").await;
    c.join("room-2").await;

    // a hears both arrivals (order depends on which join lands first); this
    // also proves both joins are fully processed before we cut a off.
    let mut arrivals = Vec::new();
    for _ in 0..2 {
        match a.recv_event().await {
            ServerEvent::UserJoined { sid } => arrivals.push(sid),
            other => panic!("Expected user_joined, got {other:?}"),
        }
    }
    assert!(arrivals.contains(&b.sid));
    assert!(arrivals.contains(&c.sid));

    a.close().await;

    match b.recv_event().await {
        ServerEvent::UserLeft { sid } => assert_eq!(sid, a_sid),
        other => panic!("Expected user_left in room-1, got {other:?}"),
    }
    b.expect_silence(SILENCE_MS).await;

    match c.recv_event().await {
        ServerEvent::UserLeft { sid } => assert_eq!(sid, a_sid),
        other => panic!("Expected user_left in room-2, got {other:?}"),
    }
    c.expect_silence(SILENCE_MS).await;
}
