use patchbay_server::{AppState, MemorySessionStore, SessionGateway, SignalingRouter, app};
use std::net::SocketAddr;
use std::sync::Arc;

/// A relay spawned on an ephemeral port, with a handle on its session store
/// so tests can seed tokens.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<MemorySessionStore>,
}

impl TestServer {
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn spawn_server() -> TestServer {
    let store = Arc::new(MemorySessionStore::new());
    let state = AppState {
        router: SignalingRouter::new(),
        gateway: SessionGateway::new(store.clone()),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("Test server crashed");
    });

    TestServer { addr, store }
}
