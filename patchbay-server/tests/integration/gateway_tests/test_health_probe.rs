use crate::init_tracing;
use crate::utils::spawn_server;
use serde_json::Value;

#[tokio::test]
async fn test_health_probe() {
    init_tracing();
    let server = spawn_server().await;

    let res = reqwest::get(server.http_url("/")).await.expect("GET /");
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.expect("JSON body");
    assert!(body["status"].as_str().unwrap_or_default().contains("running"));
}
