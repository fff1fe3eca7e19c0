//! Integration tests for the HTTP surface of the control server.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::sync::Mutex;

use hibiki_server::{
    domain::SpeakerState,
    infrastructure::{repository::InMemorySpeakerRepository, status_pusher::WebSocketStatusPusher},
    ui::Server,
    usecase::{
        AttachControllerUseCase, DetachControllerUseCase, DispatchCommandUseCase,
        GetSpeakerStateUseCase,
    },
};
use hibiki_shared::time::{Clock, SystemClock};

/// Wire up a full server and spawn it on the given port.
async fn spawn_test_server(port: u16) {
    let clock = Arc::new(SystemClock);
    let state = Arc::new(Mutex::new(SpeakerState::new(clock.now_millis())));
    let repository = Arc::new(InMemorySpeakerRepository::new(state));
    let controllers = Arc::new(Mutex::new(HashMap::new()));
    let status_pusher = Arc::new(WebSocketStatusPusher::new(controllers));

    let server = Server::new(
        Arc::new(AttachControllerUseCase::new(
            repository.clone(),
            status_pusher.clone(),
            clock.clone(),
        )),
        Arc::new(DetachControllerUseCase::new(status_pusher.clone())),
        Arc::new(DispatchCommandUseCase::new(
            repository.clone(),
            status_pusher,
            clock.clone(),
        )),
        Arc::new(GetSpeakerStateUseCase::new(repository, clock)),
    );

    tokio::spawn(async move { server.run("127.0.0.1".to_string(), port).await });

    // Give the listener time to come up
    tokio::time::sleep(Duration::from_millis(300)).await;
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    // テスト項目: ヘルスチェックエンドポイントが ok を返す
    // given (前提条件):
    let port = 18086;
    spawn_test_server(port).await;

    // when (操作):
    let response = reqwest::get(format!("http://127.0.0.1:{}/api/health", port))
        .await
        .expect("health request failed");

    // then (期待する結果):
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("invalid json");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_state_endpoint_reports_initial_state() {
    // テスト項目: 状態エンドポイントが初期状態を返す
    // given (前提条件):
    let port = 18087;
    spawn_test_server(port).await;

    // when (操作):
    let response = reqwest::get(format!("http://127.0.0.1:{}/api/state", port))
        .await
        .expect("state request failed");

    // then (期待する結果):
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("invalid json");
    assert_eq!(body["power"], "off");
    assert_eq!(body["discoverable"], false);
    assert_eq!(body["volume"], 7);
    assert_eq!(body["volume_max"], 15);
}

#[tokio::test]
async fn test_root_serves_control_page() {
    // テスト項目: ルートパスへの通常の GET は制御ページを返す
    // given (前提条件):
    let port = 18088;
    spawn_test_server(port).await;

    // when (操作):
    let response = reqwest::get(format!("http://127.0.0.1:{}/", port))
        .await
        .expect("page request failed");

    // then (期待する結果):
    assert!(response.status().is_success());
    let body = response.text().await.expect("invalid body");
    assert!(body.contains("id=\"TEXT\""));
    assert!(body.contains("script/script.js"));
}

#[tokio::test]
async fn test_script_asset_requests_subprotocol() {
    // テスト項目: 配信されるスクリプトが protocolOne サブプロトコルを要求する
    // given (前提条件):
    let port = 18089;
    spawn_test_server(port).await;

    // when (操作):
    let response = reqwest::get(format!("http://127.0.0.1:{}/script/script.js", port))
        .await
        .expect("script request failed");

    // then (期待する結果):
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/javascript")
    );
    let body = response.text().await.expect("invalid body");
    assert!(body.contains("protocolOne"));
    assert!(body.contains("getElementById('TEXT')"));
}
