// tests/support/helpers.rs
use super::mocks::{CapturingErrorLog, FixedClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use league_errors::application::{
    ports::{error_log::ErrorLog, security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use league_errors::domain::player::PlayerRepository;
use league_errors::infrastructure::{
    repositories::InMemoryPlayerRepository, security::JwtTokenManager, time::SystemClock,
};
use league_errors::presentation::http::{
    middleware::ErrorHandler, routes::build_router, state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret";

pub struct TestApp {
    pub router: Router,
    pub log: Arc<CapturingErrorLog>,
    pub tokens: Arc<JwtTokenManager>,
}

pub fn error_handler(development_mode: bool) -> (ErrorHandler, Arc<CapturingErrorLog>) {
    let log = Arc::new(CapturingErrorLog::default());
    let sink: Arc<dyn ErrorLog> = log.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    (ErrorHandler::new(development_mode, sink, clock), log)
}

pub fn make_test_app(development_mode: bool) -> TestApp {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tokens = Arc::new(JwtTokenManager::new(
        TEST_SECRET,
        Duration::from_secs(300),
        Arc::clone(&clock),
    ));
    let token_manager: Arc<dyn TokenManager> = tokens.clone();
    let player_repo: Arc<dyn PlayerRepository> = Arc::new(InMemoryPlayerRepository::new());
    let services = Arc::new(ApplicationServices::new(player_repo, token_manager, clock));

    let (errors, log) = error_handler(development_mode);
    let router = build_router(HttpState { services }, errors);

    TestApp {
        router,
        log,
        tokens,
    }
}

/// 発行済みトークンを返す
pub async fn bearer_for(app: &TestApp, subject: &str) -> String {
    app.tokens.issue(subject).await.expect("issue token").token
}

/// 2024 年に発行され既に失効したトークンを返す
pub async fn expired_token() -> String {
    let manager = JwtTokenManager::new(TEST_SECRET, Duration::from_secs(60), Arc::new(FixedClock));
    manager.issue("ghost").await.expect("issue token").token
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.expect("router is infallible");
    into_json(resp).await
}

pub async fn into_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// エラーエンベロープの共通形状を検証する
pub fn assert_envelope(json: &Value, expected_message: &str) {
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], expected_message);
}
