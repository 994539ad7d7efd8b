use std::net::{IpAddr, Ipv4Addr};

use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

fn state_with(password: Option<&str>, max_failures: usize) -> AppState {
    AppState::new(ServerConfig {
        app_password: password.map(str::to_owned),
        max_failures,
        ..ServerConfig::default()
    })
}

fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, last_octet)), 40000)
}

fn unlock_request(password: &str, client: SocketAddr) -> Request<Body> {
    unlock_request_forwarded(password, client, None)
}

fn unlock_request_forwarded(password: &str, client: SocketAddr, forwarded: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/auth/unlock")
        .header(header::CONTENT_TYPE, "application/json")
        .extension(ConnectInfo(client));
    if let Some(forwarded) = forwarded {
        builder = builder.header("x-forwarded-for", forwarded);
    }
    builder.body(Body::from(serde_json::json!({ "password": password }).to_string())).unwrap()
}

fn status_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/api/auth/status");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` part of the response's session cookie.
fn session_pair(response: &Response) -> String {
    let raw = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    raw.split(';').next().unwrap().to_owned()
}

// =============================================================================
// client_key
// =============================================================================

fn forwarded_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", value.parse().unwrap());
    headers
}

#[test]
fn client_key_uses_peer_ip_by_default() {
    let headers = forwarded_headers("203.0.113.7");
    assert_eq!(client_key(&headers, Some(peer(9)), false), "192.0.2.9");
}

#[test]
fn client_key_uses_first_forwarded_address_when_trusted() {
    let headers = forwarded_headers("203.0.113.7, 10.0.0.1");
    assert_eq!(client_key(&headers, Some(peer(9)), true), "203.0.113.7");
    assert_eq!(client_key(&HeaderMap::new(), Some(peer(9)), true), "192.0.2.9");
}

#[test]
fn client_key_falls_back_without_peer_or_headers() {
    assert_eq!(client_key(&HeaderMap::new(), None, false), FALLBACK_CLIENT_KEY);
}

// =============================================================================
// unlock / status / lock
// =============================================================================

#[tokio::test]
async fn correct_password_sets_session_cookie() {
    let app = api_routes(state_with(Some("hunter2"), 5));
    let response = app.oneshot(unlock_request(" hunter2 ", peer(1))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap().to_owned();
    assert!(raw.starts_with(&format!("{COOKIE_NAME}=")));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("Max-Age=604800"));
    assert_eq!(body_json(response).await, serde_json::json!({ "unlocked": true }));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = api_routes(state_with(Some("hunter2"), 5));
    let response = app.oneshot(unlock_request("nope", peer(1))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_json(response).await["error"], WRONG_PASSWORD);
}

#[tokio::test]
async fn missing_password_config_is_unavailable() {
    let app = api_routes(state_with(None, 5));
    let response = app.oneshot(unlock_request("anything", peer(1))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["error"], NOT_CONFIGURED);
}

#[tokio::test]
async fn repeated_failures_are_throttled() {
    let app = api_routes(state_with(Some("hunter2"), 2));
    for _ in 0..2 {
        let response = app.clone().oneshot(unlock_request("nope", peer(2))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    // Even the right password is refused while throttled.
    let response = app.clone().oneshot(unlock_request("hunter2", peer(2))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Another client is unaffected.
    let response = app.oneshot(unlock_request("hunter2", peer(3))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rotating_forwarded_header_does_not_evade_throttle() {
    let app = api_routes(state_with(Some("hunter2"), 2));
    let mut statuses = Vec::new();
    for i in 0..10 {
        let forwarded = format!("198.51.100.{i}");
        let request = unlock_request_forwarded("nope", peer(5), Some(&forwarded));
        statuses.push(app.clone().oneshot(request).await.unwrap().status());
    }
    assert_eq!(statuses[..2], [StatusCode::UNAUTHORIZED, StatusCode::UNAUTHORIZED]);
    assert!(statuses[2..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn trusted_proxy_throttles_per_forwarded_address() {
    let state = AppState::new(ServerConfig {
        app_password: Some("hunter2".to_owned()),
        max_failures: 1,
        trust_proxy_headers: true,
        ..ServerConfig::default()
    });
    let app = api_routes(state);
    let proxy = peer(6);

    let response = app.clone().oneshot(unlock_request_forwarded("nope", proxy, Some("203.0.113.1"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = app.clone().oneshot(unlock_request_forwarded("nope", proxy, Some("203.0.113.1"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app.oneshot(unlock_request_forwarded("hunter2", proxy, Some("203.0.113.2"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn status_without_cookie_is_locked() {
    let app = api_routes(state_with(Some("hunter2"), 5));
    let response = app.oneshot(status_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "unlocked": false }));
}

#[tokio::test]
async fn status_with_forged_cookie_is_locked() {
    let app = api_routes(state_with(Some("hunter2"), 5));
    let cookie = format!("{COOKIE_NAME}=forged");
    let response = app.oneshot(status_request(Some(&cookie))).await.unwrap();
    assert_eq!(body_json(response).await, serde_json::json!({ "unlocked": false }));
}

#[tokio::test]
async fn unlock_then_status_then_lock() {
    let app = api_routes(state_with(Some("hunter2"), 5));

    let response = app.clone().oneshot(unlock_request("hunter2", peer(4))).await.unwrap();
    let cookie = session_pair(&response);

    let response = app.clone().oneshot(status_request(Some(&cookie))).await.unwrap();
    assert_eq!(body_json(response).await, serde_json::json!({ "unlocked": true }));

    let lock = Request::builder()
        .method("POST")
        .uri("/api/auth/lock")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(lock).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(status_request(Some(&cookie))).await.unwrap();
    assert_eq!(body_json(response).await, serde_json::json!({ "unlocked": false }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(state_with(None, 5));
    let response = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
