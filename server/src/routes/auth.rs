//! Access-gate routes: unlock with the shared password, check, lock.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::gate::password_matches;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "dugout_session";
const FALLBACK_CLIENT_KEY: &str = "direct";

pub(crate) const WRONG_PASSWORD: &str = "パスワードが違います";
pub(crate) const TOO_MANY_ATTEMPTS: &str = "試行回数が多すぎます。しばらくしてから再度お試しください";
pub(crate) const NOT_CONFIGURED: &str = "パスワードが設定されていません";

#[derive(Deserialize)]
pub struct UnlockRequest {
    #[serde(default)]
    password: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBody {
    pub unlocked: bool,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn forwarded_address(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Throttling key: the peer IP, or the first forwarded address when proxy
/// headers are trusted. A shared key only when neither is known.
fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(forwarded) = forwarded_address(headers) {
            return forwarded.to_owned();
        }
    }
    peer.map_or_else(|| FALLBACK_CLIENT_KEY.to_owned(), |addr| addr.ip().to_string())
}

fn session_cookie(value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/unlock`: check the password and issue a session cookie.
pub async fn unlock(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    jar: CookieJar,
    Json(body): Json<UnlockRequest>,
) -> Response {
    let Some(configured) = state.config.app_password.as_deref() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };

    let peer = extensions.get::<ConnectInfo<SocketAddr>>().map(|info| info.0);
    let key = client_key(&headers, peer, state.config.trust_proxy_headers);
    if state.attempts.is_blocked(&key) {
        tracing::warn!(client = %key, "unlock throttled");
        return error_response(StatusCode::TOO_MANY_REQUESTS, TOO_MANY_ATTEMPTS);
    }

    if !password_matches(configured, &body.password) {
        state.attempts.record_failure(&key);
        tracing::info!(client = %key, "unlock rejected");
        return error_response(StatusCode::UNAUTHORIZED, WRONG_PASSWORD);
    }

    state.attempts.clear(&key);
    let token = state.sessions.create().await;
    tracing::info!(client = %key, "unlocked");
    let max_age = Duration::seconds(i64::try_from(state.sessions.ttl().as_secs()).unwrap_or(i64::MAX));
    let jar = jar.add(session_cookie(token, state.config.cookie_secure, max_age));
    (jar, Json(StatusBody { unlocked: true })).into_response()
}

/// `GET /api/auth/status`: whether the cookie names a live session.
pub async fn status(State(state): State<AppState>, jar: CookieJar) -> Json<StatusBody> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    Json(StatusBody { unlocked: state.sessions.is_valid(token).await })
}

/// `POST /api/auth/lock`: revoke the session and clear the cookie.
pub async fn lock(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        state.sessions.revoke(cookie.value()).await;
    }
    let expired = session_cookie(String::new(), state.config.cookie_secure, Duration::ZERO);
    (jar.add(expired), StatusCode::NO_CONTENT)
}
