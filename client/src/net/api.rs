//! HTTP helpers for the access gate and the statistics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these calls are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Backend calls never return `Err`. Transport failures, non-2xx statuses,
//! and the 60 second timeout are folded into a `StatsResponse` envelope
//! whose answer carries the message, so every renderer handles failures the
//! same way it handles a text-only answer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use stats::endpoint::ApiRequest;
use stats::plan::FixedQuery;
use stats::player::Player;
use stats::response::Payload;
use stats::shape::shape_response;
use stats::{CallFailure, StatsResponse};

#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis() -> u32 {
    u32::try_from(stats::response::REQUEST_TIMEOUT_SECS * 1000).unwrap_or(u32::MAX)
}

#[cfg(any(test, feature = "hydrate"))]
fn unlock_failed_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("認証に失敗しました（{status}）"))
}

/// Perform one backend request with the client-side timeout.
///
/// On timeout the in-flight fetch is aborted.
#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Result<Payload, CallFailure> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use stats::endpoint::Method;
    use stats::response::decode_body;

    let url = request.url(&super::config::backend_base_url());
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(web_sys::AbortController::signal);

    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    }
    .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    .abort_signal(signal.as_ref());
    let built = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| CallFailure::Transport(e.to_string()))?;

    let fetch = Box::pin(built.send());
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis()));
    let resp = match select(fetch, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| CallFailure::Transport(e.to_string()))?,
        Either::Right(((), _)) => {
            if let Some(controller) = controller {
                controller.abort();
            }
            log::warn!("request timed out: {url}");
            return Err(CallFailure::Timeout);
        }
    };
    if !resp.ok() {
        return Err(CallFailure::Status(resp.status()));
    }
    let content_type = resp.headers().get("content-type");
    let body = resp.text().await.map_err(|e| CallFailure::Transport(e.to_string()))?;
    decode_body(content_type.as_deref(), &body)
}

#[cfg(not(feature = "hydrate"))]
async fn send(request: &ApiRequest) -> Result<Payload, CallFailure> {
    let _ = request;
    Err(CallFailure::Transport("not available on server".to_owned()))
}

/// Ask a free-text question via `POST /api/v1/qa/player-stats`.
pub async fn call_backend_api(query: &str, season: u16) -> StatsResponse {
    let outcome = send(&ApiRequest::ask(query, season)).await;
    if let Err(failure) = &outcome {
        #[cfg(feature = "hydrate")]
        log::error!("qa request failed: {failure}");
        #[cfg(not(feature = "hydrate"))]
        let _ = failure;
    }
    StatsResponse::from_outcome(outcome)
}

/// Run a fixed query and shape its rows for display.
pub async fn call_fixed_query_api(query: &FixedQuery) -> StatsResponse {
    match send(&query.request()).await {
        Ok(payload) => shape_response(query, payload),
        Err(failure) => {
            #[cfg(feature = "hydrate")]
            log::error!("{} request failed: {failure}", query.category().id());
            StatsResponse::from_failure(&failure)
        }
    }
}

/// Search players by name. Short terms send nothing; failures yield an
/// empty list.
pub async fn search_players(raw: &str) -> Vec<Player> {
    let Some(term) = stats::player::search_term(raw) else {
        return Vec::new();
    };
    match send(&ApiRequest::player_search(term)).await {
        Ok(Payload::Json(value)) => serde_json::from_value::<stats::player::SearchResults>(value)
            .map(|r| r.results)
            .unwrap_or_default(),
        Ok(Payload::Text(_)) => Vec::new(),
        Err(failure) => {
            #[cfg(feature = "hydrate")]
            log::warn!("player search failed: {failure}");
            #[cfg(not(feature = "hydrate"))]
            let _ = failure;
            Vec::new()
        }
    }
}

/// Whether this browser holds an unlocked session (`GET /api/auth/status`).
pub async fn fetch_access_status() -> bool {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct StatusBody {
            unlocked: bool,
        }
        let Ok(resp) = gloo_net::http::Request::get("/api/auth/status").send().await else {
            return false;
        };
        if !resp.ok() {
            return false;
        }
        resp.json::<StatusBody>().await.is_ok_and(|b| b.unlocked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Submit the shared password via `POST /api/auth/unlock`.
///
/// # Errors
///
/// Returns the server's message (or a status summary) when the password is
/// rejected or the request fails.
pub async fn unlock(password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/unlock")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(unlock_failed_message(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = password;
        Err("not available on server".to_owned())
    }
}

/// End the session via `POST /api/auth/lock`.
pub async fn lock() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/lock").send().await;
    }
}
