//! HTTP transport to the statistics backend.
//!
//! Mirrors the browser call wrappers: every failure is folded into a
//! `StatsResponse` envelope, and fixed queries go through the same shaping
//! code the dashboard uses.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use stats::endpoint::{ApiRequest, Method};
use stats::plan::FixedQuery;
use stats::player::{Player, SearchResults, search_term};
use stats::response::{Payload, decode_body};
use stats::shape::shape_response;
use stats::{CallFailure, StatsResponse};

use crate::CliError;

pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    async fn send(&self, request: &ApiRequest) -> Result<Payload, CallFailure> {
        let url = request.url(&self.base_url);
        tracing::debug!(%url, "backend request");
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .query(&request.query);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(transport_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CallFailure::Status(status.as_u16()));
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.map_err(transport_failure)?;
        decode_body(content_type.as_deref(), &body)
    }

    /// Free-text question via the QA endpoint.
    pub async fn ask(&self, query: &str, season: u16) -> StatsResponse {
        let outcome = self.send(&ApiRequest::ask(query, season)).await;
        if let Err(failure) = &outcome {
            tracing::warn!(%failure, "qa request failed");
        }
        StatsResponse::from_outcome(outcome)
    }

    /// Run a fixed query and shape the rows for display.
    pub async fn fixed(&self, query: &FixedQuery) -> StatsResponse {
        match self.send(&query.request()).await {
            Ok(payload) => shape_response(query, payload),
            Err(failure) => {
                tracing::warn!(%failure, category = query.category().id(), "fixed query failed");
                StatsResponse::from_failure(&failure)
            }
        }
    }

    /// Player search; short terms and failures give an empty list.
    pub async fn search(&self, raw: &str) -> Vec<Player> {
        let Some(term) = search_term(raw) else {
            return Vec::new();
        };
        match self.send(&ApiRequest::player_search(term)).await {
            Ok(Payload::Json(value)) => {
                serde_json::from_value::<SearchResults>(value).map(|r| r.results).unwrap_or_default()
            }
            Ok(Payload::Text(_)) => Vec::new(),
            Err(failure) => {
                tracing::warn!(%failure, "player search failed");
                Vec::new()
            }
        }
    }
}

fn transport_failure(err: reqwest::Error) -> CallFailure {
    if err.is_timeout() { CallFailure::Timeout } else { CallFailure::Transport(err.to_string()) }
}
