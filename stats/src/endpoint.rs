//! Backend base-URL resolution and request descriptions.
//!
//! An explicitly injected base URL always wins. Host sniffing is kept only
//! as a compatibility shim for deployments that do not inject one.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde_json::Value;

/// Backend used by managed-cloud deployments of the dashboard.
pub const PRODUCTION_API_URL: &str = "https://mlb-stats-backend.a.run.app";
/// Backend used for local development.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

const CLOUD_HOST_MARKERS: [&str; 3] = [".run.app", ".web.app", ".firebaseapp.com"];
const DEV_CONTAINER_MARKER: &str = ".app.github.dev";
const FRONTEND_PORT_TOKEN: &str = "-5173";
const BACKEND_PORT_TOKEN: &str = "-8000";

/// The parts of the page location the resolver reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the colon, as `window.location.protocol` reports it.
    pub protocol: String,
    pub hostname: String,
}

impl PageLocation {
    #[must_use]
    pub fn new(protocol: &str, hostname: &str) -> Self {
        Self { protocol: protocol.to_owned(), hostname: hostname.to_owned() }
    }
}

/// Which rule produced the base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendTarget {
    Injected,
    Production,
    DevContainer,
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBackend {
    pub target: BackendTarget,
    pub base_url: String,
}

/// Resolve the backend base URL. Deterministic; callers do the logging.
#[must_use]
pub fn resolve_backend_url(location: &PageLocation, injected: Option<&str>) -> ResolvedBackend {
    if let Some(url) = injected.map(str::trim).filter(|u| !u.is_empty()) {
        return ResolvedBackend { target: BackendTarget::Injected, base_url: url.trim_end_matches('/').to_owned() };
    }
    let host = location.hostname.as_str();
    if CLOUD_HOST_MARKERS.iter().any(|m| host.contains(m)) {
        return ResolvedBackend { target: BackendTarget::Production, base_url: PRODUCTION_API_URL.to_owned() };
    }
    if host.contains(DEV_CONTAINER_MARKER) {
        let protocol = if location.protocol.is_empty() { "https:" } else { location.protocol.as_str() };
        let rewritten = host.replace(FRONTEND_PORT_TOKEN, BACKEND_PORT_TOKEN);
        return ResolvedBackend { target: BackendTarget::DevContainer, base_url: format!("{protocol}//{rewritten}") };
    }
    ResolvedBackend { target: BackendTarget::Local, base_url: LOCAL_API_URL.to_owned() }
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Transport-neutral description of one backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), query: Vec::new(), body: Some(body) }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is present.
    #[must_use]
    pub fn param_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Append a comma-joined list parameter; empty lists are omitted.
    #[must_use]
    pub fn param_list<I, S>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values.into_iter().map(|v| v.as_ref().to_owned()).collect::<Vec<_>>().join(",");
        if joined.is_empty() { self } else { self.param(key, joined) }
    }

    /// Absolute URL without the query string.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    /// `GET /api/v1/players/search?q=`.
    #[must_use]
    pub fn player_search(term: &str) -> Self {
        Self::get("/api/v1/players/search").param("q", term)
    }

    /// `POST /api/v1/qa/player-stats` with `{query, season}`.
    #[must_use]
    pub fn ask(query: &str, season: u16) -> Self {
        Self::post("/api/v1/qa/player-stats", serde_json::json!({ "query": query, "season": season }))
    }
}
