//! In-memory session tokens for unlocked browsers.
//!
//! Tokens expire after the configured TTL and live only as long as the
//! process; a restart locks every browser again. Issuing a token sweeps the
//! expired ones.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Clone)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashMap<String, Instant>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { tokens: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue and remember a new token.
    pub async fn create(&self) -> String {
        self.create_at(Instant::now()).await
    }

    pub async fn is_valid(&self, token: &str) -> bool {
        self.is_valid_at(token, Instant::now()).await
    }

    /// Forget a token. Unknown tokens are ignored.
    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }

    async fn create_at(&self, now: Instant) -> String {
        let token = generate_token();
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, expires| *expires > now);
        tokens.insert(token.clone(), now + self.ttl);
        token
    }

    async fn is_valid_at(&self, token: &str, now: Instant) -> bool {
        !token.is_empty() && self.tokens.read().await.get(token).is_some_and(|expires| *expires > now)
    }
}
