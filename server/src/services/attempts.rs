//! Failed-unlock throttling.
//!
//! DESIGN
//! ======
//! Sliding window of failure timestamps per client key (peer address, or
//! the forwarded address behind a trusted proxy). Recording a failure
//! sweeps every key whose window has fully expired. A client is blocked
//! once it has `max_failures` failures inside the window; a successful
//! unlock clears its history.

#[cfg(test)]
#[path = "attempts_test.rs"]
mod attempts_test;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AttemptLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    max_failures: usize,
    window: Duration,
}

impl AttemptLimiter {
    #[must_use]
    pub fn new(max_failures: usize, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), max_failures, window }
    }

    /// Whether `key` has used up its failures for the current window.
    #[must_use]
    pub fn is_blocked(&self, key: &str) -> bool {
        self.is_blocked_at(key, Instant::now())
    }

    pub fn record_failure(&self, key: &str) {
        self.record_failure_at(key, Instant::now());
    }

    pub fn clear(&self, key: &str) {
        self.lock().remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<Instant>>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn is_blocked_at(&self, key: &str, now: Instant) -> bool {
        let mut inner = self.lock();
        let Some(failures) = inner.get_mut(key) else {
            return false;
        };
        prune_window(failures, now, self.window);
        if failures.is_empty() {
            inner.remove(key);
            return false;
        }
        failures.len() >= self.max_failures
    }

    fn record_failure_at(&self, key: &str, now: Instant) {
        let mut inner = self.lock();
        inner.retain(|_, failures| {
            prune_window(failures, now, self.window);
            !failures.is_empty()
        });
        let failures = inner.entry(key.to_owned()).or_default();
        prune_window(failures, now, self.window);
        failures.push_back(now);
    }
}

fn prune_window(entries: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(front) = entries.front() {
        if now.duration_since(*front) >= window {
            entries.pop_front();
        } else {
            break;
        }
    }
}
