//! Access-gate state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard and the login page to coordinate
//! redirects once the server has answered the gate status check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the browser holds an unlocked session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub unlocked: bool,
    /// Set once the status check has answered.
    pub checked: bool,
}

impl AuthState {
    /// Record the server's answer.
    pub fn resolve(&mut self, unlocked: bool) {
        self.unlocked = unlocked;
        self.checked = true;
    }

    /// Forget the session after an explicit lock.
    pub fn lock(&mut self) {
        self.unlocked = false;
        self.checked = true;
    }

    /// Guarded routes redirect only after the check, never while pending.
    #[must_use]
    pub fn should_redirect_to_login(&self) -> bool {
        self.checked && !self.unlocked
    }
}
