use super::*;

#[test]
fn default_is_locked_and_unchecked() {
    let state = AuthState::default();
    assert!(!state.unlocked);
    assert!(!state.checked);
}

#[test]
fn no_redirect_while_check_pending() {
    assert!(!AuthState::default().should_redirect_to_login());
}

#[test]
fn redirect_after_failed_check() {
    let mut state = AuthState::default();
    state.resolve(false);
    assert!(state.should_redirect_to_login());
}

#[test]
fn no_redirect_when_unlocked() {
    let mut state = AuthState::default();
    state.resolve(true);
    assert!(!state.should_redirect_to_login());
}

#[test]
fn lock_forgets_session() {
    let mut state = AuthState::default();
    state.resolve(true);
    state.lock();
    assert!(!state.unlocked);
    assert!(state.should_redirect_to_login());
}
