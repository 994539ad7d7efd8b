use super::*;

#[test]
fn timeout_is_sixty_seconds() {
    assert_eq!(timeout_millis(), 60_000);
}

#[test]
fn unlock_failure_prefers_server_message() {
    let body = r#"{"error":"パスワードが違います"}"#;
    assert_eq!(unlock_failed_message(401, body), "パスワードが違います");
}

#[test]
fn unlock_failure_falls_back_to_status() {
    assert_eq!(unlock_failed_message(502, "<html>"), "認証に失敗しました（502）");
}

#[test]
fn server_side_call_folds_into_error_envelope() {
    let resp = block_on(call_backend_api("q", 2024));
    assert!(resp.answer.starts_with("エラーが発生しました"));
    assert!(!resp.has_display());
}

#[test]
fn short_search_term_returns_nothing() {
    assert!(block_on(search_players(" a ")).is_empty());
}

/// Drive a future that never awaits a pending waker.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
