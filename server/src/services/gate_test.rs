use super::*;

#[test]
fn exact_match_is_accepted() {
    assert!(password_matches("hunter2", "hunter2"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(password_matches(" hunter2\n", "  hunter2 "));
}

#[test]
fn different_password_is_rejected() {
    assert!(!password_matches("hunter2", "hunter3"));
    assert!(!password_matches("hunter2", "Hunter2"));
}

#[test]
fn empty_input_is_rejected() {
    assert!(!password_matches("hunter2", ""));
}
