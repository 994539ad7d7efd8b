use super::*;

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn question_then_answer_round() {
    let mut state = ChatState::default();
    state.push_question("大谷の打率は？");
    assert!(state.loading);
    assert_eq!(state.messages[0].role, ChatRole::User);

    state.push_answer(StatsResponse::text(".310です"));
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, ChatRole::Assistant);
    assert_eq!(state.messages[1].content, ".310です");
    assert!(state.messages[1].response.is_some());
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.push_question("a");
    state.push_question("b");
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

#[test]
fn clear_empties_history() {
    let mut state = ChatState::default();
    state.push_question("a");
    state.clear();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}
