use super::*;

#[test]
fn search_results_accept_numeric_and_string_ids() {
    let body = r#"{"results":[
        {"player_id": 660271, "full_name": "Shohei Ohtani", "team": "LAD", "league": "NL"},
        {"id": "592450", "name": "Aaron Judge"}
    ]}"#;
    let parsed: SearchResults = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.results.len(), 2);
    assert_eq!(parsed.results[0].id, 660_271);
    assert_eq!(parsed.results[0].name, "Shohei Ohtani");
    assert_eq!(parsed.results[1].id, 592_450);
    assert_eq!(parsed.results[1].team, None);
}

#[test]
fn search_results_default_to_empty() {
    let parsed: SearchResults = serde_json::from_str("{}").unwrap();
    assert!(parsed.results.is_empty());
}

#[test]
fn display_includes_team_when_known() {
    let player = Player::new(660_271, "Shohei Ohtani", "LAD", "NL");
    assert_eq!(player.display(), "Shohei Ohtani (LAD)");
    let bare = Player { team: None, ..player };
    assert_eq!(bare.display(), "Shohei Ohtani");
}

#[test]
fn search_term_requires_two_characters() {
    assert_eq!(search_term("  o "), None);
    assert_eq!(search_term(" 大谷 "), Some("大谷"));
    assert_eq!(search_term("judge"), Some("judge"));
}
