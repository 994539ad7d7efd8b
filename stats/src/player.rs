//! Player records returned by the search endpoint.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimum trimmed length of a search term before a request is issued.
pub const MIN_SEARCH_LEN: usize = 2;

/// A selectable player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// MLBAM player identifier.
    #[serde(alias = "player_id", alias = "mlbam_id", deserialize_with = "deserialize_id")]
    pub id: u64,
    /// Display name.
    #[serde(alias = "full_name", alias = "player_name", alias = "name_display_first_last")]
    pub name: String,
    #[serde(default, alias = "team_name")]
    pub team: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(id: u64, name: &str, team: &str, league: &str) -> Self {
        Self { id, name: name.to_owned(), team: Some(team.to_owned()), league: Some(league.to_owned()) }
    }

    /// `Name (TEAM)` when the team is known.
    #[must_use]
    pub fn display(&self) -> String {
        match self.team.as_deref() {
            Some(team) if !team.is_empty() => format!("{} ({team})", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Body of `GET /api/v1/players/search`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Player>,
}

/// Normalize a search input; `None` when it is too short to send.
#[must_use]
pub fn search_term(raw: &str) -> Option<&str> {
    let term = raw.trim();
    (term.chars().count() >= MIN_SEARCH_LEN).then_some(term)
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid player id: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid player id: {s}"))),
        other => Err(D::Error::custom(format!("invalid player id: {other}"))),
    }
}
