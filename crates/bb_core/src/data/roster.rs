//! Embedded player database
//!
//! The roster ships inside the binary via `include_str!`; there is no
//! runtime file I/O unless a caller loads an alternate roster explicitly.

use crate::error::{GameError, Result};
use crate::models::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in roster JSON (~4KB)
pub const ROSTER_JSON: &str = include_str!("../../data/roster.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Parse the built-in roster.
    pub fn embedded() -> Result<Self> {
        Self::from_json(ROSTER_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        if roster.players.is_empty() {
            return Err(GameError::InsufficientRoster { available: 0, needed: 1 });
        }
        Ok(roster)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Roster position of a player borrowed from this roster.
    pub fn index_of(&self, player: &Player) -> Option<usize> {
        self.players.iter().position(|p| std::ptr::eq(p, player))
    }

    /// Look a player up by full name or by jersey and team.
    ///
    /// The query is case-insensitive. `"4-NYY"` and `"4NYY"` both name the
    /// wearer of #4 for NYY; a jersey query that matches nobody does not fall
    /// back to a name search.
    pub fn find(&self, query: &str) -> Option<(usize, &Player)> {
        let query = query.trim().to_uppercase();
        if query.is_empty() {
            return None;
        }

        if let Some((jersey, team)) = parse_jersey_key(&query) {
            return self
                .players
                .iter()
                .enumerate()
                .find(|(_, p)| u32::from(p.jersey) == jersey && p.team.eq_ignore_ascii_case(team));
        }

        self.players
            .iter()
            .enumerate()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(&query))
    }
}

/// Split `"99-NYY"` or `"99NYY"` into jersey and team.
///
/// Returns `None` unless the jersey is positive and the team is non-empty.
fn parse_jersey_key(query: &str) -> Option<(u32, &str)> {
    let (digits, team) = match query.split_once('-') {
        Some((head, tail)) => (leading_digits(head), tail.trim()),
        None => {
            let digits = leading_digits(query);
            (digits, query[digits.len()..].trim())
        }
    };
    let jersey: u32 = digits.parse().ok()?;
    if jersey == 0 || team.is_empty() {
        return None;
    }
    Some((jersey, team))
}

fn leading_digits(text: &str) -> &str {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Handedness, Position};

    fn roster() -> Roster {
        Roster::embedded().unwrap()
    }

    #[test]
    fn test_embedded_roster_parses() {
        let roster = roster();
        assert!(roster.len() >= 18);
        assert!(roster.players().iter().all(|p| p.batting_avg <= 1000));
    }

    #[test]
    fn test_jersey_team_keys_unique() {
        let roster = roster();
        let mut keys: Vec<(u8, &str)> =
            roster.players().iter().map(|p| (p.jersey, p.team.as_str())).collect();
        keys.sort();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let roster = roster();
        let (idx, player) = roster.find("  williams ").unwrap();
        assert_eq!(player.name, "WILLIAMS");
        assert_eq!(player.year, 1941);
        assert_eq!(player.hand, Handedness::Left);
        assert_eq!(player.position, Position::LeftField);
        assert_eq!(roster.get(idx), Some(player));
    }

    #[test]
    fn test_find_by_jersey_and_team() {
        let roster = roster();
        assert_eq!(roster.find("3-NYY").unwrap().1.name, "RUTH");
        assert_eq!(roster.find("3nyy").unwrap().1.name, "RUTH");
        assert_eq!(roster.find("44-mil").unwrap().1.name, "AARON");
    }

    #[test]
    fn test_jersey_miss_does_not_fall_back() {
        let roster = roster();
        assert!(roster.find("99-NYY").is_none());
        assert!(roster.find("3-XYZ").is_none());
    }

    #[test]
    fn test_unknown_and_empty_queries() {
        let roster = roster();
        assert!(roster.find("").is_none());
        assert!(roster.find("   ").is_none());
        assert!(roster.find("WAGNER").is_none());
        // a partial name is not a match
        assert!(roster.find("WILL").is_none());
    }

    #[test]
    fn test_index_of_borrowed_player() {
        let roster = roster();
        let (idx, player) = roster.find("MAYS").unwrap();
        assert_eq!(roster.index_of(player), Some(idx));

        let stranger = player.clone();
        assert_eq!(roster.index_of(&stranger), None);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = Roster::from_json(r#"{"players": []}"#).unwrap_err();
        assert!(matches!(err, GameError::InsufficientRoster { .. }));
    }

    #[test]
    fn test_malformed_roster_rejected() {
        let err = Roster::from_json(r#"{"players": [{"name": "X"}]}"#).unwrap_err();
        assert!(matches!(err, GameError::Roster(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, ROSTER_JSON).unwrap();
        assert_eq!(Roster::from_path(&path).unwrap(), roster());
    }
}
