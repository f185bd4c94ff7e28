//! Batting lineups
//!
//! A `Lineup` is nine distinct player references, fixed for the whole game.
//! All validation happens here, before a simulation is built; the engine
//! itself never re-checks lineups.

use super::Player;
use crate::error::{GameError, Result};

pub const LINEUP_SIZE: usize = 9;

#[derive(Debug, Clone)]
pub struct Lineup<'r> {
    batters: Vec<&'r Player>,
}

impl<'r> Lineup<'r> {
    pub fn new(batters: Vec<&'r Player>) -> Result<Self> {
        if batters.len() != LINEUP_SIZE {
            return Err(GameError::InvalidLineupSize {
                expected: LINEUP_SIZE,
                found: batters.len(),
            });
        }
        for (i, player) in batters.iter().enumerate() {
            if batters[..i].iter().any(|other| std::ptr::eq(*other, *player)) {
                return Err(GameError::DuplicatePlayer { name: player.name.clone() });
            }
        }
        Ok(Self { batters })
    }

    /// Batter in slot `index` (taken modulo the lineup size).
    pub fn batter(&self, index: usize) -> &'r Player {
        self.batters[index % LINEUP_SIZE]
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.batters.iter().any(|p| std::ptr::eq(*p, player))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'r Player> + '_ {
        self.batters.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.batters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batters.is_empty()
    }
}

/// Reject a pair of lineups that share a player.
pub fn validate_pair(visitors: &Lineup<'_>, home: &Lineup<'_>) -> Result<()> {
    match visitors.iter().find(|p| home.contains(p)) {
        Some(p) => Err(GameError::RosterConflict { name: p.name.clone() }),
        None => Ok(()),
    }
}

/// Incremental lineup entry for interactive selection.
#[derive(Debug, Default)]
pub struct LineupBuilder<'r> {
    picks: Vec<&'r Player>,
}

impl<'r> LineupBuilder<'r> {
    pub fn new() -> Self {
        Self { picks: Vec::with_capacity(LINEUP_SIZE) }
    }

    /// Append a batter; a duplicate leaves the builder unchanged.
    pub fn add(&mut self, player: &'r Player) -> Result<usize> {
        if self.is_full() {
            return Err(GameError::InvalidLineupSize {
                expected: LINEUP_SIZE,
                found: LINEUP_SIZE + 1,
            });
        }
        if self.picks.iter().any(|p| std::ptr::eq(*p, player)) {
            return Err(GameError::DuplicatePlayer { name: player.name.clone() });
        }
        self.picks.push(player);
        Ok(self.picks.len())
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.picks.len() == LINEUP_SIZE
    }

    pub fn build(self) -> Result<Lineup<'r>> {
        Lineup::new(self.picks)
    }
}
