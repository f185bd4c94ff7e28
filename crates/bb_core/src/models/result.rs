//! Final game output
//!
//! `GameResult` is the only thing that outlives a simulation. It carries the
//! R/H/E totals the console box score prints and the inning-by-inning line.

use serde::{Deserialize, Serialize};

/// Which club is batting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Visitors,
    Home,
}

impl TeamSide {
    pub fn index(self) -> usize {
        match self {
            TeamSide::Visitors => 0,
            TeamSide::Home => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamSide::Visitors => "VISITORS",
            TeamSide::Home => "HOMETEAM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamTotals {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

/// Runs per half of one inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InningLine {
    pub visitors: u32,
    pub home: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub visitors: TeamTotals,
    pub home: TeamTotals,
    pub innings: u32,
    pub line_score: Vec<InningLine>,
}

impl GameResult {
    pub fn totals(&self, side: TeamSide) -> &TeamTotals {
        match side {
            TeamSide::Visitors => &self.visitors,
            TeamSide::Home => &self.home,
        }
    }

    pub fn winner(&self) -> Option<TeamSide> {
        use std::cmp::Ordering;
        match self.visitors.runs.cmp(&self.home.runs) {
            Ordering::Greater => Some(TeamSide::Visitors),
            Ordering::Less => Some(TeamSide::Home),
            Ordering::Equal => None,
        }
    }

    pub fn is_extra_innings(&self, regulation: u32) -> bool {
        self.innings > regulation
    }
}
