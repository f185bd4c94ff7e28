//! Mutable per-game state
//!
//! Owned by the `Simulation`; only the play executor and the inning loop
//! write to it.

use super::bases::BaseState;
use crate::models::{
    GameResult, Half, HalfInningTotals, InningLine, TeamSide, TeamTotals, LINEUP_SIZE,
};

pub const OUTS_PER_HALF: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub inning: u32,
    pub half: Half,
    pub outs: u8,
    pub bases: BaseState,
    totals: [TeamTotals; 2],
    batter_index: [usize; 2],
    pub half_totals: HalfInningTotals,
    line_score: Vec<InningLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: BaseState::EMPTY,
            totals: [TeamTotals::default(); 2],
            batter_index: [0; 2],
            half_totals: HalfInningTotals::default(),
            line_score: Vec::new(),
        }
    }

    pub fn batting_side(&self) -> TeamSide {
        self.half.batting_side()
    }

    /// Reset outs, bases and the half counters for a new half-inning.
    pub fn start_half(&mut self, half: Half) {
        self.half = half;
        self.outs = 0;
        self.bases.clear();
        self.half_totals = HalfInningTotals::default();
        while self.line_score.len() < self.inning as usize {
            self.line_score.push(InningLine::default());
        }
    }

    pub fn is_half_over(&self) -> bool {
        self.outs >= OUTS_PER_HALF
    }

    pub fn add_outs(&mut self, outs: u8) {
        self.outs = self.outs.saturating_add(outs);
    }

    pub fn totals(&self, side: TeamSide) -> &TeamTotals {
        &self.totals[side.index()]
    }

    pub fn score(&self, side: TeamSide) -> u32 {
        self.totals[side.index()].runs
    }

    pub fn is_tied(&self) -> bool {
        self.score(TeamSide::Visitors) == self.score(TeamSide::Home)
    }

    /// Runs for the batting team: cumulative, half-inning and line score.
    pub fn credit_runs(&mut self, runs: u8) {
        if runs == 0 {
            return;
        }
        let runs = u32::from(runs);
        let side = self.batting_side();
        self.totals[side.index()].runs += runs;
        self.half_totals.runs += runs;
        if let Some(line) = self.line_score.get_mut(self.inning as usize - 1) {
            match side {
                TeamSide::Visitors => line.visitors += runs,
                TeamSide::Home => line.home += runs,
            }
        }
    }

    pub fn credit_hit(&mut self) {
        let side = self.batting_side();
        self.totals[side.index()].hits += 1;
        self.half_totals.hits += 1;
    }

    /// Errors are booked against the side at bat, as the classic box score did.
    pub fn credit_error(&mut self) {
        let side = self.batting_side();
        self.totals[side.index()].errors += 1;
        self.half_totals.errors += 1;
    }

    pub fn current_batter(&self, side: TeamSide) -> usize {
        self.batter_index[side.index()]
    }

    /// Move `side` to its next batter, wrapping after the ninth.
    pub fn advance_batter(&mut self, side: TeamSide) -> usize {
        let slot = &mut self.batter_index[side.index()];
        *slot = (*slot + 1) % LINEUP_SIZE;
        *slot
    }

    pub fn line_score(&self) -> &[InningLine] {
        &self.line_score
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            visitors: self.totals[TeamSide::Visitors.index()],
            home: self.totals[TeamSide::Home.index()],
            innings: self.line_score.len() as u32,
            line_score: self.line_score.clone(),
        }
    }
}
