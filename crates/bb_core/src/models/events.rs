use super::{GameResult, PlayOutcome, TeamSide};
use crate::engine::bases::BaseState;
use crate::engine::narration::{runs_phrase, PlayCall};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    pub fn batting_side(self) -> TeamSide {
        match self {
            Half::Top => TeamSide::Visitors,
            Half::Bottom => TeamSide::Home,
        }
    }
}

/// Runs/hits/errors inside one half-inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HalfInningTotals {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StealEvent {
    /// Runner on first takes second.
    StoleSecond,
    /// Runners on first and second each move up one base.
    DoubleSteal,
    /// Runner on first thrown out; one out recorded.
    CaughtStealing,
}

impl fmt::Display for StealEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StealEvent::StoleSecond => f.write_str("RUNNER STEALS SECOND"),
            StealEvent::DoubleSteal => f.write_str("DOUBLE STEAL RUNNERS ADVANCE"),
            StealEvent::CaughtStealing => f.write_str("RUNNER OUT STEALING SECOND"),
        }
    }
}

/// One resolved plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub batter: String,
    pub outcome: PlayOutcome,
    pub call: PlayCall,
    pub runs: u8,
    pub outs_after: u8,
    pub bases_after: BaseState,
    /// Whether the base situation line follows this play.
    pub show_bases: bool,
}

impl fmt::Display for PlayEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} UP  {}{}", self.batter, self.call, runs_phrase(self.runs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    HalfInningStarted { inning: u32, half: Half },
    Steal { steal: StealEvent, bases_after: BaseState, outs_after: u8 },
    Play(PlayEvent),
    HalfInningEnded { inning: u32, half: Half, totals: HalfInningTotals },
    InningEnded { inning: u32, visitors: u32, home: u32 },
    GameOver(GameResult),
}

/// Receives events as the simulation produces them.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

/// Collects every event, mostly for tests and replays.
impl GameListener for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl GameListener for NullListener {
    fn on_event(&mut self, _event: &GameEvent) {}
}
