//! Play-by-play wording
//!
//! Wording variants and field locations are drawn from the game's generator,
//! so they belong to the replayable stream just like the outcome rolls. The
//! draw order per outcome is fixed; changing it changes every later play.
//!
//! Draws happen after the play has been applied: ground-out wording looks at
//! the post-play outs and runners.

use super::bases::BaseState;
use super::rng::DualLcg;
use crate::error::Result;
use crate::models::{FieldLocation, PlayOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Draw window over [`FieldLocation::ALL`].
#[derive(Debug, Clone, Copy)]
struct Zone(i32, i32);

const ANYWHERE: Zone = Zone(0, 9);
const OUTFIELD: Zone = Zone(0, 4);
const DEEP: Zone = Zone(0, 2);
const INFIELD: Zone = Zone(5, 9);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleKind {
    Over,
    InfieldHit,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleKind {
    TexasLeaguer,
    Over,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeRunKind {
    Homer,
    OverCenterFieldWall,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundOutKind {
    RunnerOutAtSecond,
    RunnerOutInRundown,
    RunnerOutAtHome,
    Routine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlyOutKind {
    Long,
    Short,
    Pop,
    Foul,
    Routine,
}

/// Narration payload for one play: the wording variant and where the ball went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum PlayCall {
    Single { kind: SingleKind, location: FieldLocation },
    Double { kind: DoubleKind, location: FieldLocation },
    Triple { location: FieldLocation },
    HomeRun { kind: HomeRunKind, location: FieldLocation },
    GroundOut { kind: GroundOutKind, location: FieldLocation },
    FlyOut { kind: FlyOutKind, location: FieldLocation },
    LineOut { location: FieldLocation },
    StrikeoutSwinging,
    StrikeoutCalled,
    Walk,
    Error { location: FieldLocation },
    DoublePlay { location: FieldLocation },
    TriplePlay,
    FieldersChoice,
    SacrificeFly { location: FieldLocation },
}

impl PlayCall {
    pub fn outcome(&self) -> PlayOutcome {
        match self {
            PlayCall::Single { .. } => PlayOutcome::Single,
            PlayCall::Double { .. } => PlayOutcome::Double,
            PlayCall::Triple { .. } => PlayOutcome::Triple,
            PlayCall::HomeRun { .. } => PlayOutcome::HomeRun,
            PlayCall::GroundOut { .. } => PlayOutcome::GroundOut,
            PlayCall::FlyOut { .. } => PlayOutcome::FlyOut,
            PlayCall::LineOut { .. } => PlayOutcome::LineOut,
            PlayCall::StrikeoutSwinging => PlayOutcome::StrikeoutSwinging,
            PlayCall::StrikeoutCalled => PlayOutcome::StrikeoutCalled,
            PlayCall::Walk => PlayOutcome::Walk,
            PlayCall::Error { .. } => PlayOutcome::Error,
            PlayCall::DoublePlay { .. } => PlayOutcome::DoublePlay,
            PlayCall::TriplePlay => PlayOutcome::TriplePlay,
            PlayCall::FieldersChoice => PlayOutcome::FieldersChoice,
            PlayCall::SacrificeFly { .. } => PlayOutcome::SacrificeFly,
        }
    }

    pub fn location(&self) -> Option<FieldLocation> {
        match *self {
            PlayCall::Single { location, .. }
            | PlayCall::Double { location, .. }
            | PlayCall::Triple { location }
            | PlayCall::HomeRun { location, .. }
            | PlayCall::GroundOut { location, .. }
            | PlayCall::FlyOut { location, .. }
            | PlayCall::LineOut { location }
            | PlayCall::Error { location }
            | PlayCall::DoublePlay { location }
            | PlayCall::SacrificeFly { location } => Some(location),
            PlayCall::StrikeoutSwinging
            | PlayCall::StrikeoutCalled
            | PlayCall::Walk
            | PlayCall::TriplePlay
            | PlayCall::FieldersChoice => None,
        }
    }
}

fn draw_location(rng: &mut DualLcg, zone: Zone) -> Result<FieldLocation> {
    let index = rng.next_int(zone.0, zone.1)?;
    // zones are constants inside 0..=9
    Ok(FieldLocation::from_index(index as usize).unwrap_or(FieldLocation::Center))
}

fn draw_variant(rng: &mut DualLcg) -> Result<i32> {
    rng.next_int(1, 10)
}

/// Draw the wording for `outcome` given the state after the play.
pub fn call_for(
    outcome: PlayOutcome,
    outs_after: u8,
    bases_after: BaseState,
    rng: &mut DualLcg,
) -> Result<PlayCall> {
    let call = match outcome {
        PlayOutcome::Single => {
            let variant = draw_variant(rng)?;
            let location = draw_location(rng, ANYWHERE)?;
            let kind = match variant {
                1..=2 => SingleKind::Over,
                3 => SingleKind::InfieldHit,
                _ => SingleKind::To,
            };
            PlayCall::Single { kind, location }
        }
        PlayOutcome::Double => {
            let location = draw_location(rng, OUTFIELD)?;
            let kind = match draw_variant(rng)? {
                1..=2 => DoubleKind::TexasLeaguer,
                3 => DoubleKind::Over,
                _ => DoubleKind::To,
            };
            PlayCall::Double { kind, location }
        }
        PlayOutcome::Triple => PlayCall::Triple { location: draw_location(rng, OUTFIELD)? },
        PlayOutcome::HomeRun => {
            let variant = draw_variant(rng)?;
            let location = draw_location(rng, DEEP)?;
            let kind = match variant {
                1..=3 => HomeRunKind::Homer,
                4 => HomeRunKind::OverCenterFieldWall,
                _ => HomeRunKind::To,
            };
            PlayCall::HomeRun { kind, location }
        }
        PlayOutcome::GroundOut => {
            let location = draw_location(rng, INFIELD)?;
            let variant = draw_variant(rng)?;
            let kind = if variant <= 2 && bases_after.first() {
                GroundOutKind::RunnerOutAtSecond
            } else if variant <= 3 && bases_after.first() && bases_after.second() {
                GroundOutKind::RunnerOutInRundown
            } else if variant <= 4 && bases_after.third() && outs_after < 2 {
                GroundOutKind::RunnerOutAtHome
            } else {
                GroundOutKind::Routine
            };
            PlayCall::GroundOut { kind, location }
        }
        PlayOutcome::FlyOut => {
            let location = draw_location(rng, OUTFIELD)?;
            let kind = match draw_variant(rng)? {
                1..=2 => FlyOutKind::Long,
                3 => FlyOutKind::Short,
                4 => FlyOutKind::Pop,
                5 => FlyOutKind::Foul,
                _ => FlyOutKind::Routine,
            };
            PlayCall::FlyOut { kind, location }
        }
        PlayOutcome::LineOut => PlayCall::LineOut { location: draw_location(rng, INFIELD)? },
        PlayOutcome::StrikeoutSwinging => PlayCall::StrikeoutSwinging,
        PlayOutcome::StrikeoutCalled => PlayCall::StrikeoutCalled,
        PlayOutcome::Walk => PlayCall::Walk,
        PlayOutcome::Error => PlayCall::Error { location: draw_location(rng, INFIELD)? },
        PlayOutcome::DoublePlay => {
            PlayCall::DoublePlay { location: draw_location(rng, INFIELD)? }
        }
        PlayOutcome::TriplePlay => PlayCall::TriplePlay,
        PlayOutcome::FieldersChoice => PlayCall::FieldersChoice,
        PlayOutcome::SacrificeFly => {
            PlayCall::SacrificeFly { location: draw_location(rng, OUTFIELD)? }
        }
    };
    Ok(call)
}

impl fmt::Display for PlayCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PlayCall::Single { kind, location } => match kind {
                SingleKind::Over => write!(f, "SINGLE OVER {location}"),
                SingleKind::InfieldHit => write!(f, "INF. HIT TO {location}"),
                SingleKind::To => write!(f, "SINGLE TO {location}"),
            },
            PlayCall::Double { kind, location } => match kind {
                DoubleKind::TexasLeaguer => write!(f, "TEXAS LEAGER DOUBLE TO {location}"),
                DoubleKind::Over => write!(f, "DOUBLE OVER {location}"),
                DoubleKind::To => write!(f, "DOUBLE TO {location}"),
            },
            PlayCall::Triple { location } => write!(f, "TRIPLE TO {location}"),
            PlayCall::HomeRun { kind, location } => match kind {
                HomeRunKind::Homer => write!(f, "HOMER  TO {location}"),
                HomeRunKind::OverCenterFieldWall => f.write_str("BLAST OVER C F WALL"),
                HomeRunKind::To => write!(f, "HOME RUN TO {location}"),
            },
            PlayCall::GroundOut { kind, location } => {
                write!(f, "GROUNDER TO {location}")?;
                match kind {
                    GroundOutKind::RunnerOutAtSecond => {
                        f.write_str(" BATTER SAFE AT FIRST RUNNER OUT AT SECOND")
                    }
                    GroundOutKind::RunnerOutInRundown => {
                        f.write_str(" BATTER SAFE AT FIRST RUNNER OUT IN RUNDOWN")
                    }
                    GroundOutKind::RunnerOutAtHome => {
                        f.write_str(" BATTER SAFE AT FIRST RUNNER OUT AT HOME")
                    }
                    GroundOutKind::Routine => Ok(()),
                }
            }
            PlayCall::FlyOut { kind, location } => match kind {
                FlyOutKind::Long => write!(f, "LONG FLY TO {location}"),
                FlyOutKind::Short => write!(f, "SHORT FLY TO {location}"),
                FlyOutKind::Pop => write!(f, "POP FLY TO {location}"),
                FlyOutKind::Foul => write!(f, "FOUL OUT TO {location}"),
                FlyOutKind::Routine => write!(f, "FLY BALL TO {location}"),
            },
            PlayCall::LineOut { location } => write!(f, "LINE DRIVE TO {location}"),
            PlayCall::StrikeoutSwinging => f.write_str("STRUCK OUT SWINGING"),
            PlayCall::StrikeoutCalled => f.write_str("STRUCK OUT CALLED"),
            PlayCall::Walk => f.write_str("BASE   ON BALLS"),
            PlayCall::Error { location } => write!(f, "ERROR ON {location} FIELDER"),
            PlayCall::DoublePlay { location } => write!(f, "GROUNDER TO {location} DOUBLE PLAY"),
            PlayCall::TriplePlay => f.write_str("LINE DRIVE TRIPLE PLAY"),
            PlayCall::FieldersChoice => {
                f.write_str("GROUNDER TO SHORT BATTER SAFE AT FIRST RUNNER OUT AT SECOND")
            }
            PlayCall::SacrificeFly { location } => write!(f, "LONG FLY TO {location}"),
        }
    }
}

/// Trailing run phrase, empty when nobody scored.
pub fn runs_phrase(runs: u8) -> String {
    match runs {
        0 => String::new(),
        1 => " RUNNER SCORES".to_string(),
        2 => " TWO RUNS SCORE".to_string(),
        3 => " 3 RUNS COME IN".to_string(),
        n => format!(" {n} RUNS SCORE"),
    }
}
