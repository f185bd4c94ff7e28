//! Play executor
//!
//! Maps a `PlayOutcome` onto the game state: runs, outs, hit/error counters
//! and the bases left behind. The mapping is an exhaustive match so a new
//! outcome cannot be added without deciding its effects.

use super::bases::{BaseState, FIRST, SECOND, THIRD};
use super::narration;
use super::rng::DualLcg;
use super::state::GameState;
use crate::error::Result;
use crate::models::{PlayEvent, PlayOutcome, Player};

/// Apply `outcome` to `state` and return the runs it produced.
///
/// Runs are already credited to the batting team when this returns.
pub fn apply_outcome(state: &mut GameState, outcome: PlayOutcome) -> u8 {
    let bases = state.bases;
    let runs = match outcome {
        PlayOutcome::Single => {
            state.bases = batter_to(bases.advance(1), FIRST);
            state.credit_hit();
            bases.runs_scored(1)
        }
        PlayOutcome::Double => {
            state.bases = batter_to(bases.advance(2), SECOND);
            state.credit_hit();
            bases.runs_scored(2)
        }
        PlayOutcome::Triple => {
            state.bases = batter_to(BaseState::EMPTY, THIRD);
            state.credit_hit();
            bases.runs_scored(3)
        }
        PlayOutcome::HomeRun => {
            state.bases = BaseState::EMPTY;
            state.credit_hit();
            1 + bases.occupied_count()
        }
        PlayOutcome::Walk => {
            let (next, runs) = walk(bases);
            state.bases = next;
            runs
        }
        PlayOutcome::Error => {
            state.bases = batter_to(bases.advance(1), FIRST);
            state.credit_error();
            bases.runs_scored(1)
        }
        PlayOutcome::DoublePlay | PlayOutcome::TriplePlay => {
            state.bases = BaseState::EMPTY;
            0
        }
        PlayOutcome::FieldersChoice => {
            // never scores: a runner pushed past third is the one cut down
            state.bases = batter_to(bases.advance(1), FIRST);
            0
        }
        PlayOutcome::SacrificeFly => {
            if bases.third() {
                let mut next = bases;
                next.vacate(THIRD);
                state.bases = next;
                1
            } else {
                0
            }
        }
        PlayOutcome::GroundOut
        | PlayOutcome::FlyOut
        | PlayOutcome::LineOut
        | PlayOutcome::StrikeoutSwinging
        | PlayOutcome::StrikeoutCalled => 0,
    };

    state.add_outs(outcome.outs());
    state.credit_runs(runs);
    runs
}

fn batter_to(mut bases: BaseState, base: usize) -> BaseState {
    bases.occupy(base);
    bases
}

/// Only runners forced by the batter move; a loaded walk forces one run.
fn walk(bases: BaseState) -> (BaseState, u8) {
    let mut next = bases;
    let mut runs = 0;
    if bases.is_loaded() {
        runs = 1;
    } else if bases.first() && bases.second() {
        next.occupy(THIRD);
    } else if bases.first() {
        next.occupy(SECOND);
    }
    next.occupy(FIRST);
    (next, runs)
}

/// Apply the play, then draw its narration and the base-situation check.
///
/// Draw order: narration draws for the outcome, then one `1..=3` roll that
/// shows the base situation on a 1 when anyone is on.
pub fn execute_play(
    state: &mut GameState,
    outcome: PlayOutcome,
    batter: &Player,
    rng: &mut DualLcg,
) -> Result<PlayEvent> {
    let runs = apply_outcome(state, outcome);
    let call = narration::call_for(outcome, state.outs, state.bases, rng)?;
    let show_bases = rng.next_int(1, 3)? == 1 && !state.bases.is_empty();

    Ok(PlayEvent {
        batter: batter.name.clone(),
        outcome,
        call,
        runs,
        outs_after: state.outs,
        bases_after: state.bases,
        show_bases,
    })
}
