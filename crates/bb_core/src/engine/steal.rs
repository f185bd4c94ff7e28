//! Pre-pitch base stealing
//!
//! Three checks run before every at-bat, in order, and stop at the first one
//! that fires. Each check always draws its die, even when the bases make it
//! impossible, so the stream stays aligned regardless of the situation.

use super::bases::{FIRST, SECOND, THIRD};
use super::rng::DualLcg;
use super::state::GameState;
use crate::config::StealOdds;
use crate::error::Result;
use crate::models::StealEvent;

pub fn attempt_steal(
    state: &mut GameState,
    rng: &mut DualLcg,
    odds: &StealOdds,
) -> Result<Option<StealEvent>> {
    let bases = state.bases;
    let running = state.outs < 2;

    if rng.next_int(1, odds.steal_second)? == 1 && bases.first() && !bases.second() && running {
        state.bases.vacate(FIRST);
        state.bases.occupy(SECOND);
        return Ok(Some(StealEvent::StoleSecond));
    }

    if rng.next_int(1, odds.double_steal)? == 1
        && bases.first()
        && bases.second()
        && !bases.third()
        && running
    {
        state.bases.vacate(FIRST);
        state.bases.occupy(SECOND);
        state.bases.occupy(THIRD);
        return Ok(Some(StealEvent::DoubleSteal));
    }

    if rng.next_int(1, odds.caught_stealing)? == 1 && bases.first() && running {
        state.bases.vacate(FIRST);
        state.add_outs(1);
        return Ok(Some(StealEvent::CaughtStealing));
    }

    Ok(None)
}
