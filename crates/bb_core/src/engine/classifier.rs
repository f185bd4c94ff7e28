//! At-bat outcome classifier
//!
//! Two-stage weighted roll:
//!
//! 1. `1..=1000` against `rating + hit_bonus` decides hit vs. non-hit.
//! 2. `1..=100` picks the category from cumulative buckets.
//!
//! Non-hit buckets are evaluated in a fixed order and some are gated on the
//! game situation. A gated bucket whose condition fails does not hand its
//! range to anyone: the roll simply falls through to the next bucket's test.
//! The resulting distribution is situation-dependent by construction.

use super::bases::BaseState;
use super::rng::DualLcg;
use super::state::GameState;
use crate::config::{HitBuckets, OutBuckets, SimTuning};
use crate::error::Result;
use crate::models::PlayOutcome;

/// Situation the batter steps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AtBatContext {
    pub outs: u8,
    pub bases: BaseState,
}

impl AtBatContext {
    pub fn new(outs: u8, bases: BaseState) -> Self {
        Self { outs, bases }
    }
}

impl From<&GameState> for AtBatContext {
    fn from(state: &GameState) -> Self {
        Self { outs: state.outs, bases: state.bases }
    }
}

/// Draw one outcome. Consumes exactly two values from `rng`.
pub fn classify(
    rating: i32,
    ctx: &AtBatContext,
    rng: &mut DualLcg,
    tuning: &SimTuning,
) -> Result<PlayOutcome> {
    let roll = rng.next_int(1, 1000)?;
    let hit_threshold = rating + tuning.hit_bonus;

    let bucket_roll = rng.next_int(1, 100)?;
    let outcome = if roll <= hit_threshold {
        classify_hit(bucket_roll, &tuning.hit_buckets)
    } else {
        classify_non_hit(bucket_roll, ctx, &tuning.out_buckets)
    };
    Ok(outcome)
}

pub fn classify_hit(roll: i32, buckets: &HitBuckets) -> PlayOutcome {
    if roll <= buckets.home_run {
        PlayOutcome::HomeRun
    } else if roll <= buckets.triple {
        PlayOutcome::Triple
    } else if roll <= buckets.double {
        PlayOutcome::Double
    } else {
        PlayOutcome::Single
    }
}

pub fn classify_non_hit(roll: i32, ctx: &AtBatContext, buckets: &OutBuckets) -> PlayOutcome {
    let bases = &ctx.bases;
    let outs = ctx.outs;

    if roll <= buckets.double_play && bases.first() && outs < 2 {
        PlayOutcome::DoublePlay
    } else if roll <= buckets.sacrifice_fly && outs < 2 && (bases.second() || bases.third()) {
        PlayOutcome::SacrificeFly
    } else if roll <= buckets.strikeout_swinging {
        PlayOutcome::StrikeoutSwinging
    } else if roll <= buckets.strikeout_called {
        PlayOutcome::StrikeoutCalled
    } else if roll <= buckets.walk {
        PlayOutcome::Walk
    } else if roll <= buckets.error {
        PlayOutcome::Error
    } else if roll <= buckets.fielders_choice && bases.first() {
        PlayOutcome::FieldersChoice
    } else if roll <= buckets.triple_play && bases.first() && bases.second() && outs == 0 {
        PlayOutcome::TriplePlay
    } else if roll <= buckets.ground_out {
        PlayOutcome::GroundOut
    } else if roll <= buckets.fly_out {
        PlayOutcome::FlyOut
    } else {
        PlayOutcome::LineOut
    }
}
