//! Simulation tuning parameters
//!
//! The hit bonus and every bucket cutoff used by the outcome classifier and
//! the steal sub-decision live here. Defaults reproduce the classic game
//! exactly; a JSON file can override any subset of fields.
//!
//! ```json
//! { "hit_bonus": 40, "out_buckets": { "walk": 27 } }
//! ```

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

/// Environment variable naming a tuning JSON file.
pub const TUNING_PATH_ENV: &str = "BB_TUNING_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimTuning {
    /// Added to the batter's rating to form the hit threshold on a 1..=1000 roll.
    pub hit_bonus: i32,
    pub hit_buckets: HitBuckets,
    pub out_buckets: OutBuckets,
    pub steal_odds: StealOdds,
    /// Innings after which a game with a decided score ends.
    pub regulation_innings: u32,
}

/// Cumulative cutoffs on a 1..=100 roll once a hit is decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitBuckets {
    pub home_run: i32,
    pub triple: i32,
    pub double: i32,
}

/// Cumulative cutoffs on a 1..=100 roll for the non-hit branch, in
/// evaluation order. Anything above `fly_out` is a line out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutBuckets {
    pub double_play: i32,
    pub sacrifice_fly: i32,
    pub strikeout_swinging: i32,
    pub strikeout_called: i32,
    pub walk: i32,
    pub error: i32,
    pub fielders_choice: i32,
    pub triple_play: i32,
    pub ground_out: i32,
    pub fly_out: i32,
}

/// Die sizes for the pre-pitch steal checks; each fires on a roll of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StealOdds {
    pub steal_second: i32,
    pub double_steal: i32,
    pub caught_stealing: i32,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            hit_bonus: 50,
            hit_buckets: HitBuckets::default(),
            out_buckets: OutBuckets::default(),
            steal_odds: StealOdds::default(),
            regulation_innings: 9,
        }
    }
}

impl Default for HitBuckets {
    fn default() -> Self {
        Self { home_run: 5, triple: 12, double: 30 }
    }
}

impl Default for OutBuckets {
    fn default() -> Self {
        Self {
            double_play: 3,
            sacrifice_fly: 8,
            strikeout_swinging: 15,
            strikeout_called: 20,
            walk: 25,
            error: 30,
            fielders_choice: 32,
            triple_play: 33,
            ground_out: 65,
            fly_out: 85,
        }
    }
}

impl Default for StealOdds {
    fn default() -> Self {
        Self { steal_second: 12, double_steal: 20, caught_stealing: 25 }
    }
}

impl SimTuning {
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: SimTuning = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidTuning(format!("unparseable tuning JSON: {e}")))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            GameError::InvalidTuning(msg) => {
                GameError::InvalidTuning(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=1000).contains(&self.hit_bonus) {
            return Err(GameError::InvalidTuning(format!(
                "hit_bonus must be within 0..=1000, got {}",
                self.hit_bonus
            )));
        }
        if self.regulation_innings == 0 {
            return Err(GameError::InvalidTuning("regulation_innings must be at least 1".into()));
        }

        let h = &self.hit_buckets;
        check_monotone("hit_buckets", &[h.home_run, h.triple, h.double])?;

        let o = &self.out_buckets;
        check_monotone(
            "out_buckets",
            &[
                o.double_play,
                o.sacrifice_fly,
                o.strikeout_swinging,
                o.strikeout_called,
                o.walk,
                o.error,
                o.fielders_choice,
                o.triple_play,
                o.ground_out,
                o.fly_out,
            ],
        )?;

        let s = &self.steal_odds;
        for (name, sides) in [
            ("steal_second", s.steal_second),
            ("double_steal", s.double_steal),
            ("caught_stealing", s.caught_stealing),
        ] {
            if sides < 1 {
                return Err(GameError::InvalidTuning(format!(
                    "steal_odds.{name} must be at least 1, got {sides}"
                )));
            }
        }
        Ok(())
    }
}

fn check_monotone(group: &str, cutoffs: &[i32]) -> Result<()> {
    let mut prev = 0;
    for &cutoff in cutoffs {
        if cutoff < prev || cutoff > 100 {
            return Err(GameError::InvalidTuning(format!(
                "{group} cutoffs must be non-decreasing within 0..=100: {cutoffs:?}"
            )));
        }
        prev = cutoff;
    }
    Ok(())
}

/// Tuning named by `BB_TUNING_PATH`, or the defaults when it is unset/blank.
pub fn tuning_from_env() -> Result<SimTuning> {
    let Ok(path) = env::var(TUNING_PATH_ENV) else {
        return Ok(SimTuning::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(SimTuning::default());
    }

    log::debug!("loading tuning from {TUNING_PATH_ENV}='{path}'");
    SimTuning::from_path(Path::new(path))
}
