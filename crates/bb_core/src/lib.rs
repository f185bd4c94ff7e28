//! # bb_core - Deterministic At-Bat Baseball Simulation Engine
//!
//! Two nine-man lineups, one seeded generator, one game played at-bat by
//! at-bat with a real-time event stream.
//!
//! ## Features
//! - Reproducible games (same seed text + same lineups = same event stream)
//! - Situation-gated outcome classifier with tunable buckets
//! - Embedded historical player roster with name and jersey lookup
//! - Line score and box-score totals, serializable with serde

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

pub use config::{tuning_from_env, SimTuning, TUNING_PATH_ENV};
pub use data::Roster;
pub use engine::{draft_home_lineup, DualLcg, GamePhase, Simulation};
pub use error::{GameError, Result};
pub use models::{
    GameEvent, GameListener, GameResult, Lineup, LineupBuilder, NullListener, Player, TeamSide,
    LINEUP_SIZE,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
