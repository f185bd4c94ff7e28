//! Simulation engine
//!
//! Every random decision in a game flows through one `DualLcg`, in a fixed
//! order, so identical seed text and lineups replay identically.

pub mod bases;
pub mod classifier;
pub mod draft;
pub mod executor;
pub mod game;
pub mod narration;
pub mod rng;
pub mod state;
pub mod steal;

pub use bases::BaseState;
pub use classifier::{classify, AtBatContext};
pub use draft::draft_home_lineup;
pub use executor::{apply_outcome, execute_play};
pub use game::{GamePhase, Simulation};
pub use narration::PlayCall;
pub use rng::DualLcg;
pub use state::GameState;
pub use steal::attempt_steal;
