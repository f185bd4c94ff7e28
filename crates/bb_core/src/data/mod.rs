//! Static game data

pub mod roster;

pub use roster::{Roster, ROSTER_JSON};
