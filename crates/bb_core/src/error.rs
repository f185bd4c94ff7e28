use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid draw range: max {max} is below min {min}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Invalid lineup size: expected {expected}, found {found}")]
    InvalidLineupSize { expected: usize, found: usize },

    #[error("Player selected twice: {name}")]
    DuplicatePlayer { name: String },

    #[error("Player appears in both lineups: {name}")]
    RosterConflict { name: String },

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Roster too small: {available} players available, {needed} needed")]
    InsufficientRoster { available: usize, needed: usize },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Roster data error: {0}")]
    Roster(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Errors raised while the user is still assembling a lineup can be retried
    /// with different input; everything else is a contract or data failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::UnknownPlayer(_)
                | GameError::DuplicatePlayer { .. }
                | GameError::RosterConflict { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
