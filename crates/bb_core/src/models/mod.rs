pub mod events;
pub mod lineup;
pub mod play;
pub mod player;
pub mod result;

pub use events::{
    GameEvent, GameListener, Half, HalfInningTotals, NullListener, PlayEvent, StealEvent,
};
pub use lineup::{validate_pair, Lineup, LineupBuilder, LINEUP_SIZE};
pub use play::{FieldLocation, PlayOutcome};
pub use player::{Handedness, Player, Position};
pub use result::{GameResult, InningLine, TeamSide, TeamTotals};
