use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayOutcome {
    Single,
    Double,
    Triple,
    HomeRun,
    GroundOut,
    FlyOut,
    LineOut,
    StrikeoutSwinging,
    StrikeoutCalled,
    Walk,
    Error,
    DoublePlay,
    TriplePlay,
    FieldersChoice,
    SacrificeFly,
}

impl PlayOutcome {
    pub const ALL: [PlayOutcome; 15] = [
        PlayOutcome::Single,
        PlayOutcome::Double,
        PlayOutcome::Triple,
        PlayOutcome::HomeRun,
        PlayOutcome::GroundOut,
        PlayOutcome::FlyOut,
        PlayOutcome::LineOut,
        PlayOutcome::StrikeoutSwinging,
        PlayOutcome::StrikeoutCalled,
        PlayOutcome::Walk,
        PlayOutcome::Error,
        PlayOutcome::DoublePlay,
        PlayOutcome::TriplePlay,
        PlayOutcome::FieldersChoice,
        PlayOutcome::SacrificeFly,
    ];

    pub fn is_hit(self) -> bool {
        matches!(
            self,
            PlayOutcome::Single | PlayOutcome::Double | PlayOutcome::Triple | PlayOutcome::HomeRun
        )
    }

    /// Outs recorded by the play itself.
    pub fn outs(self) -> u8 {
        match self {
            PlayOutcome::Single
            | PlayOutcome::Double
            | PlayOutcome::Triple
            | PlayOutcome::HomeRun
            | PlayOutcome::Walk
            | PlayOutcome::Error => 0,
            PlayOutcome::GroundOut
            | PlayOutcome::FlyOut
            | PlayOutcome::LineOut
            | PlayOutcome::StrikeoutSwinging
            | PlayOutcome::StrikeoutCalled
            | PlayOutcome::FieldersChoice
            | PlayOutcome::SacrificeFly => 1,
            PlayOutcome::DoublePlay => 2,
            PlayOutcome::TriplePlay => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayOutcome::Single => "single",
            PlayOutcome::Double => "double",
            PlayOutcome::Triple => "triple",
            PlayOutcome::HomeRun => "home run",
            PlayOutcome::GroundOut => "ground out",
            PlayOutcome::FlyOut => "fly out",
            PlayOutcome::LineOut => "line out",
            PlayOutcome::StrikeoutSwinging => "strikeout swinging",
            PlayOutcome::StrikeoutCalled => "strikeout called",
            PlayOutcome::Walk => "walk",
            PlayOutcome::Error => "error",
            PlayOutcome::DoublePlay => "double play",
            PlayOutcome::TriplePlay => "triple play",
            PlayOutcome::FieldersChoice => "fielder's choice",
            PlayOutcome::SacrificeFly => "sacrifice fly",
        }
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a batted ball went, as named in the play-by-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLocation {
    Left,
    Center,
    Right,
    LeftCenter,
    RightCenter,
    First,
    Second,
    Third,
    Short,
    Pitcher,
}

impl FieldLocation {
    /// Draw-index order: outfield 0..=4, infield 5..=9.
    pub const ALL: [FieldLocation; 10] = [
        FieldLocation::Left,
        FieldLocation::Center,
        FieldLocation::Right,
        FieldLocation::LeftCenter,
        FieldLocation::RightCenter,
        FieldLocation::First,
        FieldLocation::Second,
        FieldLocation::Third,
        FieldLocation::Short,
        FieldLocation::Pitcher,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldLocation::Left => "LEFT",
            FieldLocation::Center => "CENTER",
            FieldLocation::Right => "RIGHT",
            FieldLocation::LeftCenter => "L CENTR",
            FieldLocation::RightCenter => "R CENTR",
            FieldLocation::First => "FIRST",
            FieldLocation::Second => "SECOND",
            FieldLocation::Third => "THIRD",
            FieldLocation::Short => "SHORT",
            FieldLocation::Pitcher => "PITCHER",
        }
    }

    pub fn is_infield(self) -> bool {
        matches!(
            self,
            FieldLocation::First
                | FieldLocation::Second
                | FieldLocation::Third
                | FieldLocation::Short
                | FieldLocation::Pitcher
        )
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
