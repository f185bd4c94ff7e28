use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "B")]
    Both,
}

impl Handedness {
    pub fn code(self) -> char {
        match self {
            Handedness::Right => 'R',
            Handedness::Left => 'L',
            Handedness::Both => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    Catcher,
    Pitcher,
}

impl Position {
    /// Column label used in lineup tables.
    pub fn label(self) -> &'static str {
        match self {
            Position::FirstBase => "FIRST",
            Position::SecondBase => "SECOND",
            Position::ThirdBase => "THIRD",
            Position::Shortstop => "SHORT",
            Position::LeftField => "LEFT",
            Position::CenterField => "CENTER",
            Position::RightField => "RIGHT",
            Position::Catcher => "CATCHER",
            Position::Pitcher => "PITCHER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub year: u16,
    pub team: String,
    /// Batting average in thousandths (393 = .393)
    pub batting_avg: u16,
    pub hand: Handedness,
    pub position: Position,
    pub jersey: u8,
}

impl Player {
    /// Rating fed to the outcome classifier.
    pub fn rating(&self) -> i32 {
        i32::from(self.batting_avg)
    }

    /// Values XOR-mixed into the generator when this player is picked.
    pub fn seed_contribution(&self, roster_index: usize) -> (u32, u32) {
        let a = u32::from(self.batting_avg)
            .wrapping_mul(31)
            .wrapping_add(roster_index as u32);
        let b = u32::from(self.year)
            .wrapping_mul(37)
            .wrapping_add(u32::from(self.hand.code()));
        (a, b)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} .{:03} {}",
            self.name,
            self.year,
            self.team,
            self.batting_avg,
            self.hand.code()
        )
    }
}

#[cfg(test)]
pub(crate) fn test_player(name: &str, batting_avg: u16) -> Player {
    Player {
        name: name.to_string(),
        year: 1961,
        team: "TST".to_string(),
        batting_avg,
        hand: Handedness::Right,
        position: Position::CenterField,
        jersey: 1,
    }
}
