//! Base occupancy state machine
//!
//! `BaseState` is a plain copyable snapshot. Every transition builds a fresh
//! value instead of shuffling flags in place, so a runner can never be moved
//! twice or land on a slot another runner is still leaving.

use serde::{Deserialize, Serialize};

pub const FIRST: usize = 0;
pub const SECOND: usize = 1;
pub const THIRD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BaseState {
    occupied: [bool; 3],
}

impl BaseState {
    pub const EMPTY: Self = Self { occupied: [false; 3] };
    pub const LOADED: Self = Self { occupied: [true; 3] };

    pub fn new(first: bool, second: bool, third: bool) -> Self {
        Self { occupied: [first, second, third] }
    }

    pub fn first(&self) -> bool {
        self.occupied[FIRST]
    }

    pub fn second(&self) -> bool {
        self.occupied[SECOND]
    }

    pub fn third(&self) -> bool {
        self.occupied[THIRD]
    }

    pub fn is_occupied(&self, base: usize) -> bool {
        self.occupied.get(base).copied().unwrap_or(false)
    }

    pub fn occupy(&mut self, base: usize) {
        if let Some(slot) = self.occupied.get_mut(base) {
            *slot = true;
        }
    }

    pub fn vacate(&mut self, base: usize) {
        if let Some(slot) = self.occupied.get_mut(base) {
            *slot = false;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    pub fn occupied_count(&self) -> u8 {
        self.occupied.iter().filter(|o| **o).count() as u8
    }

    pub fn is_empty(&self) -> bool {
        !self.occupied.iter().any(|o| *o)
    }

    pub fn is_loaded(&self) -> bool {
        self.occupied.iter().all(|o| *o)
    }

    /// Runners that would cross the plate if everyone moved up `bases`.
    ///
    /// Pure count; pair it with [`advance`](Self::advance) using the same
    /// argument to apply the move.
    pub fn runs_scored(&self, bases: usize) -> u8 {
        (FIRST..=THIRD)
            .rev()
            .filter(|&i| self.occupied[i] && i + bases >= 3)
            .count() as u8
    }

    /// Occupancy after every runner moves up `bases`. Runners pushed past
    /// third leave the bases; the caller counts them via `runs_scored`.
    pub fn advance(&self, bases: usize) -> Self {
        let mut next = Self::EMPTY;
        for i in (FIRST..=THIRD).rev() {
            if self.occupied[i] && i + bases < 3 {
                next.occupied[i + bases] = true;
            }
        }
        next
    }

    /// Short description used in narration, `None` when the bases are empty.
    pub fn situation(&self) -> Option<&'static str> {
        match (self.first(), self.second(), self.third()) {
            (true, true, true) => Some("BASES LOADED"),
            (true, true, false) => Some("RUNNERS ON 1ST AND 2ND"),
            (false, true, true) => Some("RUNNERS ON 2ND AND 3RD"),
            (true, false, true) => Some("RUNNERS ON 1ST AND 3RD"),
            (false, false, true) => Some("RUNNER ON 3RD"),
            (false, true, false) => Some("RUNNER ON 2ND"),
            (true, false, false) => Some("RUNNER ON 1ST"),
            (false, false, false) => None,
        }
    }

    /// All eight occupancy configurations.
    pub fn all() -> impl Iterator<Item = BaseState> {
        (0u8..8).map(|bits| Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }
}
