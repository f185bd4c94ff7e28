//! Dual linear congruential generator
//!
//! Two independent 31-bit LCGs combined by XOR. The whole simulation draws
//! from a single instance in a fixed order, so identical seed text and
//! identical lineups replay the same game bit for bit.
//!
//! The generator is an explicit value owned by the caller. Nothing here is
//! process-global, so tests can run any number of independent engines.

use crate::error::{GameError, Result};

/// Initial accumulator for the date-text generator.
pub const SEED1_INIT: u32 = 0x1234_5678;
/// Initial accumulator for the time-text generator.
pub const SEED2_INIT: u32 = 0x8765_4321;

const LCG1_MUL: u32 = 1_103_515_245;
const LCG1_INC: u32 = 12_345;
const LCG2_MUL: u32 = 69_069;
const LCG2_INC: u32 = 1;
const MASK_31: u32 = 0x7fff_ffff;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualLcg {
    seed1: u32,
    seed2: u32,
}

impl DualLcg {
    /// Seed from free-form date and time text.
    ///
    /// Each byte is folded in as `seed = seed * k + byte` with wrapping 32-bit
    /// arithmetic (k = 31 for the date, 37 for the time). Bytes are unsigned.
    pub fn seed(date_text: &str, time_text: &str) -> Self {
        let seed1 = date_text
            .bytes()
            .fold(SEED1_INIT, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
        let seed2 = time_text
            .bytes()
            .fold(SEED2_INIT, |acc, b| acc.wrapping_mul(37).wrapping_add(u32::from(b)));
        Self { seed1, seed2 }
    }

    /// Raw accumulators, mainly for diagnostics.
    pub fn state(&self) -> (u32, u32) {
        (self.seed1, self.seed2)
    }

    /// Uniform-ish integer in `min..=max`.
    ///
    /// Both accumulators advance on every successful call. A reversed range is
    /// rejected before any state changes.
    pub fn next_int(&mut self, min: i32, max: i32) -> Result<i32> {
        if max < min {
            return Err(GameError::InvalidRange { min, max });
        }

        self.seed1 = self.seed1.wrapping_mul(LCG1_MUL).wrapping_add(LCG1_INC) & MASK_31;
        self.seed2 = self.seed2.wrapping_mul(LCG2_MUL).wrapping_add(LCG2_INC) & MASK_31;

        let combined = u64::from(self.seed1 ^ self.seed2);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        Ok((i64::from(min) + (combined % span) as i64) as i32)
    }

    /// Mix external entropy into both accumulators.
    ///
    /// Used while the visiting lineup is entered: every pick perturbs the
    /// stream that later drafts the home lineup and plays the game.
    pub fn stir(&mut self, a: u32, b: u32) {
        self.seed1 ^= a;
        self.seed2 ^= b;
    }
}
