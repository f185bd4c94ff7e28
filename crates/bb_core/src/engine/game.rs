//! Inning loop
//!
//! ```text
//!   TopHalf ──3 outs──▶ BottomHalf ──3 outs──┬──▶ TopHalf (inning + 1)
//!                                            └──▶ GameOver  (inning ≥ regulation && not tied)
//! ```
//!
//! A tied game never ends; extra innings repeat the same half-inning
//! mechanics with no upper bound.

use super::classifier::{classify, AtBatContext};
use super::executor::execute_play;
use super::rng::DualLcg;
use super::state::GameState;
use super::steal::attempt_steal;
use crate::config::SimTuning;
use crate::error::Result;
use crate::models::{
    validate_pair, GameEvent, GameListener, GameResult, Half, Lineup, Player, TeamSide,
};
use log::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    TopHalf,
    BottomHalf,
    GameOver,
}

impl GamePhase {
    /// Phase after the current half completes in `inning`.
    pub fn next(self, inning: u32, tied: bool, regulation: u32) -> GamePhase {
        match self {
            GamePhase::TopHalf => GamePhase::BottomHalf,
            GamePhase::BottomHalf if inning >= regulation && !tied => GamePhase::GameOver,
            GamePhase::BottomHalf => GamePhase::TopHalf,
            GamePhase::GameOver => GamePhase::GameOver,
        }
    }

    fn half(self) -> Option<Half> {
        match self {
            GamePhase::TopHalf => Some(Half::Top),
            GamePhase::BottomHalf => Some(Half::Bottom),
            GamePhase::GameOver => None,
        }
    }
}

/// One game between two fixed lineups, driven by a single generator.
pub struct Simulation<'r> {
    visitors: Lineup<'r>,
    home: Lineup<'r>,
    rng: DualLcg,
    tuning: SimTuning,
    state: GameState,
    phase: GamePhase,
}

impl<'r> Simulation<'r> {
    pub fn new(visitors: Lineup<'r>, home: Lineup<'r>, rng: DualLcg) -> Result<Self> {
        validate_pair(&visitors, &home)?;
        Ok(Self {
            visitors,
            home,
            rng,
            tuning: SimTuning::default(),
            state: GameState::new(),
            phase: GamePhase::TopHalf,
        })
    }

    pub fn with_tuning(mut self, tuning: SimTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rng(&self) -> &DualLcg {
        &self.rng
    }

    pub fn lineup(&self, side: TeamSide) -> &Lineup<'r> {
        match side {
            TeamSide::Visitors => &self.visitors,
            TeamSide::Home => &self.home,
        }
    }

    /// Run the game to completion, reporting every event to `listener`.
    ///
    /// Calling this again after the game is over returns the same result
    /// without drawing anything.
    pub fn play_game(&mut self, listener: &mut dyn GameListener) -> Result<GameResult> {
        let regulation = self.tuning.regulation_innings;

        while let Some(half) = self.phase.half() {
            self.play_half(half, listener)?;

            let next = self.phase.next(self.state.inning, self.state.is_tied(), regulation);
            if half == Half::Bottom {
                listener.on_event(&GameEvent::InningEnded {
                    inning: self.state.inning,
                    visitors: self.state.score(TeamSide::Visitors),
                    home: self.state.score(TeamSide::Home),
                });
                if next == GamePhase::TopHalf {
                    self.state.inning += 1;
                    if self.state.inning > regulation {
                        debug!("extra innings: inning {}", self.state.inning);
                    }
                }
            }
            self.phase = next;
        }

        let result = self.state.result();
        info!(
            "game over after {} innings: visitors {} home {}",
            result.innings, result.visitors.runs, result.home.runs
        );
        listener.on_event(&GameEvent::GameOver(result.clone()));
        Ok(result)
    }

    fn play_half(&mut self, half: Half, listener: &mut dyn GameListener) -> Result<()> {
        self.state.start_half(half);
        debug!("inning {} {:?} begins", self.state.inning, half);
        listener.on_event(&GameEvent::HalfInningStarted { inning: self.state.inning, half });

        let side = half.batting_side();
        while !self.state.is_half_over() {
            let batter = self.lineup(side).batter(self.state.current_batter(side));
            self.plate_appearance(batter, listener)?;
            self.state.advance_batter(side);
        }

        debug!(
            "inning {} {:?} ends: {} R {} H {} E",
            self.state.inning,
            half,
            self.state.half_totals.runs,
            self.state.half_totals.hits,
            self.state.half_totals.errors
        );
        listener.on_event(&GameEvent::HalfInningEnded {
            inning: self.state.inning,
            half,
            totals: self.state.half_totals,
        });
        Ok(())
    }

    /// Steal check, then the at-bat unless the steal ended the half.
    fn plate_appearance(&mut self, batter: &Player, listener: &mut dyn GameListener) -> Result<()> {
        if let Some(steal) =
            attempt_steal(&mut self.state, &mut self.rng, &self.tuning.steal_odds)?
        {
            listener.on_event(&GameEvent::Steal {
                steal,
                bases_after: self.state.bases,
                outs_after: self.state.outs,
            });
            if self.state.is_half_over() {
                return Ok(());
            }
        }

        let ctx = AtBatContext::from(&self.state);
        let outcome = classify(batter.rating(), &ctx, &mut self.rng, &self.tuning)?;
        let event = execute_play(&mut self.state, outcome, batter, &mut self.rng)?;
        trace!("{} -> {:?} ({} runs)", batter.name, outcome, event.runs);
        listener.on_event(&GameEvent::Play(event));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::test_player;
    use crate::models::{NullListener, Player, LINEUP_SIZE};

    fn pool(avg: u16) -> Vec<Player> {
        (0..18).map(|i| test_player(&format!("B{i}"), avg)).collect()
    }

    fn lineups(players: &[Player]) -> (Lineup<'_>, Lineup<'_>) {
        (
            Lineup::new(players[..9].iter().collect()).unwrap(),
            Lineup::new(players[9..].iter().collect()).unwrap(),
        )
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(GamePhase::TopHalf.next(9, true, 9), GamePhase::BottomHalf);
        assert_eq!(GamePhase::BottomHalf.next(3, false, 9), GamePhase::TopHalf);
        assert_eq!(GamePhase::BottomHalf.next(9, false, 9), GamePhase::GameOver);
        assert_eq!(GamePhase::BottomHalf.next(9, true, 9), GamePhase::TopHalf);
        assert_eq!(GamePhase::BottomHalf.next(14, true, 9), GamePhase::TopHalf);
        assert_eq!(GamePhase::BottomHalf.next(14, false, 9), GamePhase::GameOver);
    }

    #[test]
    fn test_shared_player_rejected() {
        let players = pool(300);
        let visitors = Lineup::new(players[..9].iter().collect()).unwrap();
        let home = Lineup::new(players[5..14].iter().collect()).unwrap();
        assert!(Simulation::new(visitors, home, DualLcg::seed("a", "b")).is_err());
    }

    #[test]
    fn test_game_reaches_decision() {
        let players = pool(280);
        let (visitors, home) = lineups(&players);
        let mut sim = Simulation::new(visitors, home, DualLcg::seed("4/10/61", "1:15")).unwrap();

        let result = sim.play_game(&mut NullListener).unwrap();
        assert!(result.innings >= 9);
        assert_ne!(result.visitors.runs, result.home.runs);
        assert_eq!(result.line_score.len() as u32, result.innings);
        assert_eq!(sim.phase(), GamePhase::GameOver);

        let line_visitors: u32 = result.line_score.iter().map(|l| l.visitors).sum();
        let line_home: u32 = result.line_score.iter().map(|l| l.home).sum();
        assert_eq!(line_visitors, result.visitors.runs);
        assert_eq!(line_home, result.home.runs);
    }

    #[test]
    fn test_replay_is_identical() {
        let players = pool(300);
        let run = || {
            let (visitors, home) = lineups(&players);
            let mut sim =
                Simulation::new(visitors, home, DualLcg::seed("9/28/41", "2:30")).unwrap();
            let mut events: Vec<GameEvent> = Vec::new();
            let result = sim.play_game(&mut events).unwrap();
            (events, result)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_second_call_is_idempotent() {
        let players = pool(300);
        let (visitors, home) = lineups(&players);
        let mut sim = Simulation::new(visitors, home, DualLcg::seed("x", "y")).unwrap();
        let first = sim.play_game(&mut NullListener).unwrap();
        let rng_after = sim.rng().clone();
        let second = sim.play_game(&mut NullListener).unwrap();
        assert_eq!(first, second);
        assert_eq!(sim.rng(), &rng_after);
    }

    #[test]
    fn test_every_half_ends_on_three_outs() {
        let players = pool(320);
        let (visitors, home) = lineups(&players);
        let mut sim = Simulation::new(visitors, home, DualLcg::seed("5/1/61", "8:00")).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        sim.play_game(&mut events).unwrap();

        let mut last_outs = 0;
        for event in &events {
            match event {
                GameEvent::HalfInningStarted { .. } => last_outs = 0,
                GameEvent::Play(play) => {
                    assert!(play.outs_after >= last_outs);
                    last_outs = play.outs_after;
                }
                GameEvent::Steal { outs_after, .. } => last_outs = *outs_after,
                GameEvent::HalfInningEnded { .. } => assert!(last_outs >= 3),
                _ => {}
            }
        }
    }

    #[test]
    fn test_lineups_bat_in_order() {
        let players = pool(250);
        let (visitors, home) = lineups(&players);
        let mut sim = Simulation::new(visitors, home, DualLcg::seed("6/6/66", "6:06")).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        sim.play_game(&mut events).unwrap();

        let mut half = Half::Top;
        let mut next = [0usize; 2];
        for event in &events {
            match event {
                GameEvent::HalfInningStarted { half: h, .. } => half = *h,
                GameEvent::Play(play) => {
                    let side = half.batting_side().index();
                    let offset = if side == 0 { 0 } else { LINEUP_SIZE };
                    let expected = format!("B{}", offset + next[side]);
                    assert_eq!(play.batter, expected);
                    next[side] = (next[side] + 1) % LINEUP_SIZE;
                }
                // the turn is used up without an at-bat
                GameEvent::Steal { outs_after, .. } if *outs_after >= 3 => {
                    let side = half.batting_side().index();
                    next[side] = (next[side] + 1) % LINEUP_SIZE;
                }
                _ => {}
            }
        }
    }
}
