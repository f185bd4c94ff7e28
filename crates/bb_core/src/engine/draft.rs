//! Home lineup draft
//!
//! The home side is filled by drawing from whoever the visitors left on the
//! roster, using the game's own generator so the draft is part of the
//! reproducible stream.

use super::rng::DualLcg;
use crate::data::Roster;
use crate::error::{GameError, Result};
use crate::models::{Lineup, LINEUP_SIZE};
use log::debug;

pub fn draft_home_lineup<'r>(
    roster: &'r Roster,
    visitors: &Lineup<'r>,
    rng: &mut DualLcg,
) -> Result<Lineup<'r>> {
    let mut available: Vec<_> =
        roster.players().iter().filter(|p| !visitors.contains(p)).collect();

    if available.len() < LINEUP_SIZE {
        return Err(GameError::InsufficientRoster {
            available: available.len(),
            needed: LINEUP_SIZE,
        });
    }

    let mut picks = Vec::with_capacity(LINEUP_SIZE);
    for _ in 0..LINEUP_SIZE {
        let slot = rng.next_int(0, available.len() as i32 - 1)? as usize;
        let player = available.remove(slot);
        debug!("home draft pick {}: {}", picks.len() + 1, player.name);
        picks.push(player);
    }

    Lineup::new(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::test_player;
    use crate::models::validate_pair;

    fn visitors(roster: &Roster) -> Lineup<'_> {
        Lineup::new(roster.players()[..LINEUP_SIZE].iter().collect()).unwrap()
    }

    #[test]
    fn test_draft_is_disjoint_and_full() {
        let roster = Roster::embedded().unwrap();
        let away = visitors(&roster);
        let mut rng = DualLcg::seed("4/18/23", "1:30");
        let home = draft_home_lineup(&roster, &away, &mut rng).unwrap();

        assert_eq!(home.len(), LINEUP_SIZE);
        assert!(validate_pair(&away, &home).is_ok());
    }

    #[test]
    fn test_draft_consumes_nine_draws() {
        let roster = Roster::embedded().unwrap();
        let away = visitors(&roster);
        let mut rng = DualLcg::seed("d", "t");
        let mut shadow = rng.clone();
        draft_home_lineup(&roster, &away, &mut rng).unwrap();

        let mut remaining = roster.len() - LINEUP_SIZE;
        for _ in 0..LINEUP_SIZE {
            shadow.next_int(0, remaining as i32 - 1).unwrap();
            remaining -= 1;
        }
        assert_eq!(rng, shadow);
    }

    #[test]
    fn test_draft_is_reproducible() {
        let roster = Roster::embedded().unwrap();
        let away = visitors(&roster);
        let names = |seed: &str| {
            let mut rng = DualLcg::seed(seed, "12:00");
            let home = draft_home_lineup(&roster, &away, &mut rng).unwrap();
            home.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names("7/4/39"), names("7/4/39"));
    }

    #[test]
    fn test_exactly_nine_left_takes_them_all() {
        let players: Vec<_> = (0..18).map(|i| test_player(&format!("P{i}"), 300)).collect();
        let roster = Roster::new(players);
        let away = visitors(&roster);
        let mut rng = DualLcg::seed("a", "b");
        let home = draft_home_lineup(&roster, &away, &mut rng).unwrap();

        let mut names: Vec<_> = home.iter().map(|p| p.name.clone()).collect();
        names.sort();
        let mut expected: Vec<_> = (9..18).map(|i| format!("P{i}")).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_small_roster_rejected() {
        let players: Vec<_> = (0..12).map(|i| test_player(&format!("P{i}"), 300)).collect();
        let roster = Roster::new(players);
        let away = visitors(&roster);
        let mut rng = DualLcg::seed("a", "b");
        let before = rng.clone();

        let err = draft_home_lineup(&roster, &away, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InsufficientRoster { available: 3, needed: 9 }));
        assert_eq!(rng, before);
    }
}
