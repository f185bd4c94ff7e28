use bb_core::models::{Half, StealEvent};
use bb_core::{
    draft_home_lineup, DualLcg, GameEvent, GameListener, Lineup, LineupBuilder, Roster,
    SimTuning, Simulation, TeamSide,
};

const VISITORS: [&str; 9] = [
    "RUTH", "GEHRIG", "WILLIAMS", "DIMAGGIO", "21-PIT", "MAYS", "HORNSBY", "BERRA", "MANTLE",
];

fn visiting_lineup<'r>(roster: &'r Roster, rng: &mut DualLcg) -> Lineup<'r> {
    let mut builder = LineupBuilder::new();
    for query in VISITORS {
        let (idx, player) = roster
            .find(query)
            .unwrap_or_else(|| panic!("{query} missing from roster"));
        builder.add(player).unwrap();
        let (a, b) = player.seed_contribution(idx);
        rng.stir(a, b);
    }
    builder.build().unwrap()
}

fn play(date: &str, time: &str) -> (Vec<GameEvent>, bb_core::GameResult) {
    let roster = Roster::embedded().unwrap();
    let mut rng = DualLcg::seed(date, time);
    let visitors = visiting_lineup(&roster, &mut rng);
    let home = draft_home_lineup(&roster, &visitors, &mut rng).unwrap();

    let mut events = Vec::new();
    let mut sim = Simulation::new(visitors, home, rng).unwrap();
    let result = sim.play_game(&mut events).unwrap();
    (events, result)
}

#[test]
fn same_seed_replays_identically() {
    let first = play("10/1/61", "1:05");
    let second = play("10/1/61", "1:05");
    assert_eq!(first, second);
}

#[test]
fn different_seeds_diverge() {
    let (a, _) = play("10/1/61", "1:05");
    let (b, _) = play("10/2/61", "1:05");
    assert_ne!(a, b);
}

#[test]
fn games_terminate_with_a_winner() {
    for day in 1..=20 {
        let (_, result) = play(&format!("5/{day}/61"), "7:30");
        assert!(result.innings >= 9);
        assert!(result.winner().is_some());
        assert_eq!(result.line_score.len() as u32, result.innings);
    }
}

#[test]
fn event_stream_is_well_formed() {
    let (events, result) = play("7/4/39", "2:00");

    assert!(matches!(
        events.first(),
        Some(GameEvent::HalfInningStarted { inning: 1, half: Half::Top })
    ));
    assert!(matches!(events.last(), Some(GameEvent::GameOver(r)) if *r == result));

    let starts = events
        .iter()
        .filter(|e| matches!(e, GameEvent::HalfInningStarted { .. }))
        .count();
    let ends = events
        .iter()
        .filter(|e| matches!(e, GameEvent::HalfInningEnded { .. }))
        .count();
    let innings = events
        .iter()
        .filter(|e| matches!(e, GameEvent::InningEnded { .. }))
        .count();
    assert_eq!(starts, ends);
    assert_eq!(starts, 2 * result.innings as usize);
    assert_eq!(innings as u32, result.innings);
}

#[test]
fn half_totals_add_up_to_final_totals() {
    let (events, result) = play("8/8/48", "8:48");
    let mut runs = [0u32; 2];
    let mut hits = [0u32; 2];
    let mut errors = [0u32; 2];
    for event in &events {
        if let GameEvent::HalfInningEnded { half, totals, .. } = event {
            let side = half.batting_side().index();
            runs[side] += totals.runs;
            hits[side] += totals.hits;
            errors[side] += totals.errors;
        }
    }
    for side in [TeamSide::Visitors, TeamSide::Home] {
        let totals = result.totals(side);
        assert_eq!(runs[side.index()], totals.runs);
        assert_eq!(hits[side.index()], totals.hits);
        assert_eq!(errors[side.index()], totals.errors);
    }
}

#[test]
fn play_runs_match_score() {
    let (events, result) = play("9/9/59", "9:09");
    let mut half = Half::Top;
    let mut runs = [0u32; 2];
    for event in &events {
        match event {
            GameEvent::HalfInningStarted { half: h, .. } => half = *h,
            GameEvent::Play(play) => runs[half.batting_side().index()] += u32::from(play.runs),
            _ => {}
        }
    }
    assert_eq!(runs[0], result.visitors.runs);
    assert_eq!(runs[1], result.home.runs);
}

/// Listener that records only scoring plays, to check the trait is usable
/// outside the crate.
#[derive(Default)]
struct ScoringPlays(Vec<u8>);

impl GameListener for ScoringPlays {
    fn on_event(&mut self, event: &GameEvent) {
        if let GameEvent::Play(play) = event {
            if play.runs > 0 {
                self.0.push(play.runs);
            }
        }
    }
}

#[test]
fn custom_listener_sees_every_run() {
    let roster = Roster::embedded().unwrap();
    let mut rng = DualLcg::seed("6/1/50", "3:15");
    let visitors = visiting_lineup(&roster, &mut rng);
    let home = draft_home_lineup(&roster, &visitors, &mut rng).unwrap();
    let mut sim = Simulation::new(visitors, home, rng).unwrap();

    let mut listener = ScoringPlays::default();
    let result = sim.play_game(&mut listener).unwrap();
    let total: u32 = listener.0.iter().map(|&r| u32::from(r)).sum();
    assert_eq!(total, result.visitors.runs + result.home.runs);
}

#[test]
fn hair_trigger_steals_still_finish() {
    let roster = Roster::embedded().unwrap();
    let mut rng = DualLcg::seed("1/1/60", "0:01");
    let visitors = visiting_lineup(&roster, &mut rng);
    let home = draft_home_lineup(&roster, &visitors, &mut rng).unwrap();

    let mut tuning = SimTuning::default();
    tuning.steal_odds.steal_second = 1;
    tuning.steal_odds.double_steal = 1;
    tuning.steal_odds.caught_stealing = 1;
    tuning.validate().unwrap();

    let mut events = Vec::new();
    let mut sim = Simulation::new(visitors, home, rng).unwrap().with_tuning(tuning);
    let result = sim.play_game(&mut events).unwrap();

    assert!(result.winner().is_some());
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::Steal { steal: StealEvent::StoleSecond, .. })));
}

#[test]
fn short_game_honours_regulation() {
    let roster = Roster::embedded().unwrap();
    let mut rng = DualLcg::seed("3/3/33", "3:33");
    let visitors = visiting_lineup(&roster, &mut rng);
    let home = draft_home_lineup(&roster, &visitors, &mut rng).unwrap();

    let tuning = SimTuning { regulation_innings: 3, ..SimTuning::default() };
    let mut sim = Simulation::new(visitors, home, rng).unwrap().with_tuning(tuning);
    let result = sim.play_game(&mut bb_core::NullListener).unwrap();
    assert!(result.innings >= 3);
    assert!(result.winner().is_some());
    if result.innings > 3 {
        assert!(result.is_extra_innings(3));
    }
}
