//! Teletype-style presentation
//!
//! Everything written to stdout goes through here so the layout stays in one
//! place. Narration is driven by `GameEvent`s as they happen.

use bb_core::models::{GameEvent, GameListener, GameResult, Lineup, Player, TeamSide};
use bb_core::Roster;
use std::io::{self, Write};

pub const COLUMN_HEADING: &str = "NAME       TEAM AVG BATS";

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========================================")?;
    writeln!(out, "  BBC BASEBALL SIMULATION (1961)")?;
    writeln!(out, "  Burgeson Baseball Computer")?;
    writeln!(out, "========================================")?;
    writeln!(out)
}

/// Row echoed under the prompt after a visiting pick is accepted.
pub fn pick_row(player: &Player) -> String {
    format!(
        "        {:<7} {:>4} {:<18} .{:03}  {}",
        player.position.label(),
        player.year,
        player.team,
        player.batting_avg,
        player.hand.code()
    )
}

pub fn lineup_row(player: &Player) -> String {
    format!("{:<10} {}", player.name, pick_row(player).trim_start())
}

pub fn print_home_lineup(out: &mut impl Write, lineup: &Lineup<'_>) -> io::Result<()> {
    writeln!(out, "\n\nHOME TEAM\n")?;
    writeln!(out, "{COLUMN_HEADING}\n")?;
    for player in lineup.iter() {
        writeln!(out, "{}", lineup_row(player))?;
    }
    writeln!(out, "\n")
}

/// `--list-players` output: the whole roster with lookup keys.
pub fn print_roster(out: &mut impl Write, roster: &Roster) -> io::Result<()> {
    writeln!(out, "{COLUMN_HEADING}  KEY\n")?;
    for player in roster.players() {
        writeln!(out, "{}  {}-{}", lineup_row(player), player.jersey, player.team)?;
    }
    Ok(())
}

pub fn print_totals(out: &mut impl Write, result: &GameResult) -> io::Result<()> {
    writeln!(out, "\n\n")?;
    writeln!(out, "GAME COMPLETED. TOTALS\n")?;
    for side in [TeamSide::Visitors, TeamSide::Home] {
        let t = result.totals(side);
        writeln!(out, "{:<16}{:02}  {:02}  {:02}", side.label(), t.runs, t.hits, t.errors)?;
    }
    writeln!(out, "\n")
}

/// Per-inning runs under the totals, one column per inning.
pub fn print_line_score(out: &mut impl Write, result: &GameResult) -> io::Result<()> {
    let mut header = String::from("INNING  ");
    let mut visitors = String::from("VIS     ");
    let mut home = String::from("HOM     ");
    for (idx, line) in result.line_score.iter().enumerate() {
        header.push_str(&format!("|{n: ^3}", n = idx + 1));
        visitors.push_str(&format!("|{n: ^3}", n = line.visitors));
        home.push_str(&format!("|{n: ^3}", n = line.home));
    }
    for (row, side) in [(&mut visitors, TeamSide::Visitors), (&mut home, TeamSide::Home)] {
        let t = result.totals(side);
        row.push_str(&format!("|| {:>2} {:>2} {:>2}", t.runs, t.hits, t.errors));
    }
    header.push_str("||  R  H  E");
    writeln!(out, "{header}")?;
    writeln!(out, "{visitors}")?;
    writeln!(out, "{home}")?;
    writeln!(out)
}

/// Play-by-play printer.
///
/// `GameListener` cannot fail, so the first write error is parked and the
/// rest of the game is muted; `finish` hands it back.
pub struct ConsoleNarrator<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::HalfInningStarted { .. } | GameEvent::GameOver(_) => Ok(()),
            GameEvent::Steal { steal, .. } => writeln!(self.out, "{steal}"),
            GameEvent::Play(play) => {
                writeln!(self.out, "{play}")?;
                if play.show_bases {
                    if let Some(situation) = play.bases_after.situation() {
                        writeln!(self.out, " {situation}")?;
                    }
                }
                Ok(())
            }
            GameEvent::HalfInningEnded { totals, .. } => writeln!(
                self.out,
                "\n{} RUNS  {} HITS  {} ERRORS",
                totals.runs, totals.hits, totals.errors
            ),
            GameEvent::InningEnded { inning, visitors, home } => {
                writeln!(self.out, "\nEND OF INNING {inning}    SCORE {visitors} {home}\n")
            }
        }
    }
}

impl<W: Write> GameListener for ConsoleNarrator<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.render(event) {
            log::warn!("narration output failed: {err}");
            self.error = Some(err);
        }
    }
}
