//! bb_cli
//!
//! Console front end: seed prompts, visiting lineup entry, home draft, and a
//! play-by-play game on stdout. Logs go to stderr (`RUST_LOG=debug`).

mod console;
mod selection;

use anyhow::{Context, Result};
use bb_core::{draft_home_lineup, tuning_from_env, DualLcg, Roster, SimTuning, Simulation};
use clap::Parser;
use console::ConsoleNarrator;
use selection::Prompter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bb_cli", version)]
#[command(about = "Simulate a 1961-style teletype baseball game", long_about = None)]
struct Cli {
    /// Date text for the seed (prompted when absent)
    #[arg(long, conflicts_with = "now")]
    date: Option<String>,

    /// Time text for the seed (prompted when absent)
    #[arg(long, conflicts_with = "now")]
    time: Option<String>,

    /// Seed from the local clock instead of prompting
    #[arg(long, default_value = "false")]
    now: bool,

    /// Visiting batter by name or jersey-team key, in batting order (repeatable)
    #[arg(short, long)]
    player: Vec<String>,

    /// Tuning JSON file (overrides BB_TUNING_PATH)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the final result as JSON after the totals
    #[arg(long, default_value = "false")]
    json: bool,

    /// Print the roster and exit
    #[arg(long, default_value = "false")]
    list_players: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("args: {cli:?}");

    let roster = Roster::embedded().context("Embedded roster is corrupted")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_players {
        console::print_roster(&mut out, &roster)?;
        return Ok(());
    }

    let tuning = load_tuning(cli.tuning.as_deref())?;

    console::print_header(&mut out)?;
    let mut prompter = Prompter::new(io::stdin().lock(), out);

    let (date, time) = seed_text(&cli, &mut prompter)?;
    log::info!("seed text: date='{date}' time='{time}'");
    let mut rng = DualLcg::seed(&date, &time);

    let visitors = prompter.visiting_lineup(&roster, &cli.player, &mut rng)?;
    let home =
        draft_home_lineup(&roster, &visitors, &mut rng).context("Failed to draft home lineup")?;

    let mut out = prompter.into_output();
    console::print_home_lineup(&mut out, &home)?;

    let mut sim = Simulation::new(visitors, home, rng)?.with_tuning(tuning);
    let mut narrator = ConsoleNarrator::new(&mut out);
    let result = sim.play_game(&mut narrator)?;
    narrator.finish().context("Failed to write play-by-play")?;

    console::print_totals(&mut out, &result)?;
    console::print_line_score(&mut out, &result)?;
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    }
    Ok(())
}

fn seed_text<R: io::BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> io::Result<(String, String)> {
    if cli.now {
        let now = chrono::Local::now();
        let date = now.format("%m/%d/%y").to_string();
        let time = now.format("%H:%M").to_string();
        return prompter.seed_text(Some(&date), Some(&time));
    }
    prompter.seed_text(cli.date.as_deref(), cli.time.as_deref())
}

/// `--tuning` wins; otherwise `BB_TUNING_PATH`, falling back to defaults if
/// that file is unusable.
fn load_tuning(path: Option<&Path>) -> Result<SimTuning> {
    if let Some(path) = path {
        return SimTuning::from_path(path)
            .with_context(|| format!("Failed to load tuning from {}", path.display()));
    }
    match tuning_from_env() {
        Ok(tuning) => Ok(tuning),
        Err(err) => {
            log::warn!("ignoring {}: {err}; using default tuning", bb_core::TUNING_PATH_ENV);
            Ok(SimTuning::default())
        }
    }
}
