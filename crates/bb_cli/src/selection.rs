//! Prompted input: seed text and the visiting lineup.

use crate::console::{pick_row, COLUMN_HEADING};
use anyhow::{bail, Result};
use bb_core::{DualLcg, GameError, Lineup, LineupBuilder, Player, Roster, LINEUP_SIZE};
use std::io::{self, BufRead, Write};

/// Seed text used when stdin closes before the prompt is answered.
pub const FALLBACK_DATE: &str = "111";
pub const FALLBACK_TIME: &str = "343";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line without its terminator; `None` on EOF.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Answer `prompt` from `preset` when given, else from input.
    pub fn seed_field(
        &mut self,
        prompt: &str,
        preset: Option<&str>,
        fallback: &str,
    ) -> io::Result<String> {
        let text = match preset {
            Some(text) => {
                writeln!(self.output, "{prompt}{text}")?;
                text.to_string()
            }
            None => self.read_line(prompt)?.unwrap_or_else(|| fallback.to_string()),
        };
        write!(self.output, "\n\n")?;
        Ok(text)
    }

    /// Date and time text for the generator seed.
    pub fn seed_text(
        &mut self,
        date: Option<&str>,
        time: Option<&str>,
    ) -> io::Result<(String, String)> {
        let date = self.seed_field("TODAYS DATE IS >", date, FALLBACK_DATE)?;
        let time = self.seed_field("THE TIME IS >", time, FALLBACK_TIME)?;
        Ok((date, time))
    }

    /// Collect nine visiting batters, preset queries first, then from input.
    ///
    /// Every accepted pick is stirred into `rng`, so the order of entry
    /// shapes the rest of the game.
    pub fn visiting_lineup<'r>(
        &mut self,
        roster: &'r Roster,
        presets: &[String],
        rng: &mut DualLcg,
    ) -> Result<Lineup<'r>> {
        writeln!(self.output, "ENTER YOUR LINEUP BELOW\n")?;
        writeln!(self.output, "VISITORS\n")?;
        writeln!(self.output, "{COLUMN_HEADING}\n")?;

        let mut builder = LineupBuilder::new();
        let mut presets = presets.iter();

        while !builder.is_full() {
            let query = match presets.next() {
                Some(query) => {
                    writeln!(self.output, ">{query}")?;
                    query.clone()
                }
                None => match self.read_line(">")? {
                    Some(line) => line,
                    None => bail!(
                        "input closed after {} of {LINEUP_SIZE} visiting batters",
                        builder.len()
                    ),
                },
            };
            if query.trim().is_empty() {
                continue;
            }

            match pick(roster, &mut builder, &query) {
                Ok((index, player)) => {
                    writeln!(self.output, "{}", pick_row(player))?;
                    let (a, b) = player.seed_contribution(index);
                    rng.stir(a, b);
                    log::debug!(
                        "visitor pick {}: {} (roster #{index})",
                        builder.len(),
                        player.name
                    );
                }
                Err(GameError::UnknownPlayer(_)) => {
                    writeln!(self.output, "NON-VALID PLAYER. RETRY.")?
                }
                Err(GameError::DuplicatePlayer { .. }) => {
                    writeln!(self.output, "PLAYER ALREADY SELECTED. RETRY.")?
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(builder.build()?)
    }
}

fn pick<'r>(
    roster: &'r Roster,
    builder: &mut LineupBuilder<'r>,
    query: &str,
) -> bb_core::Result<(usize, &'r Player)> {
    let (index, player) = roster
        .find(query)
        .ok_or_else(|| GameError::UnknownPlayer(query.trim().to_string()))?;
    builder.add(player)?;
    Ok((index, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const NINE: &str = "RUTH\nGEHRIG\nWILLIAMS\nDIMAGGIO\nMAYS\nAARON\nBERRA\nBANKS\nKALINE\n";

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_seed_text_read_from_input() {
        let mut p = prompter("4/10/61\n1:15\n");
        assert_eq!(p.seed_text(None, None).unwrap(), ("4/10/61".into(), "1:15".into()));
        let text = transcript(p);
        assert!(text.starts_with("TODAYS DATE IS >"));
        assert!(text.contains("THE TIME IS >"));
    }

    #[test]
    fn test_seed_text_falls_back_on_eof() {
        let mut p = prompter("");
        assert_eq!(p.seed_text(None, None).unwrap(), ("111".into(), "343".into()));
    }

    #[test]
    fn test_preset_seed_skips_input() {
        let mut p = prompter("typed\n");
        let seed = p.seed_text(Some("7/4/39"), None).unwrap();
        assert_eq!(seed, ("7/4/39".into(), "typed".into()));
        assert!(transcript(p).starts_with("TODAYS DATE IS >7/4/39\n"));
    }

    #[test]
    fn test_retry_messages() {
        let roster = Roster::embedded().unwrap();
        let input = format!("WAGNER\nRUTH\n\nruth\n3-NYY\n{}", &NINE[5..]);
        let mut p = prompter(&input);
        let mut rng = DualLcg::seed("a", "b");

        let lineup = p.visiting_lineup(&roster, &[], &mut rng).unwrap();
        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert_eq!(lineup.batter(0).name, "RUTH");
        assert_eq!(lineup.batter(1).name, "GEHRIG");

        let text = transcript(p);
        assert_eq!(text.matches("NON-VALID PLAYER. RETRY.").count(), 1);
        assert_eq!(text.matches("PLAYER ALREADY SELECTED. RETRY.").count(), 2);
    }

    #[test]
    fn test_presets_then_prompt() {
        let roster = Roster::embedded().unwrap();
        let presets: Vec<String> = ["RUTH", "GEHRIG", "WILLIAMS"].map(String::from).to_vec();
        let mut p = prompter("DIMAGGIO\nMAYS\nAARON\nBERRA\nBANKS\nKALINE\n");
        let mut rng = DualLcg::seed("a", "b");

        let lineup = p.visiting_lineup(&roster, &presets, &mut rng).unwrap();
        let names: Vec<_> = lineup.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["RUTH", "GEHRIG", "WILLIAMS", "DIMAGGIO", "MAYS", "AARON", "BERRA", "BANKS", "KALINE"]
        );
    }

    #[test]
    fn test_picks_stir_generator() {
        let roster = Roster::embedded().unwrap();
        let mut p = prompter(NINE);
        let mut rng = DualLcg::seed("a", "b");
        let before = rng.clone();
        p.visiting_lineup(&roster, &[], &mut rng).unwrap();
        assert_ne!(rng, before);

        let mut expected = before;
        for name in NINE.lines() {
            let (idx, player) = roster.find(name).unwrap();
            let (a, b) = player.seed_contribution(idx);
            expected.stir(a, b);
        }
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_eof_before_nine_is_an_error() {
        let roster = Roster::embedded().unwrap();
        let mut p = prompter("RUTH\nGEHRIG\n");
        let mut rng = DualLcg::seed("a", "b");
        let err = p.visiting_lineup(&roster, &[], &mut rng).unwrap_err();
        assert!(err.to_string().contains("2 of 9"));
    }
}
