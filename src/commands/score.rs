//! The `score` command: enumerate scoring-play combinations.
//!
//! With a score argument the command prints one report and exits. Without
//! one it runs the classic interactive loop: prompt for scores until the
//! sentinel value 1 is entered, re-prompting on negative input.

use crate::errors::SidelineError;
use crate::io::output::{create_writer, OutputFormat};
use crate::scoring::ScoreReport;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// The interactive loop stops when this score is entered. One point is
/// not reachable by any combination of plays, which is why it is safe to
/// reserve.
pub const SENTINEL_SCORE: i64 = 1;

pub struct ScoreConfig {
    /// Score to enumerate; `None` enters interactive mode.
    pub score: Option<u32>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_score(config: ScoreConfig) -> Result<()> {
    match config.score {
        Some(score) => {
            log::debug!("Enumerating combinations for score {score}");
            let report = ScoreReport::build(score);
            let mut writer = create_writer(config.format, config.output.as_deref())?;
            writer.write_score_report(&report)
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive_loop(&mut stdin.lock(), &mut stdout.lock())
        }
    }
}

/// Read scores until the sentinel or EOF, printing a report per score.
///
/// Negative scores re-prompt; non-numeric input is an error, matching the
/// behavior of the original console program.
fn interactive_loop<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    loop {
        write!(output, "Enter the NFL score (enter {SENTINEL_SCORE} to stop): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF ends the session like the sentinel does.
            writeln!(output)?;
            return Ok(());
        }

        let trimmed = line.trim();
        let score: i64 = trimmed
            .parse()
            .map_err(|_| SidelineError::invalid_score(trimmed))?;

        if score == SENTINEL_SCORE {
            return Ok(());
        }
        if score < 0 {
            writeln!(
                output,
                "Invalid score. Please enter a non-negative score (or {SENTINEL_SCORE} to stop)."
            )?;
            continue;
        }

        // Scores beyond u32 are rejected, not wrapped.
        let score = u32::try_from(score).map_err(|_| SidelineError::invalid_score(trimmed))?;
        write_combinations(output, score)?;
        writeln!(output)?;
    }
}

fn write_combinations<W: Write>(output: &mut W, score: u32) -> Result<()> {
    writeln!(
        output,
        "Possible combinations of scoring plays if a team's score is {score}:"
    )?;
    let mut found = false;
    for combination in crate::scoring::enumerate(score) {
        writeln!(output, "{combination}")?;
        found = true;
    }
    if !found {
        writeln!(output, "No combinations can result in that score.")?;
    }
    Ok(())
}
