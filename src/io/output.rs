//! Report writers for the supported output formats.
//!
//! Each command builds a plain report struct and hands it to an
//! [`OutputWriter`]; the writer decides how it looks. Terminal output is
//! the human-readable form with the exact line formats inherited from the
//! classic console programs; JSON is the machine-readable form.

use crate::scoring::ScoreReport;
use crate::weather::ConvertReport;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_score_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
    fn write_convert_report(&mut self, report: &ConvertReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_score_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_convert_report(&mut self, report: &ConvertReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_score_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!(
                "Possible combinations of scoring plays if a team's score is {}:",
                report.score
            )
            .bold()
        )?;
        if report.combinations.is_empty() {
            writeln!(
                self.writer,
                "{}",
                "No combinations can result in that score.".yellow()
            )?;
            return Ok(());
        }
        for combination in &report.combinations {
            writeln!(self.writer, "{combination}")?;
        }
        writeln!(
            self.writer,
            "{}",
            format!("{} combination(s) found.", report.combinations.len()).dimmed()
        )?;
        Ok(())
    }

    fn write_convert_report(&mut self, report: &ConvertReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Converted temperature: {:.2} {}",
            report.converted, report.to
        )?;
        writeln!(self.writer, "Temperature category: {}", report.category)?;
        writeln!(self.writer, "Weather advisory: {}", report.advisory)?;
        Ok(())
    }
}

/// Build a writer for the requested format, targeting a file when `output`
/// is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match output {
        Some(path) => {
            let file = File::create(path)?;
            match format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                OutputFormat::Terminal => Box::new(TerminalWriter::new(file)),
            }
        }
        None => match format {
            OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
            OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
        },
    };
    Ok(writer)
}
