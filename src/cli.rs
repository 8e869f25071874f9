use crate::errors::SidelineError;
use crate::weather::Scale;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sideline")]
#[command(about = "Game-day console utilities: score combinations and weather advisories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate scoring-play combinations for a football score
    Score {
        /// Final score to enumerate; omit to enter interactive mode
        score: Option<u32>,

        /// Output format (one-shot mode only)
        #[arg(short, long, value_enum, requires = "score")]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout; one-shot mode only)
        #[arg(short, long, requires = "score")]
        output: Option<PathBuf>,
    },

    /// Convert a temperature and print a weather advisory
    Convert {
        /// Temperature value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Scale the value is given in: C, F, or K
        #[arg(short = 'f', long, value_parser = parse_scale)]
        from: Scale,

        /// Scale to convert to: C, F, or K
        #[arg(short = 't', long, value_parser = parse_scale)]
        to: Scale,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Scale spelling is owned by [`Scale`]'s `FromStr` impl; clap goes
/// through the same parser the library exposes.
fn parse_scale(s: &str) -> Result<Scale, SidelineError> {
    s.parse()
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_score_command() {
        let cli = Cli::parse_from(["sideline", "score", "42", "--format", "json"]);

        match cli.command {
            Commands::Score { score, format, .. } => {
                assert_eq!(score, Some(42));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_cli_parsing_score_interactive() {
        let cli = Cli::parse_from(["sideline", "score"]);

        match cli.command {
            Commands::Score { score, format, .. } => {
                assert_eq!(score, None);
                assert_eq!(format, None);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_cli_rejects_negative_score() {
        assert!(Cli::try_parse_from(["sideline", "score", "--", "-7"]).is_err());
    }

    #[test]
    fn test_cli_rejects_output_flags_in_interactive_mode() {
        // --format and --output only make sense with a score argument.
        assert!(Cli::try_parse_from(["sideline", "score", "--format", "json"]).is_err());
        assert!(Cli::try_parse_from(["sideline", "score", "--output", "out.json"]).is_err());
        assert!(Cli::try_parse_from(["sideline", "score", "6", "--format", "json"]).is_ok());
    }

    #[test]
    fn test_cli_parsing_convert_command() {
        let cli = Cli::parse_from([
            "sideline", "convert", "98.6", "--from", "f", "--to", "celsius",
        ]);

        match cli.command {
            Commands::Convert {
                value, from, to, ..
            } => {
                assert_eq!(value, 98.6);
                assert_eq!(from, Scale::Fahrenheit);
                assert_eq!(to, Scale::Celsius);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_scale() {
        assert!(Cli::try_parse_from(["sideline", "convert", "10", "--from", "r", "--to", "c"])
            .is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["sideline", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
