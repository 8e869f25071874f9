use anyhow::Result;
use clap::Parser;
use sideline::cli::{Cli, Commands};
use sideline::commands::{convert, init, score};
use sideline::config;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config();

    match cli.command {
        Commands::Score {
            score,
            format,
            output,
        } => {
            let score_config = score::ScoreConfig {
                score,
                format: app_config.resolve_format(format.map(Into::into)),
                output,
            };
            score::run_score(score_config)
        }
        Commands::Convert {
            value,
            from,
            to,
            format,
            output,
        } => {
            let convert_config = convert::ConvertConfig {
                value,
                from,
                to,
                format: app_config.resolve_format(format.map(Into::into)),
                output,
            };
            convert::run_convert(convert_config, &app_config)
        }
        Commands::Init { force } => init::init_config(force),
    }
}
