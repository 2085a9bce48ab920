mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use cli_utils::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (RUST_LOG takes precedence over --verbose)
    let default_filter = if args.verbose {
        "mtreplay=debug,mtreplay_core=debug"
    } else {
        "mtreplay=info,mtreplay_core=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(args.config.as_deref(), args.vehicle_names.as_deref())?;

    match args.command {
        Command::Team {
            input,
            filter,
            skip_player_count,
        } => commands::team::run(settings, &input, filter.as_deref(), skip_player_count),
        Command::Solo { input } => commands::solo::run(settings, &input),
        Command::Extract { file, tail_margin } => {
            commands::extract::run(&file, &settings.extractor(tail_margin))
        }
    }
}
