//! CLI argument definitions for mtreplay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mtreplay_core::ExportFormat;

#[derive(Parser)]
#[command(name = "mtreplay")]
#[command(about = "Replay statistics analyzer", version)]
pub struct Args {
    /// Config file (TOML). Defaults to mtreplay.toml if present
    #[arg(short, long, global = true, env = "MTREPLAY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Vehicle name table layered over the builtin names
    #[arg(long, global = true, value_name = "FILE")]
    pub vehicle_names: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Player x battle damage matrix over team battles
    Team {
        #[command(flatten)]
        input: InputArgs,
        /// Only show players whose name contains this text
        #[arg(long)]
        filter: Option<String>,
        /// Skip battles with exactly this many participants
        #[arg(long, env = "MTREPLAY_SKIP_PLAYER_COUNT")]
        skip_player_count: Option<usize>,
    },
    /// Per-battle stats of the replay owner
    Solo {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the JSON documents embedded in one replay
    Extract {
        /// Replay file
        file: PathBuf,
        /// Bytes at the end of the replay never used as a scan start
        #[arg(long)]
        tail_margin: Option<usize>,
    },
}

#[derive(clap::Args)]
pub struct InputArgs {
    /// Replay files, or directories containing .mtreplay files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output file path ("-" for stdout). Defaults to battle_<mode>_<timestamp>
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Bytes at the end of each replay never used as a scan start
    #[arg(long)]
    pub tail_margin: Option<usize>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}
