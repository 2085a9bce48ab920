//! Team command: player x battle matrix over team battles.

use std::io::Write;

use anyhow::{Result, bail};
use mtreplay_core::export::{format_team_summary, write_team_csv, write_team_json};
use mtreplay_core::{ExportFormat, Mode, TeamAggregator, config::TeamConfig, process_files};
use tracing::info;

use crate::cli::InputArgs;
use crate::cli_utils::{self, Settings};

pub fn run(
    settings: Settings,
    input: &InputArgs,
    filter: Option<&str>,
    skip_player_count: Option<usize>,
) -> Result<()> {
    let files = cli_utils::expand_inputs(&input.paths)?;
    if files.is_empty() {
        bail!("No replay files selected");
    }

    let team_config = TeamConfig {
        skip_player_count: skip_player_count.unwrap_or(settings.config.team.skip_player_count),
    };
    let extractor = settings.extractor(input.tail_margin);

    let mut aggregator = TeamAggregator::with_config(settings.vehicle_names, &team_config);
    let report = process_files(&mut aggregator, &extractor, &files);
    info!("Unique players: {}", aggregator.players().len());

    if !report.succeeded() {
        bail!(
            "No team battles processed ({} skipped, {} failed)",
            report.skipped,
            report.failed
        );
    }

    let table = aggregator.table();
    let shown = filter.map(|query| table.filter(query));
    eprintln!(
        "{}",
        format_team_summary(
            &report,
            &table,
            aggregator.total_wins(),
            aggregator.win_rate(),
            shown.as_ref().map(|t| t.rows.len())
        )
    );

    let export = shown.as_ref().unwrap_or(&table);
    let format = ExportFormat::from(input.format);
    let (mut writer, path) = cli_utils::open_output(input.output.as_deref(), Mode::Team, format)?;
    match format {
        ExportFormat::Csv => write_team_csv(&mut writer, export)?,
        ExportFormat::Json => {
            write_team_json(&mut writer, &report, export, aggregator.total_wins())?
        }
    }
    writer.flush()?;

    if let Some(path) = path {
        eprintln!("Exported to: {}", path.display());
    }
    Ok(())
}
