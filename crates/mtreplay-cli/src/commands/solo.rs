//! Solo command: the replay owner's stats across every battle.

use std::io::Write;

use anyhow::{Result, bail};
use mtreplay_core::export::{format_solo_summary, write_solo_csv, write_solo_json};
use mtreplay_core::{ExportFormat, Mode, SoloAggregator, process_files};

use crate::cli::InputArgs;
use crate::cli_utils::{self, Settings};

pub fn run(settings: Settings, input: &InputArgs) -> Result<()> {
    let files = cli_utils::expand_inputs(&input.paths)?;
    if files.is_empty() {
        bail!("No replay files selected");
    }

    let extractor = settings.extractor(input.tail_margin);

    let mut aggregator = SoloAggregator::new(settings.vehicle_names);
    let report = process_files(&mut aggregator, &extractor, &files);

    if !report.succeeded() {
        bail!(
            "No battles processed ({} without owner, {} failed)",
            report.not_found,
            report.failed
        );
    }

    let table = aggregator.table();
    let summary = aggregator.summary();
    eprintln!(
        "{}",
        format_solo_summary(aggregator.owner(), &report, &summary)
    );

    let format = ExportFormat::from(input.format);
    let (mut writer, path) = cli_utils::open_output(input.output.as_deref(), Mode::Solo, format)?;
    match format {
        ExportFormat::Csv => write_solo_csv(&mut writer, &table, &summary)?,
        ExportFormat::Json => {
            write_solo_json(&mut writer, aggregator.owner(), &report, &table, &summary)?
        }
    }
    writer.flush()?;

    if let Some(path) = path {
        eprintln!("Exported to: {}", path.display());
    }
    Ok(())
}
