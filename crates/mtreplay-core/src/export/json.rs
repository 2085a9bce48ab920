//! JSON export of the aggregated tables.

use std::io::Write;

use serde::Serialize;

use crate::aggregate::{SoloSummary, SoloTable, TeamTable};
use crate::batch::BatchReport;
use crate::error::Result;

#[derive(Serialize)]
struct TeamExport<'a> {
    report: &'a BatchReport,
    total_wins: u32,
    table: &'a TeamTable,
}

#[derive(Serialize)]
struct SoloExport<'a> {
    owner: Option<&'a str>,
    report: &'a BatchReport,
    summary: &'a SoloSummary,
    table: &'a SoloTable,
}

pub fn write_team_json<W: Write>(
    mut writer: W,
    report: &BatchReport,
    table: &TeamTable,
    total_wins: u32,
) -> Result<()> {
    let export = TeamExport {
        report,
        total_wins,
        table,
    };
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_solo_json<W: Write>(
    mut writer: W,
    owner: Option<&str>,
    report: &BatchReport,
    table: &SoloTable,
    summary: &SoloSummary,
) -> Result<()> {
    let export = SoloExport {
        owner,
        report,
        summary,
        table,
    };
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
