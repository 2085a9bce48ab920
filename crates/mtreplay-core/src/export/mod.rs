//! Export formats for aggregated tables.
//!
//! - `csv`: header row, data rows, and the solo summary block
//! - `json`: the table structs serialized as-is
//! - `console`: colored run summaries for the terminal

mod console;
mod csv;
mod json;

pub use self::console::{format_solo_summary, format_team_summary};
pub use self::csv::{summary_lines, write_solo_csv, write_team_csv};
pub use self::json::{write_solo_json, write_team_json};

use chrono::{DateTime, TimeZone};
use strum::{Display, EnumString, IntoStaticStr};

/// Aggregation mode, used in file names and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Team,
    Solo,
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        self.into()
    }
}

/// Default export file name, e.g. `battle_team_20250101_1830.csv`.
pub fn default_file_name<Tz: TimeZone>(mode: Mode, format: ExportFormat, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "battle_{}_{}.{}",
        mode,
        now.format("%Y%m%d_%H%M"),
        format.extension()
    )
}
