//! CSV export via the `csv` crate.

use std::io::Write;

use crate::aggregate::{Cell, SoloSummary, SoloTable, TeamTable};
use crate::error::{Error, Result};

/// Marker line between the solo rows and the summary block.
pub const SUMMARY_MARKER: &str = "=== SUMMARY ===";

fn write_table<W: Write>(writer: W, headers: &[String], rows: &[Vec<Cell>]) -> Result<W> {
    let mut csv = ::csv::Writer::from_writer(writer);
    if !headers.is_empty() {
        csv.write_record(headers)?;
    }
    for row in rows {
        csv.write_record(row.iter().map(Cell::to_string))?;
    }
    csv.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Write the team matrix: header row, then one row per player.
pub fn write_team_csv<W: Write>(writer: W, table: &TeamTable) -> Result<()> {
    let mut writer = write_table(writer, &table.headers, &table.rows)?;
    writer.flush()?;
    Ok(())
}

/// Write the solo table followed by a blank line and the summary block.
pub fn write_solo_csv<W: Write>(writer: W, table: &SoloTable, summary: &SoloSummary) -> Result<()> {
    let mut writer = write_table(writer, &table.headers, &table.rows)?;
    writeln!(writer)?;
    writeln!(writer, "{}", SUMMARY_MARKER)?;
    for line in summary_lines(summary) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// `Label: value` lines of the solo summary, in report order.
pub fn summary_lines(summary: &SoloSummary) -> Vec<String> {
    vec![
        format!("Total battles: {}", summary.total_battles),
        format!("Average damage: {:.1}", summary.avg_damage),
        format!("Average kills: {:.2}", summary.avg_kills),
        format!("Average spotted: {:.2}", summary.avg_spotted),
        format!("Average shots: {:.1}", summary.avg_shots),
        format!("Average hits: {:.1}", summary.avg_hits),
        format!("Average piercings: {:.1}", summary.avg_piercings),
        format!("Average blocked damage: {:.1}", summary.avg_blocked),
        format!("Overall accuracy: {:.1}%", summary.accuracy),
        format!("Wins: {} ({:.1}%)", summary.total_wins, summary.win_rate),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_table() -> TeamTable {
        TeamTable {
            headers: vec![
                "Player".into(),
                "AvgDamage".into(),
                "BattleCount".into(),
                "2025-01-01 10:00 Mines, North".into(),
            ],
            rows: vec![vec![
                Cell::from("alice"),
                Cell::from(1200i64),
                Cell::from(1i64),
                Cell::from("T-34 - 1200"),
            ]],
            battle_count: 1,
        }
    }

    #[test]
    fn test_team_csv_quotes_delimiter() {
        let mut out = Vec::new();
        write_team_csv(&mut out, &team_table()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Player,AvgDamage,BattleCount,\"2025-01-01 10:00 Mines, North\""
        );
        assert_eq!(lines[1], "alice,1200,1,T-34 - 1200");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_solo_csv_appends_summary() {
        let table = SoloTable {
            headers: SoloTable::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: vec![vec![
                Cell::from("T-34"),
                Cell::from(100i64),
                Cell::from(1i64),
                Cell::from(0i64),
                Cell::from(10i64),
                Cell::from(4i64),
                Cell::from(3i64),
                Cell::from("40.0"),
                Cell::from(500i64),
                Cell::from(0i64),
                Cell::from("2025-01-01 10:00 Mines"),
            ]],
            battle_count: 1,
            total_damage: 100,
        };
        let summary = SoloSummary {
            total_battles: 1,
            avg_damage: 100.0,
            accuracy: 40.0,
            total_wins: 1,
            win_rate: 100.0,
            ..Default::default()
        };

        let mut out = Vec::new();
        write_solo_csv(&mut out, &table, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Vehicle,Damage,Kills"));
        assert_eq!(lines[1], "T-34,100,1,0,10,4,3,40.0,500,0,2025-01-01 10:00 Mines");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], SUMMARY_MARKER);
        assert_eq!(lines[4], "Total battles: 1");
        assert_eq!(lines[5], "Average damage: 100.0");
        assert_eq!(lines[6], "Average kills: 0.00");
        assert_eq!(lines[12], "Overall accuracy: 40.0%");
        assert_eq!(lines[13], "Wins: 1 (100.0%)");
    }

    #[test]
    fn test_solo_csv_empty_table() {
        let mut out = Vec::new();
        write_solo_csv(&mut out, &SoloTable::default(), &SoloSummary::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\n'));
        assert!(text.contains("Total battles: 0"));
    }
}
