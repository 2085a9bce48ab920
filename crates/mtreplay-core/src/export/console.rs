//! Console run summaries with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::aggregate::{SoloSummary, TeamTable};
use crate::batch::BatchReport;

fn border() -> String {
    "━".repeat(60)
}

/// Format the team-mode run summary.
///
/// `shown` is the number of rows left after filtering, if a filter was used.
pub fn format_team_summary(
    report: &BatchReport,
    table: &TeamTable,
    total_wins: u32,
    win_rate: f64,
    shown: Option<usize>,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", border().dimmed());
    let _ = writeln!(
        output,
        "  Team battles: {}  |  Wins: {} ({:.1}%)",
        table.battle_count.bold(),
        total_wins.green(),
        win_rate
    );
    if report.skipped > 0 {
        let _ = writeln!(output, "  Skipped random battles: {}", report.skipped.yellow());
    }
    if report.failed > 0 {
        let _ = writeln!(output, "  Unreadable replays: {}", report.failed.red());
    }
    let _ = writeln!(output, "  Players: {}", table.rows.len());
    if let Some(shown) = shown {
        let _ = writeln!(output, "  Shown: {} of {}", shown, table.rows.len());
    }
    let _ = write!(output, "{}", border().dimmed());

    output
}

/// Format the solo-mode run summary.
pub fn format_solo_summary(
    owner: Option<&str>,
    report: &BatchReport,
    summary: &SoloSummary,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", border().dimmed());
    let _ = writeln!(output, "  Player: {}", owner.unwrap_or("-").bold());
    let _ = writeln!(
        output,
        "  Battles: {}  |  Avg damage: {:.1}  |  Wins: {} ({:.1}%)",
        summary.total_battles.bold(),
        summary.avg_damage,
        summary.total_wins.green(),
        summary.win_rate
    );
    let _ = writeln!(
        output,
        "  Kills: {:.2}  |  Spotted: {:.2}  |  Blocked: {:.1}",
        summary.avg_kills, summary.avg_spotted, summary.avg_blocked
    );
    let _ = writeln!(
        output,
        "  Shots: {:.1}  |  Hits: {:.1}  |  Piercings: {:.1}  |  Accuracy: {:.1}%",
        summary.avg_shots, summary.avg_hits, summary.avg_piercings, summary.accuracy
    );
    if report.not_found > 0 {
        let _ = writeln!(
            output,
            "  Replays without this player: {}",
            report.not_found.yellow()
        );
    }
    if report.failed > 0 {
        let _ = writeln!(output, "  Unreadable replays: {}", report.failed.red());
    }
    let _ = write!(output, "{}", border().dimmed());

    output
}
