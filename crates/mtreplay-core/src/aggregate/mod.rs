//! Aggregation of extracted replays into tables.
//!
//! - `TeamAggregator` builds a player x battle damage matrix for team battles
//! - `SoloAggregator` follows the replay owner across every battle
//!
//! Both implement [`ReplayAggregator`] so the batch driver can feed either.

mod solo;
mod team;

pub use solo::{SoloAggregator, SoloRecord, SoloSummary, SoloTable};
pub use team::{PlayerBattleRecord, TeamAggregator, TeamTable};

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::replay::Replay;

/// What an aggregator did with one extracted replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum IngestOutcome {
    /// The replay contributed to the tables.
    Accepted,
    /// Excluded by the player-count rule (team mode).
    Skipped,
    /// The run's owner is not in the roster (solo mode).
    OwnerNotFound,
}

/// A consumer of extracted replays.
pub trait ReplayAggregator {
    /// Fold one replay into the aggregate. `source` names the file it came from.
    fn ingest(&mut self, source: &str, replay: &Replay) -> IngestOutcome;
}

/// A table cell: text or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

/// Round the exact binary value to `decimals` places, ties to even.
///
/// Goes through the correctly rounded decimal string, so `0.35` (stored as
/// `0.34999...`) rounds down to `0.3`.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// `numerator / denominator`, or 0 for an empty denominator.
pub(crate) fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_ties_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(1234.56, 1), 1234.6);
        assert_eq!(round_to(0.125, 2), 0.12);
    }

    #[test]
    fn test_round_to_below_tie_rounds_down() {
        assert_eq!(round_to(7.0 / 20.0, 1), 0.3);
        assert_eq!(round_to(3.0 / 40.0, 2), 0.07);
        assert_eq!(round_to(0.45, 1), 0.5);
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(10, 0), 0.0);
        assert_eq!(ratio(10, 4), 2.5);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::from("T-34 - 1200").to_string(), "T-34 - 1200");
        assert_eq!(Cell::from(42i64).to_string(), "42");
    }

    #[test]
    fn test_cell_serializes_untagged() {
        let cells = vec![Cell::from("a"), Cell::from(7i64)];
        assert_eq!(serde_json::to_string(&cells).unwrap(), r#"["a",7]"#);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(IngestOutcome::OwnerNotFound.to_string(), "OwnerNotFound");
        let name: &'static str = IngestOutcome::Skipped.into();
        assert_eq!(name, "Skipped");
    }
}
