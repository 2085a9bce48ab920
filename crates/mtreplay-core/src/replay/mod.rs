//! Typed views over the metadata and results documents of a replay.
//!
//! The documents stay as parsed JSON maps; accessors apply the same defaults
//! the aggregators rely on (missing numbers are 0, missing text is
//! [`UNKNOWN`](crate::config::text::UNKNOWN)).

mod battle;
mod stats;

pub use battle::{Battle, column_label};
pub use stats::VehicleStats;

use serde_json::{Map, Value};

use crate::config::text::UNKNOWN;

/// One roster entry of `metadata.vehicles` that is an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// Vehicle slot identifier, shared with `results.vehicles`.
    pub slot: &'a str,
    pub name: Option<&'a str>,
    pub vehicle_type: Option<&'a str>,
    pub team: i64,
}

impl RosterEntry<'_> {
    pub fn player_name(&self) -> &str {
        self.name.unwrap_or(UNKNOWN)
    }

    pub fn vehicle_id(&self) -> &str {
        self.vehicle_type.unwrap_or(UNKNOWN)
    }
}

/// The replay metadata document (the object carrying `clientVersionFromXml`).
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn client_version(&self) -> Option<&str> {
        self.0.get("clientVersionFromXml").and_then(Value::as_str)
    }

    pub fn map_name(&self) -> &str {
        self.text("mapDisplayName").unwrap_or(UNKNOWN)
    }

    pub fn date_time(&self) -> &str {
        self.text("dateTime").unwrap_or(UNKNOWN)
    }

    /// Name of the player who recorded the replay, empty if absent.
    pub fn player_name(&self) -> &str {
        self.text("playerName").unwrap_or("")
    }

    /// Object-valued roster entries, in document order. Placeholders are skipped.
    pub fn roster(&self) -> impl Iterator<Item = RosterEntry<'_>> {
        self.0
            .get("vehicles")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|vehicles| vehicles.iter())
            .filter_map(|(slot, value)| {
                let entry = value.as_object()?;
                Some(RosterEntry {
                    slot: slot.as_str(),
                    name: entry.get("name").and_then(Value::as_str),
                    vehicle_type: entry.get("vehicleType").and_then(Value::as_str),
                    team: entry.get("team").and_then(Value::as_i64).unwrap_or(0),
                })
            })
    }

    /// Number of object-valued roster entries.
    pub fn player_count(&self) -> usize {
        self.roster().count()
    }

    /// First roster entry whose name equals `name`.
    pub fn find_player(&self, name: &str) -> Option<RosterEntry<'_>> {
        self.roster().find(|entry| entry.name == Some(name))
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// The battle results document (the object carrying `vehicles`, `personal`
/// and `common`).
#[derive(Debug, Clone, PartialEq)]
pub struct Results(Map<String, Value>);

impl Results {
    pub fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Winning team number; 0 means draw or unknown.
    pub fn winner_team(&self) -> i64 {
        self.0
            .get("common")
            .and_then(|common| common.get("winnerTeam"))
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Stats of the first snapshot recorded for `slot`.
    ///
    /// A missing slot or empty snapshot list yields zeroed stats.
    pub fn vehicle_stats(&self, slot: &str) -> VehicleStats {
        self.0
            .get("vehicles")
            .and_then(|vehicles| vehicles.get(slot))
            .and_then(|snapshots| snapshots.get(0))
            .map(VehicleStats::from_value)
            .unwrap_or_default()
    }
}

/// Metadata and results extracted from one replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub metadata: Metadata,
    pub results: Results,
}

impl Replay {
    pub fn new(metadata: Metadata, results: Results) -> Self {
        Self { metadata, results }
    }

    /// Whether the team of the roster entry named `player` won.
    ///
    /// A player missing from the roster, or on team 0, never wins.
    pub fn is_victory_for(&self, player: &str) -> bool {
        let winner = self.results.winner_team();
        self.metadata
            .find_player(player)
            .is_some_and(|entry| entry.team != 0 && entry.team == winner)
    }
}
