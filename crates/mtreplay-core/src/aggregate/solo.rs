use serde::Serialize;
use tracing::{info, warn};

use super::{Cell, IngestOutcome, ReplayAggregator, ratio, round_to};
use crate::replay::{Battle, Replay, column_label};
use crate::vehicle::VehicleNames;

/// The owner's stats in one battle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoloRecord {
    pub battle_id: String,
    pub date: String,
    pub map: String,
    pub vehicle: String,
    pub damage: i64,
    pub kills: i64,
    pub spotted: i64,
    pub shots: i64,
    pub hits: i64,
    pub piercings: i64,
    pub xp: i64,
    pub damage_blocked: i64,
    pub damage_received: i64,
    /// `hits / shots * 100`, 0 when no shots were fired.
    pub accuracy: f64,
}

/// Per-battle table of the owner's stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoloTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub battle_count: usize,
    pub total_damage: i64,
}

impl SoloTable {
    pub const HEADERS: [&'static str; 11] = [
        "Vehicle",
        "Damage",
        "Kills",
        "Spotted",
        "Shots",
        "Hits",
        "Piercings",
        "Accuracy %",
        "XP",
        "Blocked",
        "Date and map",
    ];
}

/// Averages over every battle of the owner.
///
/// Kills and spotted are rounded to 2 decimals, everything else to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SoloSummary {
    pub total_battles: usize,
    pub avg_damage: f64,
    pub avg_kills: f64,
    pub avg_spotted: f64,
    pub avg_shots: f64,
    pub avg_hits: f64,
    pub avg_piercings: f64,
    pub avg_blocked: f64,
    /// Aggregate hits over aggregate shots, in percent.
    pub accuracy: f64,
    pub total_wins: u32,
    pub win_rate: f64,
}

/// Follows the replay owner across battles of any type.
///
/// The owner is the first non-empty `playerName` seen and stays fixed for the
/// aggregator's lifetime.
#[derive(Debug, Clone)]
pub struct SoloAggregator {
    names: VehicleNames,
    owner: Option<String>,
    records: Vec<SoloRecord>,
    total_wins: u32,
}

impl SoloAggregator {
    pub fn new(names: VehicleNames) -> Self {
        Self {
            names,
            owner: None,
            records: Vec::new(),
            total_wins: 0,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Records in ingest order.
    pub fn records(&self) -> &[SoloRecord] {
        &self.records
    }

    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    fn sorted_records(&self) -> Vec<&SoloRecord> {
        let mut records: Vec<&SoloRecord> = self.records.iter().collect();
        records.sort_by(|a, b| a.date.cmp(&b.date));
        records
    }

    /// One row per battle, sorted by date. Empty when nothing was accepted.
    pub fn table(&self) -> SoloTable {
        if self.records.is_empty() {
            return SoloTable::default();
        }

        let records = self.sorted_records();
        let rows = records
            .iter()
            .map(|record| {
                vec![
                    Cell::Text(record.vehicle.clone()),
                    Cell::Integer(record.damage),
                    Cell::Integer(record.kills),
                    Cell::Integer(record.spotted),
                    Cell::Integer(record.shots),
                    Cell::Integer(record.hits),
                    Cell::Integer(record.piercings),
                    Cell::Text(format!("{:.1}", record.accuracy)),
                    Cell::Integer(record.xp),
                    Cell::Integer(record.damage_blocked),
                    Cell::Text(column_label(&record.date, &record.map)),
                ]
            })
            .collect();

        SoloTable {
            headers: SoloTable::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
            battle_count: records.len(),
            total_damage: records.iter().map(|r| r.damage).sum(),
        }
    }

    /// Summary over all accepted battles. All zero when nothing was accepted.
    pub fn summary(&self) -> SoloSummary {
        let battles = self.records.len() as i64;
        if battles == 0 {
            return SoloSummary::default();
        }

        let sum = |field: fn(&SoloRecord) -> i64| -> i64 { self.records.iter().map(field).sum() };
        let average = |field: fn(&SoloRecord) -> i64, decimals: usize| -> f64 {
            round_to(ratio(sum(field), battles), decimals)
        };

        let total_hits = sum(|r| r.hits);
        let total_shots = sum(|r| r.shots);

        SoloSummary {
            total_battles: self.records.len(),
            avg_damage: average(|r| r.damage, 1),
            avg_kills: average(|r| r.kills, 2),
            avg_spotted: average(|r| r.spotted, 2),
            avg_shots: average(|r| r.shots, 1),
            avg_hits: average(|r| r.hits, 1),
            avg_piercings: average(|r| r.piercings, 1),
            avg_blocked: average(|r| r.damage_blocked, 1),
            accuracy: round_to(ratio(total_hits, total_shots) * 100.0, 1),
            total_wins: self.total_wins,
            win_rate: round_to(ratio(self.total_wins as i64, battles) * 100.0, 1),
        }
    }
}

impl ReplayAggregator for SoloAggregator {
    fn ingest(&mut self, source: &str, replay: &Replay) -> IngestOutcome {
        let metadata = &replay.metadata;
        if self.owner.is_none() && !metadata.player_name().is_empty() {
            info!("Replay owner: {}", metadata.player_name());
            self.owner = Some(metadata.player_name().to_string());
        }

        let Some(owner) = self.owner.as_deref() else {
            warn!("{}: no player name recorded, skipping", source);
            return IngestOutcome::OwnerNotFound;
        };

        let Some(entry) = metadata.find_player(owner) else {
            warn!("{}: player {} not found in roster", source, owner);
            return IngestOutcome::OwnerNotFound;
        };

        let battle = Battle::from_metadata(metadata, source);
        let stats = replay.results.vehicle_stats(entry.slot);
        let record = SoloRecord {
            battle_id: battle.id,
            date: battle.date,
            map: battle.map,
            vehicle: self.names.resolve(entry.vehicle_id()),
            damage: stats.damage_dealt,
            kills: stats.kills,
            spotted: stats.spotted,
            shots: stats.shots,
            hits: stats.direct_hits,
            piercings: stats.piercings,
            xp: stats.xp,
            damage_blocked: stats.damage_blocked_by_armor,
            damage_received: stats.damage_received,
            accuracy: stats.accuracy(),
        };

        let victory = replay.is_victory_for(owner);
        if victory {
            self.total_wins += 1;
        }
        info!(
            "{} on {}: damage {} | kills {} | shots {} | hits {} | piercings {} | blocked {}",
            if victory { "Victory" } else { "Defeat" },
            record.map,
            record.damage,
            record.kills,
            record.shots,
            record.hits,
            record.piercings,
            record.damage_blocked
        );

        self.records.push(record);
        IngestOutcome::Accepted
    }
}
