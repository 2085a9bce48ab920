use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, info};

use super::{Cell, IngestOutcome, ReplayAggregator, ratio, round_to};
use crate::config::TeamConfig;
use crate::config::text::ABSENT;
use crate::replay::{Battle, Replay};
use crate::vehicle::VehicleNames;

/// One player's showing in one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerBattleRecord {
    pub damage_dealt: i64,
    pub vehicle: String,
}

/// Player x battle matrix projected for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub battle_count: usize,
}

impl TeamTable {
    pub const FIXED_HEADERS: [&'static str; 3] = ["Player", "AvgDamage", "BattleCount"];

    /// Keep the rows whose player name contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> TeamTable {
        let query = query.to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|row| match row.first() {
                Some(Cell::Text(name)) => name.to_lowercase().contains(&query),
                _ => query.is_empty(),
            })
            .cloned()
            .collect();

        TeamTable {
            headers: self.headers.clone(),
            rows,
            battle_count: self.battle_count,
        }
    }
}

/// Aggregates team battles into a player x battle damage matrix.
///
/// Battles whose roster has exactly `skip_player_count` entries (15v15
/// random battles by default) are skipped. Any other roster size is accepted.
#[derive(Debug, Clone)]
pub struct TeamAggregator {
    names: VehicleNames,
    skip_player_count: usize,
    players: BTreeSet<String>,
    battles: Vec<Battle>,
    records: HashMap<String, HashMap<String, PlayerBattleRecord>>,
    player_battles: HashMap<String, u32>,
    total_wins: u32,
}

impl TeamAggregator {
    pub fn new(names: VehicleNames) -> Self {
        Self::with_config(names, &TeamConfig::default())
    }

    pub fn with_config(names: VehicleNames, config: &TeamConfig) -> Self {
        Self {
            names,
            skip_player_count: config.skip_player_count,
            players: BTreeSet::new(),
            battles: Vec::new(),
            records: HashMap::new(),
            player_battles: HashMap::new(),
            total_wins: 0,
        }
    }

    /// Battles accepted so far, in ingest order.
    pub fn battles(&self) -> &[Battle] {
        &self.battles
    }

    pub fn players(&self) -> &BTreeSet<String> {
        &self.players
    }

    /// Records of one battle id, keyed by player name.
    pub fn battle_records(&self, battle_id: &str) -> Option<&HashMap<String, PlayerBattleRecord>> {
        self.records.get(battle_id)
    }

    /// Total `(battle id, player)` records.
    pub fn record_count(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    /// Number of accepted battles a player appeared in.
    pub fn player_battle_count(&self, player: &str) -> u32 {
        self.player_battles.get(player).copied().unwrap_or(0)
    }

    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    /// Wins as a percentage of accepted battles.
    pub fn win_rate(&self) -> f64 {
        ratio(self.total_wins as i64, self.battles.len() as i64) * 100.0
    }

    /// Project the matrix: battles by date, players by name.
    pub fn table(&self) -> TeamTable {
        let mut battles: Vec<&Battle> = self.battles.iter().collect();
        battles.sort_by(|a, b| a.date.cmp(&b.date));

        let mut headers: Vec<String> = TeamTable::FIXED_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect();
        headers.extend(battles.iter().map(|battle| battle.column_label()));

        let rows = self
            .players
            .iter()
            .map(|player| {
                let mut total_damage = 0i64;
                let mut columns = Vec::with_capacity(battles.len());

                for battle in &battles {
                    match self
                        .records
                        .get(&battle.id)
                        .and_then(|records| records.get(player))
                    {
                        Some(record) => {
                            total_damage += record.damage_dealt;
                            columns.push(Cell::Text(format!(
                                "{} - {}",
                                record.vehicle, record.damage_dealt
                            )));
                        }
                        None => columns.push(Cell::from(ABSENT)),
                    }
                }

                let battle_count = self.player_battle_count(player) as i64;
                let avg_damage = round_to(ratio(total_damage, battle_count), 0) as i64;

                let mut row = vec![
                    Cell::Text(player.clone()),
                    Cell::Integer(avg_damage),
                    Cell::Integer(battle_count),
                ];
                row.extend(columns);
                row
            })
            .collect();

        TeamTable {
            headers,
            rows,
            battle_count: battles.len(),
        }
    }
}

impl ReplayAggregator for TeamAggregator {
    fn ingest(&mut self, source: &str, replay: &Replay) -> IngestOutcome {
        let metadata = &replay.metadata;
        let player_count = metadata.player_count();
        debug!("{}: {} participants", source, player_count);

        if player_count == self.skip_player_count {
            info!(
                "Skipped {} ({} participants on {})",
                source,
                player_count,
                metadata.map_name()
            );
            return IngestOutcome::Skipped;
        }

        let battle = Battle::from_metadata(metadata, source);
        let records = self.records.entry(battle.id.clone()).or_default();
        let mut battle_players = BTreeSet::new();

        for entry in metadata.roster() {
            let player = entry.player_name().to_string();
            let stats = replay.results.vehicle_stats(entry.slot);

            self.players.insert(player.clone());
            records.insert(
                player.clone(),
                PlayerBattleRecord {
                    damage_dealt: stats.damage_dealt,
                    vehicle: self.names.resolve(entry.vehicle_id()),
                },
            );
            battle_players.insert(player);
        }

        for player in &battle_players {
            *self.player_battles.entry(player.clone()).or_insert(0) += 1;
        }

        let victory = replay.is_victory_for(metadata.player_name());
        if victory {
            self.total_wins += 1;
        }
        info!(
            "{} on {} ({} players)",
            if victory { "Victory" } else { "Defeat" },
            battle.map,
            battle_players.len()
        );

        self.battles.push(battle);
        IngestOutcome::Accepted
    }
}
