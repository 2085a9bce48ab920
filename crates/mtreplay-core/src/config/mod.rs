//! Configuration for replay analysis.
//!
//! Compile-time defaults live in the constant modules below; `Config` is the
//! runtime layer loaded from a TOML file and overridden by CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Brace-matching scan configuration.
pub mod extract {
    /// Bytes at the end of a replay that are never used as a scan start.
    ///
    /// Replays always carry binary packet data after the embedded JSON, so
    /// objects starting this close to EOF are not expected. This is an
    /// approximation, not a safety bound: an object starting inside the
    /// margin is simply not found.
    pub const TAIL_MARGIN: usize = 1000;
}

/// Team mode configuration.
pub mod team {
    /// Participant count of a 15v15 random battle, excluded from team mode.
    pub const RANDOM_BATTLE_PLAYER_COUNT: usize = 30;
}

/// Placeholder text used in tables.
pub mod text {
    /// Fallback for a missing map, date, player or vehicle name.
    pub const UNKNOWN: &str = "Unknown";

    /// Cell value for a player who did not take part in a battle.
    pub const ABSENT: &str = "-";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Optional vehicle name table layered over the builtin one.
    pub vehicle_names: Option<PathBuf>,
    pub extract: ExtractConfig,
    pub team: TeamConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub tail_margin: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            tail_margin: extract::TAIL_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Battles with exactly this many participants are skipped.
    pub skip_player_count: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            skip_player_count: team::RANDOM_BATTLE_PLAYER_COUNT,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
