//! # mtreplay-core
//!
//! Core library for the replay statistics analyzer.
//!
//! This crate provides:
//! - Brace-matching extraction of the JSON documents embedded in replays
//! - Typed views over the metadata and results documents
//! - Vehicle display name resolution
//! - Team (player x battle matrix) and solo (replay owner) aggregation
//! - CSV, JSON and console export of the aggregated tables

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod replay;
pub mod vehicle;

pub use aggregate::{
    Cell, IngestOutcome, PlayerBattleRecord, ReplayAggregator, SoloAggregator, SoloRecord,
    SoloSummary, SoloTable, TeamAggregator, TeamTable,
};
pub use batch::{BatchReport, process_files};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{ExportFormat, Mode, default_file_name};
pub use extract::{Extractor, find_object_end};
pub use replay::{Battle, Metadata, Replay, Results, RosterEntry, VehicleStats};
pub use vehicle::VehicleNames;
