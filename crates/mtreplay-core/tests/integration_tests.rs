//! Integration tests for mtreplay-core
//!
//! These tests build synthetic replay buffers and run them through the
//! extractor and both aggregators.

mod common;

use common::{as_slots, buffer, metadata, noise, results, roster};
use mtreplay_core::{
    Cell, Extractor, IngestOutcome, ReplayAggregator, SoloAggregator, TeamAggregator,
    VehicleNames, process_files,
};
use serde_json::json;

/// Extractor behavior on raw buffers
mod extract_tests {
    use super::*;

    #[test]
    fn test_extract_in_either_order() {
        let players = roster(4);
        let slots = as_slots(&players);
        let meta = metadata("2025-01-01 10:00:00", "Mines", "player00", &slots);
        let res = results(&slots, 1);

        for buf in [buffer(&meta, &res), buffer(&res, &meta)] {
            let replay = Extractor::default().extract(&buf).expect("both documents");
            assert_eq!(replay.metadata.as_map(), meta.as_object().unwrap());
            assert_eq!(replay.results.as_map(), res.as_object().unwrap());
        }
    }

    #[test]
    fn test_no_brace_yields_nothing() {
        let buf = noise(8192);
        assert!(!buf.contains(&b'{'));
        assert!(Extractor::default().extract(&buf).is_none());
        assert_eq!(Extractor::default().candidates(&buf).count(), 0);
    }

    #[test]
    fn test_escaped_quote_then_brace_inside_string() {
        let players = roster(2);
        let slots = as_slots(&players);
        let mut meta = metadata("d", "m", "player00", &slots);
        meta["battleNote"] = json!("said \"}\" and left}");
        let res = results(&slots, 1);

        let replay = Extractor::default()
            .extract(&buffer(&meta, &res))
            .expect("both documents");
        assert_eq!(
            replay.metadata.as_map()["battleNote"],
            json!("said \"}\" and left}")
        );
        assert_eq!(replay.metadata.player_count(), 2);
    }

    #[test]
    fn test_first_document_of_each_shape_wins() {
        let players = roster(2);
        let slots = as_slots(&players);
        let first = metadata("first", "m", "player00", &slots);
        let second = metadata("second", "m", "player00", &slots);
        let res = results(&slots, 1);

        let mut buf = buffer(&first, &second);
        buf.extend_from_slice(res.to_string().as_bytes());
        buf.extend(noise(2048));

        let replay = Extractor::default().extract(&buf).unwrap();
        assert_eq!(replay.metadata.date_time(), "first");
    }

    #[test]
    fn test_metadata_only_is_a_failure() {
        let players = roster(2);
        let slots = as_slots(&players);
        let meta = metadata("d", "m", "player00", &slots);
        let unrelated = json!({"vehicles": {}, "common": {}});
        assert!(Extractor::default().extract(&buffer(&meta, &unrelated)).is_none());
    }
}

/// Team mode aggregation
mod team_tests {
    use super::*;

    fn extract(meta: &serde_json::Value, res: &serde_json::Value) -> mtreplay_core::Replay {
        Extractor::default().extract(&buffer(meta, res)).unwrap()
    }

    #[test]
    fn test_thirty_players_skipped() {
        let players = roster(30);
        let slots = as_slots(&players);
        let replay = extract(&metadata("d", "m", "player00", &slots), &results(&slots, 1));

        let mut agg = TeamAggregator::new(VehicleNames::builtin());
        assert_eq!(agg.ingest("random.mtreplay", &replay), IngestOutcome::Skipped);
        assert!(agg.battles().is_empty());
        assert!(agg.players().is_empty());
        assert_eq!(agg.record_count(), 0);
        assert_eq!(agg.total_wins(), 0);
    }

    #[test]
    fn test_fourteen_players_accepted() {
        let players = roster(14);
        let slots = as_slots(&players);
        let replay = extract(&metadata("d", "m", "player00", &slots), &results(&slots, 1));

        let mut agg = TeamAggregator::new(VehicleNames::builtin());
        assert_eq!(agg.ingest("abs.mtreplay", &replay), IngestOutcome::Accepted);
        assert_eq!(agg.record_count(), 14);
        assert_eq!(agg.players().len(), 14);
        assert_eq!(agg.battles()[0].player_count, 14);
        assert_eq!(agg.total_wins(), 1);

        let records = agg.battle_records("d_m").unwrap();
        assert_eq!(records["player03"].damage_dealt, 300);
        assert_eq!(records["player03"].vehicle, "T-34");
    }

    #[test]
    fn test_table_projection_is_idempotent() {
        let mut agg = TeamAggregator::new(VehicleNames::builtin());
        for (date, map) in [("2025-01-02", "Ensk"), ("2025-01-01", "Mines")] {
            let players = roster(6);
            let slots = as_slots(&players);
            agg.ingest("f", &extract(&metadata(date, map, "player01", &slots), &results(&slots, 2)));
        }

        let first = agg.table();
        let second = agg.table();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(first.headers[3], "2025-01-01 Mines");
    }

    #[test]
    fn test_same_date_and_map_merge_under_one_id() {
        let first_players = vec![
            ("alice".to_string(), "x:A".to_string(), 1, 100),
            ("bob".to_string(), "x:B".to_string(), 2, 200),
        ];
        let second_players = vec![
            ("alice".to_string(), "x:A".to_string(), 1, 300),
            ("carol".to_string(), "x:C".to_string(), 2, 400),
        ];

        let mut agg = TeamAggregator::new(VehicleNames::new());
        for players in [&first_players, &second_players] {
            let slots = as_slots(players);
            let replay = extract(
                &metadata("2025-05-05 12:00:00", "Cliff", "alice", &slots),
                &results(&slots, 1),
            );
            assert_eq!(agg.ingest("f", &replay), IngestOutcome::Accepted);
        }

        // Both battles keep their own entry but share one id and one record map
        assert_eq!(agg.battles().len(), 2);
        assert_eq!(agg.battles()[0].id, agg.battles()[1].id);
        let records = agg.battle_records("2025-05-05 12:00:00_Cliff").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records["alice"].damage_dealt, 300);

        let table = agg.table();
        assert_eq!(table.battle_count, 2);
        assert_eq!(table.headers[3], table.headers[4]);
        let bob = table.rows.iter().find(|r| r[0] == Cell::from("bob")).unwrap();
        assert_eq!(bob[3], Cell::from("B - 200"));
        assert_eq!(bob[4], Cell::from("B - 200"));
        assert_eq!(bob[2], Cell::from(1i64));
        // The merged record is summed once per column
        assert_eq!(bob[1], Cell::from(400i64));
        assert_eq!(agg.total_wins(), 2);
    }
}

/// Solo mode aggregation
mod solo_tests {
    use super::*;

    #[test]
    fn test_solo_processes_random_battles() {
        let players = roster(30);
        let slots = as_slots(&players);
        let replay = Extractor::default()
            .extract(&buffer(&metadata("d", "m", "player00", &slots), &results(&slots, 1)))
            .unwrap();

        let mut agg = SoloAggregator::new(VehicleNames::builtin());
        assert_eq!(agg.ingest("random.mtreplay", &replay), IngestOutcome::Accepted);
        let record = &agg.records()[0];
        assert_eq!(record.vehicle, "T-34");
        assert_eq!(record.accuracy, 60.0);
        assert_eq!(agg.summary().win_rate, 100.0);
    }
}

/// Batch runs over files on disk
mod batch_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_team_batch_counts() {
        let dir = tempdir().unwrap();

        let abs = roster(14);
        let abs_slots = as_slots(&abs);
        fs::write(
            dir.path().join("1.mtreplay"),
            buffer(&metadata("d1", "m", "player00", &abs_slots), &results(&abs_slots, 1)),
        )
        .unwrap();

        let random = roster(30);
        let random_slots = as_slots(&random);
        fs::write(
            dir.path().join("2.mtreplay"),
            buffer(&metadata("d2", "m", "player00", &random_slots), &results(&random_slots, 1)),
        )
        .unwrap();

        fs::write(dir.path().join("3.mtreplay"), noise(5000)).unwrap();

        let paths = [
            dir.path().join("3.mtreplay"),
            dir.path().join("2.mtreplay"),
            dir.path().join("1.mtreplay"),
        ];
        let mut agg = TeamAggregator::new(VehicleNames::builtin());
        let report = process_files(&mut agg, &Extractor::default(), &paths);

        assert_eq!(report.attempted, 3);
        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 1);
        assert!(report.succeeded());
        assert_eq!(agg.battles()[0].source_file, "1.mtreplay");
    }

    #[test]
    fn test_solo_batch_without_battles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.mtreplay");
        fs::write(&path, noise(100)).unwrap();

        let mut agg = SoloAggregator::new(VehicleNames::builtin());
        let report = process_files(&mut agg, &Extractor::default(), &[&path]);

        assert!(!report.succeeded());
        assert_eq!(agg.table().battle_count, 0);
        assert_eq!(agg.summary().total_battles, 0);
    }
}
