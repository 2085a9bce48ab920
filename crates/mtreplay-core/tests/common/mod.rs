//! Synthetic replay buffers for integration tests.

#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// One roster entry: (player, vehicleType, team, damage).
pub type Slot<'a> = (&'a str, &'a str, i64, i64);

pub fn metadata(date: &str, map: &str, owner: &str, roster: &[Slot]) -> Value {
    let mut vehicles = Map::new();
    for (i, (name, vehicle, team, _)) in roster.iter().enumerate() {
        vehicles.insert(
            slot_id(i),
            json!({"name": name, "vehicleType": vehicle, "team": team}),
        );
    }
    json!({
        "clientVersionFromXml": "1.30.0",
        "mapDisplayName": map,
        "dateTime": date,
        "playerName": owner,
        "vehicles": vehicles,
    })
}

pub fn results(roster: &[Slot], winner: i64) -> Value {
    let mut vehicles = Map::new();
    for (i, (_, _, _, damage)) in roster.iter().enumerate() {
        vehicles.insert(slot_id(i), json!([{"damageDealt": damage, "shots": 5, "directHits": 3}]));
    }
    json!({
        "vehicles": vehicles,
        "personal": {"avatar": {}},
        "common": {"winnerTeam": winner},
    })
}

fn slot_id(index: usize) -> String {
    (40_000 + index).to_string()
}

/// Binary noise that contains no brace bytes.
pub fn noise(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| match (i * 31 % 251) as u8 {
            b'{' | b'}' => 0,
            b => b,
        })
        .collect()
}

/// Build a replay buffer: noise, first document, noise, second document, tail.
pub fn buffer(first: &Value, second: &Value) -> Vec<u8> {
    let mut out = noise(64);
    out.extend_from_slice(first.to_string().as_bytes());
    out.extend(noise(37));
    out.extend_from_slice(second.to_string().as_bytes());
    out.extend(noise(2048));
    out
}

/// Roster of `count` players split over two teams, player 0 on team 1.
pub fn roster(count: usize) -> Vec<(String, String, i64, i64)> {
    (0..count)
        .map(|i| {
            (
                format!("player{:02}", i),
                "ussr:R04_T-34".to_string(),
                if i % 2 == 0 { 1 } else { 2 },
                100 * i as i64,
            )
        })
        .collect()
}

pub fn as_slots(roster: &[(String, String, i64, i64)]) -> Vec<Slot<'_>> {
    roster
        .iter()
        .map(|(n, v, t, d)| (n.as_str(), v.as_str(), *t, *d))
        .collect()
}
