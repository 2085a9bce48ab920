use serde::Serialize;
use serde_json::Value;

/// Combat stats from the first results snapshot of one vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VehicleStats {
    pub damage_dealt: i64,
    pub kills: i64,
    pub spotted: i64,
    pub shots: i64,
    pub direct_hits: i64,
    pub piercings: i64,
    pub xp: i64,
    pub damage_blocked_by_armor: i64,
    pub damage_received: i64,
}

impl VehicleStats {
    /// Read stats from a snapshot object. Missing or non-numeric fields are 0.
    pub fn from_value(snapshot: &Value) -> Self {
        let field = |key: &str| -> i64 {
            match snapshot.get(key) {
                Some(value) => value
                    .as_i64()
                    .or_else(|| value.as_f64().map(|v| v as i64))
                    .unwrap_or(0),
                None => 0,
            }
        };

        Self {
            damage_dealt: field("damageDealt"),
            kills: field("kills"),
            spotted: field("spotted"),
            shots: field("shots"),
            direct_hits: field("directHits"),
            piercings: field("piercings"),
            xp: field("xp"),
            damage_blocked_by_armor: field("damageBlockedByArmor"),
            damage_received: field("damageReceived"),
        }
    }

    /// Hit percentage of shots fired; 0 when nothing was fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots > 0 {
            self.direct_hits as f64 / self.shots as f64 * 100.0
        } else {
            0.0
        }
    }
}
