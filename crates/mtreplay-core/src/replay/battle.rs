use serde::Serialize;

use super::Metadata;

/// One processed battle.
///
/// The id is `"{date}_{map}"`, so two battles on the same map in the same
/// second share an id and their player records merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Battle {
    pub id: String,
    pub date: String,
    pub map: String,
    pub source_file: String,
    pub player_count: usize,
}

impl Battle {
    pub fn from_metadata(metadata: &Metadata, source_file: &str) -> Self {
        let date = metadata.date_time().to_string();
        let map = metadata.map_name().to_string();
        Self {
            id: format!("{}_{}", date, map),
            date,
            map,
            source_file: source_file.to_string(),
            player_count: metadata.player_count(),
        }
    }

    pub fn column_label(&self) -> String {
        column_label(&self.date, &self.map)
    }
}

/// Table label for a battle: the first 16 characters of the date, then the map.
pub fn column_label(date: &str, map: &str) -> String {
    let date: String = date.chars().take(16).collect();
    format!("{} {}", date, map)
}
