//! Extract command: dump the JSON documents found in one replay.

use std::path::Path;

use anyhow::Result;
use mtreplay_core::Extractor;
use serde_json::json;

pub fn run(file: &Path, extractor: &Extractor) -> Result<()> {
    let replay = extractor.extract_file(file)?;

    eprintln!(
        "Map: {} | Date: {} | Player: {} | Participants: {}",
        replay.metadata.map_name(),
        replay.metadata.date_time(),
        replay.metadata.player_name(),
        replay.metadata.player_count()
    );

    let documents = json!({
        "metadata": replay.metadata.as_map(),
        "results": replay.results.as_map(),
    });
    println!("{}", serde_json::to_string_pretty(&documents)?);
    Ok(())
}
