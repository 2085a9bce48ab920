//! Locating the embedded metadata and results JSON inside a replay.
//!
//! Replays carry no length prefix or unique delimiter for their JSON blocks,
//! so the only anchor is structural: every `{` is tried as the start of an
//! object, its balanced end is located with [`find_object_end`], and the
//! region is parsed. Failed candidates are skipped and the scan resumes at the
//! next byte, so objects nested inside a corrupt region are still tried.

mod matcher;

pub use matcher::find_object_end;

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::{ExtractConfig, extract::TAIL_MARGIN};
use crate::error::{Error, Result};
use crate::replay::{Metadata, Replay, Results};

/// Key that marks the metadata document.
pub const METADATA_KEY: &str = "clientVersionFromXml";

/// Keys that together mark the battle results document.
pub const RESULTS_KEYS: [&str; 3] = ["vehicles", "personal", "common"];

/// Semantic role of a parsed JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub metadata: bool,
    pub results: bool,
}

impl Classification {
    pub fn of(object: &Map<String, Value>) -> Self {
        Self {
            metadata: object.contains_key(METADATA_KEY),
            results: RESULTS_KEYS.iter().all(|key| object.contains_key(*key)),
        }
    }
}

/// Lazy sequence of JSON objects found in a buffer, with their start offsets.
pub struct Candidates<'a> {
    buffer: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Candidates<'a> {
    fn new(buffer: &'a [u8], tail_margin: usize) -> Self {
        Self {
            buffer,
            pos: 0,
            end: buffer.len().saturating_sub(tail_margin),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = (usize, Map<String, Value>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.end {
            let start = match self.buffer[self.pos..self.end]
                .iter()
                .position(|&b| b == b'{')
            {
                Some(relative) => self.pos + relative,
                None => {
                    self.pos = self.end;
                    return None;
                }
            };
            self.pos = start + 1;

            let Some(close) = find_object_end(self.buffer, start) else {
                continue;
            };

            let text = String::from_utf8_lossy(&self.buffer[start..=close]);
            match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(object)) => return Some((start, object)),
                Ok(_) => {}
                Err(e) => trace!("Candidate at {:#x} is not JSON: {}", start, e),
            }
        }
        None
    }
}

/// Brace-matching extractor for replay buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    tail_margin: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(TAIL_MARGIN)
    }
}

impl Extractor {
    pub fn new(tail_margin: usize) -> Self {
        Self { tail_margin }
    }

    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(config.tail_margin)
    }

    pub fn tail_margin(&self) -> usize {
        self.tail_margin
    }

    /// Iterate over every parseable JSON object in `buffer`.
    pub fn candidates<'a>(&self, buffer: &'a [u8]) -> Candidates<'a> {
        Candidates::new(buffer, self.tail_margin)
    }

    /// Extract the metadata and results documents from a replay buffer.
    ///
    /// The first object of each shape wins. Returns `None` unless both were
    /// found.
    pub fn extract(&self, buffer: &[u8]) -> Option<Replay> {
        let mut metadata: Option<Map<String, Value>> = None;
        let mut results: Option<Map<String, Value>> = None;

        for (offset, object) in self.candidates(buffer) {
            let class = Classification::of(&object);
            match (class.metadata && metadata.is_none(), class.results && results.is_none()) {
                (true, true) => {
                    debug!("Metadata and results object at {:#x}", offset);
                    results = Some(object.clone());
                    metadata = Some(object);
                }
                (true, false) => {
                    debug!("Metadata object at {:#x}", offset);
                    metadata = Some(object);
                }
                (false, true) => {
                    debug!("Results object at {:#x}", offset);
                    results = Some(object);
                }
                (false, false) => {}
            }

            if metadata.is_some() && results.is_some() {
                break;
            }
        }

        Some(Replay::new(Metadata::new(metadata?), Results::new(results?)))
    }

    /// Read a replay file fully and extract its documents.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Replay> {
        let path = path.as_ref();
        let buffer = fs::read(path).map_err(|source| Error::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract(&buffer).ok_or_else(|| Error::ExtractionFailure {
            path: path.to_path_buf(),
        })
    }
}
