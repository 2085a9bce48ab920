//! Vehicle identifier to display name resolution.
//!
//! Replays identify vehicles as `nation:Internal_Name`. The table maps the
//! internal name to the in-game name; unknown names fall back to the internal
//! name with underscores turned into spaces.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::Result;

/// Bundled display names, keyed by identifier without the nation prefix.
static BUILTIN_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // USSR
        ("R04_T-34", "T-34"),
        ("R07_T-34-85", "T-34-85"),
        ("R19_IS-3", "IS-3"),
        ("R39_IS-3", "IS-3"),
        ("R90_IS-4M", "IS-4"),
        ("R110_Object_260", "Object 260"),
        ("R97_Object_140", "Object 140"),
        ("R148_Object_430_U", "Object 430U"),
        ("R45_IS-7", "IS-7"),
        ("R40_T-54", "T-54"),
        ("R95_Object_907", "Object 907"),
        // Germany
        ("G04_PzVI_Tiger_I", "Tiger I"),
        ("G16_PzVIB_Tiger_II", "Tiger II"),
        ("G03_PzV_Panther", "Panther"),
        ("G42_Maus", "Maus"),
        ("G56_E-100", "E 100"),
        ("G89_Leopard1", "Leopard 1"),
        ("G72_JagdPz_E100", "Jagdpanzer E 100"),
        // USA
        ("A12_T32", "T32"),
        ("A35_Pershing", "M26 Pershing"),
        ("A120_M48A5", "M48 Patton"),
        ("A58_T67", "T67"),
        // UK
        ("GB23_Centurion", "Centurion Mk. I"),
        ("GB70_FV4202_105", "FV4202"),
        ("GB91_Super_Conqueror", "Super Conqueror"),
        // France
        ("F10_AMX_50B", "AMX 50 B"),
        ("F18_Bat_Chatillon25t", "Bat.-Châtillon 25 t"),
    ])
});

/// Read-only vehicle name table, injected into the aggregators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleNames {
    names: HashMap<String, String>,
    version: String,
}

impl VehicleNames {
    /// Create an empty table (every lookup uses the fallback rule).
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the bundled display names.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(&id, &name)| (id.to_string(), name.to_string()))
                .collect(),
            version: "builtin".to_string(),
        }
    }

    /// Load a name table from a file.
    ///
    /// File format:
    /// - First line: version
    /// - Other lines: identifier\tdisplay name
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines();
        let version = lines.next().map(str::trim).unwrap_or_default().to_string();

        let names = lines
            .filter_map(|line| line.split_once('\t'))
            .map(|(id, name)| (id.trim().to_string(), name.trim().to_string()))
            .filter(|(id, _)| !id.is_empty())
            .collect();

        Self { names, version }
    }

    /// Layer `other` on top of this table; its entries win.
    pub fn extend(&mut self, other: VehicleNames) {
        debug!(
            "Merging {} vehicle names (version {:?})",
            other.len(),
            other.version
        );
        self.names.extend(other.names);
        self.version = other.version;
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name for a raw `vehicleType` value.
    ///
    /// Everything up to and including the first `:` is dropped before the
    /// lookup. On a miss the remainder is returned with `_` replaced by spaces.
    pub fn resolve(&self, raw: &str) -> String {
        let id = raw.split_once(':').map_or(raw, |(_, rest)| rest);
        match self.get(id) {
            Some(name) => name.to_string(),
            None => id.replace('_', " ").trim().to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
