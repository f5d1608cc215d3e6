//! In-memory loot storage.

use std::path::PathBuf;

use crate::error::Error;
use crate::store::LootStore;

/// One stored artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootEntry {
    pub ltype: String,
    pub data: String,
    pub filename: String,
    pub info: String,
}

/// Keeps artifacts in memory.
///
/// Used by tests and by embedders that want to inspect gathered data
/// before deciding where it goes.
pub struct MemoryLootStore {
    entries: Vec<LootEntry>,
}

impl MemoryLootStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }
}

impl Default for MemoryLootStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LootStore for MemoryLootStore {
    fn store(
        &mut self,
        ltype: &str,
        data: &str,
        filename: &str,
        info: &str,
    ) -> Result<PathBuf, Error> {
        self.entries.push(LootEntry {
            ltype: ltype.to_string(),
            data: data.to_string(),
            filename: filename.to_string(),
            info: info.to_string(),
        });
        Ok(PathBuf::from(filename))
    }
}
