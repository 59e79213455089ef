use serde::{Deserialize, Serialize};

use crate::domain::character::CharacterRecord;

/// The per-movie aggregate kept in the local cache.
///
/// `raw_character_refs` is the full ordered reference list captured when the
/// movie resource was first fetched; it is never shrunk, so the original
/// reference order survives failures. `characters` holds only complete
/// records - partially-resolved characters live in the orchestrator's
/// transient roster and never reach the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieAggregate {
    /// Numeric id derived from the trailing segment of the resource address
    pub id: u32,

    /// Movie title
    pub title: String,

    /// Absolute resource address
    pub url: String,

    /// Ordered character references, as served by the origin API
    pub raw_character_refs: Vec<String>,

    /// Fully-resolved character records, at most one per address
    pub characters: Vec<CharacterRecord>,

    /// Addresses of the characters the user marked, in selection order
    pub selected_characters: Vec<String>,
}

impl MovieAggregate {
    pub fn new(id: u32, title: String, url: String, raw_character_refs: Vec<String>) -> Self {
        Self {
            id,
            title,
            url,
            raw_character_refs,
            characters: Vec::new(),
            selected_characters: Vec::new(),
        }
    }

    /// A cached aggregate with resolved characters is a finished dossier
    pub fn has_resolved_dossier(&self) -> bool {
        !self.characters.is_empty()
    }

    pub fn character(&self, url: &str) -> Option<&CharacterRecord> {
        self.characters.iter().find(|c| c.url == url)
    }

    /// Replace-or-append a character record, keyed by its address.
    /// The existing entry is removed first so the aggregate never holds two
    /// records for the same character.
    pub fn upsert_character(&mut self, record: CharacterRecord) {
        self.characters.retain(|c| c.url != record.url);
        self.characters.push(record);
    }

    /// Mark a character as selected, preserving first-selection order
    pub fn mark_selected(&mut self, url: &str) {
        if !self.selected_characters.iter().any(|s| s == url) {
            self.selected_characters.push(url.to_string());
        }
    }
}
