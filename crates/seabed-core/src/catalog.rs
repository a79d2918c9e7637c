//! Immutable creature catalog, read once at match start.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::{CreatureColor, Species};
use crate::error::Result;
use crate::records::CatalogRecord;
use crate::types::CreatureId;

/// Identity of one creature for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureEntry {
    pub id: CreatureId,
    pub color: CreatureColor,
    pub species: Species,
}

/// Every creature of the match, split into scannable and hostile ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureCatalog {
    creatures: BTreeMap<CreatureId, CreatureEntry>,
    hostiles: BTreeSet<CreatureId>,
}

impl CreatureCatalog {
    /// Build the catalog from raw protocol records, decoding color and
    /// species codes.
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Result<Self> {
        let mut catalog = Self::default();
        for record in records {
            let entry = CreatureEntry {
                id: record.id,
                color: CreatureColor::try_from(record.color_code)?,
                species: Species::try_from(record.species_code)?,
            };
            catalog.insert(entry);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, entry: CreatureEntry) {
        if entry.species.is_hostile() {
            self.hostiles.insert(entry.id);
        } else {
            self.hostiles.remove(&entry.id);
        }
        self.creatures.insert(entry.id, entry);
    }

    pub fn get(&self, id: CreatureId) -> Option<&CreatureEntry> {
        self.creatures.get(&id)
    }

    pub fn is_hostile(&self, id: CreatureId) -> bool {
        self.hostiles.contains(&id)
    }

    /// Known to the catalog and not hostile.
    pub fn is_scannable(&self, id: CreatureId) -> bool {
        self.creatures.contains_key(&id) && !self.is_hostile(id)
    }

    pub fn hostile_ids(&self) -> &BTreeSet<CreatureId> {
        &self.hostiles
    }

    pub fn scannable_ids(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.creatures
            .keys()
            .copied()
            .filter(move |id| !self.hostiles.contains(id))
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}
