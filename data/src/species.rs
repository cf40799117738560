//! Species catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::to_id;
use crate::stats::StatTable;
use crate::types::Type;

/// Static data for one species forme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesData {
    /// Forme name (e.g. "Pikachu", "Landorus-Therian")
    pub name: String,

    /// Primary and optional secondary type
    pub types: (Type, Option<Type>),

    /// Base stat line
    pub base_stats: StatTable,

    /// Base species when this is an alternate forme
    #[serde(default)]
    pub base_species: Option<String>,

    /// Fixed maximum HP overriding the formula (Shedinja)
    #[serde(default)]
    pub max_hp: Option<u16>,
}

/// Species lookup boundary.
///
/// The catalog itself is owned by an external collaborator; consumers in
/// this workspace only read through this trait.
pub trait Dex {
    /// Look up a species forme by display name or id
    fn species(&self, name: &str) -> Option<&SpeciesData>;
}

/// In-memory [`Dex`] backed by a name-normalized map
#[derive(Debug, Clone, Default)]
pub struct DexTable {
    species: HashMap<String, SpeciesData>,
}

impl DexTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a species, keyed by its normalized name
    pub fn insert(&mut self, data: SpeciesData) {
        self.species.insert(to_id(&data.name), data);
    }

    /// Number of species in the table
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl Dex for DexTable {
    fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.species.get(&to_id(name))
    }
}
