//! Damage-engine input schema.
//!
//! These records mirror, field for field, the constructor inputs of the
//! external damage-calculation engine. The engine is fixed and not
//! modifiable from here; schema compatibility is the whole contract.

use std::collections::{HashMap, HashSet};

use porygon_data::{BoostTable, Generation, Nature, StatTable, Type, to_id};
use porygon_snapshot::GameType;

use crate::types::Status;

/// One combatant as the engine consumes it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcMon {
    /// Forme name whose stats apply
    pub name: String,

    /// Level (1-100)
    pub level: u8,

    /// Gender ('M', 'F', or None)
    pub gender: Option<char>,

    /// Current HP
    pub hp: u32,

    /// Maximum HP
    pub max_hp: u32,

    /// Ability, after neutralization rules
    pub ability: Option<String>,

    /// Manual on/off state for conditionally-active abilities, reported
    /// separately so engine-side conditional logic can react
    pub ability_on: Option<bool>,

    /// Held item
    pub item: Option<String>,

    /// Nature (absent in generations without natures)
    pub nature: Option<Nature>,

    /// Individual values
    pub ivs: StatTable,

    /// Effort values
    pub evs: StatTable,

    /// Base stat line
    pub base_stats: StatTable,

    /// Stat stages
    pub boosts: BoostTable,

    /// Status condition
    pub status: Option<Status>,

    /// Type override; `None` lets the engine derive types from the species
    pub types: Option<(Type, Option<Type>)>,

    /// Tera type, when known
    pub tera_type: Option<Type>,

    /// Whether currently terastallized
    pub terastallized: bool,

    /// Volatile conditions, by normalized id
    pub conditions: HashSet<String>,
}

impl CalcMon {
    /// Check the ability against a set of names (id-normalized)
    pub fn has_ability<'a, I: IntoIterator<Item = &'a str>>(&self, names: I) -> bool {
        match &self.ability {
            Some(ability) => {
                let id = to_id(ability);
                names.into_iter().any(|name| to_id(name) == id)
            }
            None => false,
        }
    }

    /// Check for a volatile condition by id
    pub fn has_condition(&self, id: &str) -> bool {
        self.conditions.contains(id)
    }
}

/// One side of the field as the engine consumes it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcSide {
    /// Side conditions, by normalized id, with layer counts
    pub conditions: HashMap<String, u8>,

    /// Fainted teammates on this side
    pub fainted_count: u8,
}

impl CalcSide {
    /// Check for a side condition by id
    pub fn has_condition(&self, id: &str) -> bool {
        self.conditions.contains_key(id)
    }
}

/// The field as the engine consumes it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcField {
    /// Game type
    pub game_type: Option<GameType>,

    /// Weather display name
    pub weather: Option<String>,

    /// Terrain display name
    pub terrain: Option<String>,

    /// Attacker's side conditions
    pub attacker_side: CalcSide,

    /// Defender's side conditions
    pub defender_side: CalcSide,
}

/// A complete matchup input for one hypothetical move evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct CalcMatchup {
    /// Generation the engine should evaluate under
    pub generation: Generation,

    /// Attacking combatant
    pub attacker: CalcMon,

    /// Defending combatant
    pub defender: CalcMon,

    /// Field state
    pub field: CalcField,
}
