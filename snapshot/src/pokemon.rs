//! Per-Pokemon snapshot types

use porygon_data::{BoostTable, StatTable};
use serde::Deserialize;

/// HP information at a sync point.
///
/// For the authenticated player's own side the server reports exact values
/// (`server_sourced`); for opponents `current` is a 0-100 percentage
/// estimate and `max` is unknown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpSnapshot {
    /// Current HP (exact value or percentage, see `server_sourced`)
    pub current: u32,

    /// Maximum HP when known
    #[serde(default)]
    pub max: Option<u32>,

    /// Whether current/max are exact server-reported values
    #[serde(default)]
    pub server_sourced: bool,
}

impl HpSnapshot {
    /// Estimated HP fraction in 0.0..=1.0
    pub fn fraction(&self) -> f64 {
        match self.max {
            Some(0) | None => (self.current.min(100)) as f64 / 100.0,
            Some(max) => self.current as f64 / max as f64,
        }
    }
}

/// One combatant as reported at a sync point.
///
/// Every field beyond identity is optional or defaulted; the reconciler
/// treats absence as "nothing new revealed".
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSnapshot {
    /// Identifier as used in protocol messages (e.g. "p1: Sparky")
    #[serde(default)]
    pub ident: String,

    /// Nickname (if different from species)
    #[serde(default)]
    pub name: Option<String>,

    /// Species forme name (e.g. "Pikachu", "Landorus-Therian")
    pub species_forme: String,

    /// Level (1-100)
    #[serde(default = "default_level")]
    pub level: u8,

    /// Gender ('M', 'F', or None)
    #[serde(default)]
    pub gender: Option<char>,

    /// Whether the Pokemon is shiny
    #[serde(default)]
    pub shiny: bool,

    /// HP information, when reported
    #[serde(default)]
    pub hp: Option<HpSnapshot>,

    /// Status condition as a protocol string ("brn", "par", ...)
    #[serde(default)]
    pub status: Option<String>,

    /// Whether this Pokemon has fainted
    #[serde(default)]
    pub fainted: bool,

    /// Whether this Pokemon is currently active on the field
    #[serde(default)]
    pub active: bool,

    /// Server-computed stat line (own side only)
    #[serde(default)]
    pub stats: Option<StatTable>,

    /// Moves revealed so far
    #[serde(default)]
    pub moves: Vec<String>,

    /// Learnset-derived alternative moves this Pokemon could carry
    #[serde(default)]
    pub alt_moves: Vec<String>,

    /// Currently reported ability
    #[serde(default)]
    pub ability: Option<String>,

    /// Original ability before replacement effects
    #[serde(default)]
    pub base_ability: Option<String>,

    /// Currently held item
    #[serde(default)]
    pub item: Option<String>,

    /// Item held before it was consumed/removed
    #[serde(default)]
    pub prev_item: Option<String>,

    /// Whether the held item has been consumed or knocked off
    #[serde(default)]
    pub item_consumed: bool,

    /// Current stat stage modifiers
    #[serde(default)]
    pub boosts: Option<BoostTable>,

    /// Active volatile conditions as protocol strings.
    /// `None` means the snapshot carries no volatile information; `Some`
    /// is the authoritative current set (possibly empty).
    #[serde(default)]
    pub volatiles: Option<Vec<String>>,

    /// Species this Pokemon has transformed into
    #[serde(default)]
    pub transformed_forme: Option<String>,

    /// Tera type, when known
    #[serde(default)]
    pub tera_type: Option<String>,

    /// Whether currently terastallized
    #[serde(default)]
    pub terastallized: bool,
}

fn default_level() -> u8 {
    100
}

impl PokemonSnapshot {
    /// Display name (nickname if set, otherwise species forme)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.species_forme)
    }
}
