//! Tracked Pokemon state with override layering

use std::collections::HashSet;

use porygon_data::{BoostTable, Generation, Nature, PartialStats, StatTable, Stats, Type, to_id};

use super::overrides::{BoostOverrides, Override};
use super::status::{Status, StatusOverride, Volatile};

/// HP knowledge for one combatant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpState {
    /// Reported current HP (exact when `server_sourced`, else percentage)
    pub current: u32,

    /// Reported maximum HP, when known
    pub max: Option<u32>,

    /// Estimated HP fraction in 0.0..=1.0
    pub fraction: f64,

    /// Whether current/max are exact server-reported values
    pub server_sourced: bool,
}

impl Default for HpState {
    fn default() -> Self {
        Self {
            current: 100,
            max: None,
            fraction: 1.0,
            server_sourced: false,
        }
    }
}

/// One battle participant: server-observed base state plus user overrides.
///
/// The base layer is written only by reconciliation; the `dirty_*` override
/// layer is written only by explicit user edits. Every consumer resolves
/// through the `resolved_*` accessors, which prefer a set override over the
/// base value and fall back to generation defaults where one exists.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedPokemon {
    // === Identity ===
    /// Protocol identifier ("p1: Sparky")
    pub ident: String,

    /// Nickname (if different from species)
    pub name: Option<String>,

    /// Species forme name
    pub species_forme: String,

    /// Forme currently transformed into, if any
    pub transformed_forme: Option<String>,

    /// Level (1-100)
    pub level: u8,

    /// Gender ('M', 'F', or None)
    pub gender: Option<char>,

    /// Whether the Pokemon is shiny
    pub shiny: bool,

    /// Tera type, when known
    pub tera_type: Option<Type>,

    /// Whether currently terastallized
    pub terastallized: bool,

    // === Base layer (server-observed / preset-applied) ===
    /// Current ability
    pub ability: Option<String>,

    /// Original ability before replacement effects
    pub base_ability: Option<String>,

    /// Held item
    pub item: Option<String>,

    /// Item held before it was consumed/removed
    pub prev_item: Option<String>,

    /// Whether the held item has been consumed or knocked off
    pub item_consumed: bool,

    /// Nature
    pub nature: Option<Nature>,

    /// Status condition
    pub status: Option<Status>,

    /// Stat stage modifiers
    pub boosts: BoostTable,

    /// Individual values (absent slots use generation defaults)
    pub ivs: PartialStats,

    /// Effort values (absent slots use generation defaults)
    pub evs: PartialStats,

    /// Species base stat line
    pub base_stats: StatTable,

    /// Base stats of the transformed-into forme, when transformed
    pub transformed_base_stats: Option<StatTable>,

    /// Server-computed stat line (own side only)
    pub server_stats: Option<StatTable>,

    /// Fixed maximum HP overriding the formula, from species data
    pub max_hp_override: Option<u16>,

    /// Species types
    pub types: Option<(Type, Option<Type>)>,

    /// Current move set (from server team info or an applied preset)
    pub moves: Vec<String>,

    // === Override layer (user edits only) ===
    pub dirty_ability: Override<String>,
    pub dirty_item: Override<String>,
    pub dirty_nature: Override<Nature>,
    pub dirty_status: Override<StatusOverride>,
    pub dirty_boosts: BoostOverrides,
    pub dirty_base_stats: Stats<Override<u16>>,
    pub dirty_types: Override<(Type, Option<Type>)>,
    pub dirty_tera_type: Override<Type>,
    pub dirty_hp: Override<u32>,
    pub dirty_faint_counter: Override<u8>,

    // === Volatile and revealed state ===
    /// Active volatile conditions
    pub volatiles: HashSet<Volatile>,

    /// Moves revealed across the battle (monotonic)
    pub revealed_moves: Vec<String>,

    /// Learnset-derived alternative moves (monotonic)
    pub alt_moves: Vec<String>,

    /// Formes this Pokemon has been seen in (monotonic)
    pub revealed_formes: Vec<String>,

    // === Condition ===
    /// HP knowledge
    pub hp: HpState,

    /// Whether this Pokemon has fainted
    pub fainted: bool,

    /// Whether this Pokemon is currently active on the field
    pub active: bool,

    /// Manual on/off state for conditionally-active abilities
    pub ability_toggled: bool,
}

impl TrackedPokemon {
    /// Create a new tracked Pokemon
    pub fn new(species_forme: impl Into<String>, level: u8) -> Self {
        let species_forme = species_forme.into();
        Self {
            species_forme: species_forme.clone(),
            level,
            revealed_formes: vec![species_forme],
            hp: HpState::default(),
            ..Default::default()
        }
    }

    /// Display name (nickname or species forme)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.species_forme)
    }

    /// Whether this Pokemon has a usable species identity
    pub fn has_identity(&self) -> bool {
        !self.species_forme.is_empty()
    }

    /// The forme whose stats currently apply
    pub fn current_forme(&self) -> &str {
        self.transformed_forme.as_deref().unwrap_or(&self.species_forme)
    }

    // === Resolution accessors ===

    /// Resolved ability name
    pub fn resolved_ability(&self) -> Option<&str> {
        self.dirty_ability
            .resolve(self.ability.as_ref())
            .map(String::as_str)
    }

    /// Resolved ability as a normalized id
    pub fn resolved_ability_id(&self) -> Option<String> {
        self.resolved_ability().map(to_id)
    }

    /// Resolved held item name
    pub fn resolved_item(&self) -> Option<&str> {
        self.dirty_item
            .resolve(self.item.as_ref())
            .map(String::as_str)
    }

    /// Resolved nature
    pub fn resolved_nature(&self) -> Option<Nature> {
        self.dirty_nature.resolve_copied(self.nature)
    }

    /// Resolved status condition; a `Healthy` override maps to none
    pub fn resolved_status(&self) -> Option<Status> {
        match &self.dirty_status {
            Override::Set(value) => value.as_status(),
            Override::Unset | Override::Cleared => self.status,
        }
    }

    /// Resolved stat stages
    pub fn resolved_boosts(&self) -> BoostTable {
        self.dirty_boosts.resolve(&self.boosts)
    }

    /// Resolved base stat line.
    ///
    /// When transformed, the transformed forme's stats apply except HP,
    /// which always comes from the original forme (transformation does not
    /// change maximum HP). User overrides win on top.
    pub fn resolved_base_stats(&self) -> StatTable {
        let mut stats = match self.transformed_base_stats {
            Some(transformed) => {
                let mut merged = transformed;
                merged.hp = self.base_stats.hp;
                merged
            }
            None => self.base_stats,
        };
        for (stat, over) in self.dirty_base_stats.iter() {
            if let Some(value) = over.resolve_copied(None) {
                stats.set(stat, value);
            }
        }
        stats
    }

    /// Resolved types, when known
    pub fn resolved_types(&self) -> Option<(Type, Option<Type>)> {
        self.dirty_types.resolve_copied(self.types)
    }

    /// Resolved tera type
    pub fn resolved_tera_type(&self) -> Option<Type> {
        self.dirty_tera_type.resolve_copied(self.tera_type)
    }

    /// Resolved individual values with generation defaults filled
    pub fn resolved_ivs(&self, generation: Generation) -> StatTable {
        self.ivs.or_default(generation.default_iv())
    }

    /// Resolved effort values with generation defaults filled
    pub fn resolved_evs(&self, generation: Generation) -> StatTable {
        self.evs.or_default(generation.default_ev())
    }

    /// Resolved fainted-teammate counter, given the side's observed count
    pub fn resolved_faint_counter(&self, side_count: u8) -> u8 {
        self.dirty_faint_counter
            .resolve_copied(Some(side_count))
            .unwrap_or(side_count)
    }

    /// The full resolved move set: current moves plus everything revealed,
    /// deduplicated by id
    pub fn resolved_moves(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut moves = Vec::new();
        for name in self.moves.iter().chain(self.revealed_moves.iter()) {
            if seen.insert(to_id(name)) {
                moves.push(name.clone());
            }
        }
        moves
    }

    /// Check whether a move is in the resolved move set (id-normalized)
    pub fn knows_move(&self, name: &str) -> bool {
        let id = to_id(name);
        self.moves
            .iter()
            .chain(self.revealed_moves.iter())
            .any(|m| to_id(m) == id)
    }

    // === Volatile helpers ===

    /// Check for a volatile condition
    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatiles.contains(v)
    }

    /// Add a volatile condition
    pub fn add_volatile(&mut self, v: Volatile) {
        self.volatiles.insert(v);
    }

    /// Remove a volatile condition
    pub fn remove_volatile(&mut self, v: &Volatile) -> bool {
        self.volatiles.remove(v)
    }

    // === Reveal helpers (monotonic) ===

    /// Record a revealed move (deduplicated by id)
    pub fn record_move(&mut self, name: &str) {
        let id = to_id(name);
        if !self.revealed_moves.iter().any(|m| to_id(m) == id) {
            self.revealed_moves.push(name.to_string());
        }
    }

    /// Record a forme this Pokemon has been seen in
    pub fn record_forme(&mut self, forme: &str) {
        let id = to_id(forme);
        if !self.revealed_formes.iter().any(|f| to_id(f) == id) {
            self.revealed_formes.push(forme.to_string());
        }
    }

    /// Check if Pokemon is alive
    pub fn is_alive(&self) -> bool {
        !self.fainted
    }
}
