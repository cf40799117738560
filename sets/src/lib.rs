//! Preset set records and JSON import/export.
//!
//! A [`Preset`] is an immutable named configuration a combatant may or may
//! not currently match: ability, item, nature, a move set, and IV/EV
//! spreads. Presets are produced by external repositories (usage stats,
//! analysis sites, team storage) and are read-only downstream; this crate
//! defines the record shape and its serialized form.

use anyhow::Result;
use porygon_data::{Nature, PartialStats, Type, to_id};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from preset import/export
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Invalid preset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Preset has no species: {0}")]
    MissingSpecies(String),
}

/// Where a preset came from.
///
/// A preset with no identifiable source is never considered applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetSource {
    /// Analysis-site set
    Smogon,
    /// Usage-statistics set
    Usage,
    /// User's local team storage
    Storage,
    /// Server-provided set (open team sheets)
    Server,
    /// Pasted/imported set
    Import,
    /// Hand-built by the user
    User,
}

/// An immutable named set configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Set name (e.g. "Choice Band", "Bulky Pivot")
    pub name: String,

    /// Origin of this set
    #[serde(default)]
    pub source: Option<PresetSource>,

    /// Species forme this set is for
    pub species_forme: String,

    /// Level, when the set pins one
    #[serde(default)]
    pub level: Option<u8>,

    /// Ability name
    #[serde(default)]
    pub ability: Option<String>,

    /// Held item name
    #[serde(default)]
    pub item: Option<String>,

    /// Nature
    #[serde(default)]
    pub nature: Option<Nature>,

    /// Moves this set runs (order-insensitive)
    #[serde(default)]
    pub moves: Vec<String>,

    /// Individual values; absent slots fall back to generation defaults
    #[serde(default)]
    pub ivs: Option<PartialStats>,

    /// Effort values; absent slots fall back to generation defaults
    #[serde(default)]
    pub evs: Option<PartialStats>,

    /// Tera type, when the set pins one
    #[serde(default)]
    pub tera_type: Option<Type>,
}

impl Preset {
    /// Check whether a move is part of this set (id-normalized)
    pub fn has_move(&self, name: &str) -> bool {
        let id = to_id(name);
        self.moves.iter().any(|m| to_id(m) == id)
    }
}

/// Import a list of presets from a JSON document.
///
/// The whole document is rejected if any record is malformed or names no
/// species; partial imports would silently drop sets.
pub fn import_presets(json: &str) -> Result<Vec<Preset>> {
    let presets: Vec<Preset> = serde_json::from_str(json).map_err(PresetError::InvalidJson)?;
    for preset in &presets {
        if preset.species_forme.is_empty() {
            return Err(PresetError::MissingSpecies(preset.name.clone()).into());
        }
    }
    Ok(presets)
}

/// Export presets to a JSON document
pub fn export_presets(presets: &[Preset]) -> Result<String, PresetError> {
    Ok(serde_json::to_string_pretty(presets)?)
}
