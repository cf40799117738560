//! Static game data primitives shared across the porygon workspace.
//!
//! This crate is the boundary to the external "dex" collaborator: it defines
//! the value types that describe species, natures, elemental types, and stat
//! tables, plus generation/format detection. It carries no battle state of
//! its own.
//!
//! # Main Types
//!
//! - [`Type`] - Elemental types (no effectiveness chart; the damage engine
//!   owns that)
//! - [`Nature`] - The 25 natures with their boosted/dropped stats
//! - [`Stat`], [`Stats`], [`StatTable`], [`PartialStats`] - Six-slot stat
//!   tables
//! - [`BoostTable`] - Stat stage modifiers (-6 to +6)
//! - [`Generation`] - Generation number with format detection and legacy
//!   rule predicates
//! - [`Dex`], [`DexTable`], [`SpeciesData`] - Species catalog trait and an
//!   in-memory implementation

use thiserror::Error;

mod generation;
mod ids;
mod natures;
mod species;
mod stats;
mod types;

pub use generation::{Format, Generation};
pub use ids::to_id;
pub use natures::Nature;
pub use species::{Dex, DexTable, SpeciesData};
pub use stats::{BoostTable, PartialStats, Stat, StatTable, Stats};
pub use types::Type;

/// Errors from format/generation detection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Format has no generation prefix: {0}")]
    MissingGeneration(String),

    #[error("Generation out of range: {0}")]
    GenerationOutOfRange(u8),

    #[error("Empty format string")]
    EmptyFormat,
}
