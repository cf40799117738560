//! Matchup input preparation for the external damage engine.
//!
//! [`build_matchup`] translates tracked, override-aware battle state into
//! the engine's strict input schema, applying the generation/ability/forme
//! special-case rules in a fixed order along the way.

mod adapter;
mod engine;
mod rules;

pub use adapter::{build_calc_mon, build_matchup};
pub use engine::{CalcField, CalcMatchup, CalcMon, CalcSide};
pub use rules::PLACEHOLDER_ABILITY;
