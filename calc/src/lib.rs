//! Override-aware battle state tracking and damage-calc input preparation.
//!
//! This crate sits between the snapshot layer (what the server has shown)
//! and an external damage-calculation engine (what a hypothetical move
//! would do):
//!
//! ```text
//! porygon-snapshot (protocol handoff)     porygon-sets (preset records)
//!        │                                       │
//!        ▼                                       ▼
//! porygon-calc (override model + sync + matching + matchup) ← THIS CRATE
//!        │
//!        └─> external damage engine (CalcMatchup input schema)
//! ```
//!
//! # Main Types
//!
//! ## Override Model
//! - [`TrackedPokemon`] - Per-combatant record with base/override layering
//! - [`Override`] - Tagged per-field override state (unset/set/cleared)
//! - [`TrackedSide`], [`TrackedField`], [`TrackedBattle`] - Side, field,
//!   and whole-battle state
//!
//! ## Operations
//! - [`sync::sync_battle`] - Reconcile a battle snapshot into tracked
//!   state without losing overrides or revealed history
//! - [`preset::matches_preset`] - Decide whether a preset is currently
//!   applied to a combatant
//! - [`matchup::build_matchup`] - Produce the damage engine's exact input
//!   record for one hypothetical move evaluation
//! - [`hydrate`] - Compact text encoding of state subsets
//!
//! # Example Usage
//!
//! ```ignore
//! use porygon_calc::{build_matchup, sync_battle, Player};
//!
//! // reconcile the latest snapshot into tracked state
//! let battle = sync_battle(prev.as_ref(), &snapshot, &dex)?;
//!
//! // user overrides live on the tracked Pokemon and survive later syncs
//! // battle.side_mut(Player::P2)?.pokemon[0].dirty_item.set("Choice Scarf".into());
//!
//! // produce the damage engine's input for one matchup
//! if let Some(matchup) = build_matchup(&battle, (Player::P1, 0), (Player::P2, 0)) {
//!     println!("{} vs {}", matchup.attacker.name, matchup.defender.name);
//! }
//! ```
//!
//! Everything here is a synchronous, pure transformation over plain data.
//! Failure is communicated through absent results (`Option`/`false`),
//! never panics; callers check for "no result" at every boundary.

pub mod hydrate;
pub mod matchup;
pub mod preset;
pub mod sync;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export main types at crate root for convenience
pub use matchup::{CalcField, CalcMatchup, CalcMon, CalcSide, build_calc_mon, build_matchup};
pub use preset::matches_preset;
pub use sync::{sync_battle, sync_field, sync_pokemon, sync_side};
pub use types::{
    BoostOverrides, HpState, Override, SideCondition, Status, StatusOverride, Terrain, Timed,
    TrackedBattle, TrackedField, TrackedPokemon, TrackedSide, Volatile, Weather,
};

// Re-export commonly used collaborator types
pub use porygon_data::{Generation, Nature, Stat, Type};
pub use porygon_snapshot::{GameType, Player};
