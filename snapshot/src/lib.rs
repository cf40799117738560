//! Battle snapshot value types.
//!
//! The external protocol layer owns the websocket wire format and produces
//! one immutable [`BattleSnapshot`] per sync point. This crate only defines
//! that handoff shape; it performs no wire parsing and holds no state.
//!
//! Snapshot fields are partially trusted: anything the server has not
//! revealed is absent or defaulted, and consumers treat missing fields as
//! "no information" rather than errors.

mod battle;
mod field;
mod pokemon;

pub use battle::{BattleSnapshot, GameType, Player, SideSnapshot};
pub use field::{FieldSnapshot, SideConditionSnapshot};
pub use pokemon::{HpSnapshot, PokemonSnapshot};
