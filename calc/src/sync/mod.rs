//! State reconciliation ("sync") from battle snapshots.
//!
//! Every function here is value-in/value-out: the previous tracked state
//! comes in by reference, the updated state comes out by value, and no
//! ambient store is read or written. The surrounding application owns the
//! store and must not run two reconciliations for the same battle
//! concurrently.

mod battle;
mod pokemon;

pub use battle::{sync_battle, sync_field, sync_side};
pub use pokemon::sync_pokemon;
