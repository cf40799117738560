//! Domain types for override-aware battle state

mod battle;
mod field;
mod overrides;
mod pokemon;
mod side;
mod stats;
mod status;

pub use battle::TrackedBattle;
pub use field::{Terrain, Timed, TrackedField, Weather};
pub use overrides::{BoostOverrides, Override};
pub use pokemon::{HpState, TrackedPokemon};
pub use side::{SideCondition, TrackedSide};
pub use stats::{calc_hp, calc_stat};
pub use status::{Status, StatusOverride, Volatile};
