//! Hydration codec: compact, versioned, human-diffable text encoding of
//! bounded state subsets for persistence and sharing.
//!
//! Lossy by design: reserved delimiter characters are stripped from raw
//! values and deep detail fields are excluded. Encoders never fail; absent
//! input yields the placeholder or an empty string. Pairing decoders must
//! use the same delimiter precedence (outer `/`, inner `,`).

mod dehydrate;
mod hydrate;

pub use dehydrate::{
    CalcSettings, DELIM_INNER, DELIM_OUTER, Dehydrate, PLACEHOLDER, PerSide, dehydrate_array,
    dehydrate_array_with, dehydrate_boolean, dehydrate_per_side, dehydrate_player_side,
    dehydrate_settings, dehydrate_stats_table, dehydrate_value,
};
pub use hydrate::{hydrate_array, hydrate_boolean, hydrate_stats_table, hydrate_value};
