//! Natures

use serde::{Deserialize, Serialize};

use crate::ids::to_id;
use crate::stats::Stat;

/// The 25 natures.
///
/// Neutral natures boost and drop the same stat, so `boosts() == drops()`
/// identifies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Quirky,
    Rash,
    Relaxed,
    Sassy,
    Serious,
    Timid,
}

impl Nature {
    /// Parse from a display name or id
    pub fn from_name(s: &str) -> Option<Self> {
        match to_id(s).as_str() {
            "adamant" => Some(Nature::Adamant),
            "bashful" => Some(Nature::Bashful),
            "bold" => Some(Nature::Bold),
            "brave" => Some(Nature::Brave),
            "calm" => Some(Nature::Calm),
            "careful" => Some(Nature::Careful),
            "docile" => Some(Nature::Docile),
            "gentle" => Some(Nature::Gentle),
            "hardy" => Some(Nature::Hardy),
            "hasty" => Some(Nature::Hasty),
            "impish" => Some(Nature::Impish),
            "jolly" => Some(Nature::Jolly),
            "lax" => Some(Nature::Lax),
            "lonely" => Some(Nature::Lonely),
            "mild" => Some(Nature::Mild),
            "modest" => Some(Nature::Modest),
            "naive" => Some(Nature::Naive),
            "naughty" => Some(Nature::Naughty),
            "quiet" => Some(Nature::Quiet),
            "quirky" => Some(Nature::Quirky),
            "rash" => Some(Nature::Rash),
            "relaxed" => Some(Nature::Relaxed),
            "sassy" => Some(Nature::Sassy),
            "serious" => Some(Nature::Serious),
            "timid" => Some(Nature::Timid),
            _ => None,
        }
    }

    /// The stat this nature boosts by 10%
    pub fn boosts(&self) -> Stat {
        match self {
            Nature::Adamant | Nature::Brave | Nature::Lonely | Nature::Naughty => Stat::Atk,
            Nature::Bold | Nature::Impish | Nature::Lax | Nature::Relaxed => Stat::Def,
            Nature::Mild | Nature::Modest | Nature::Quiet | Nature::Rash => Stat::Spa,
            Nature::Calm | Nature::Careful | Nature::Gentle | Nature::Sassy => Stat::Spd,
            Nature::Hasty | Nature::Jolly | Nature::Naive | Nature::Timid => Stat::Spe,
            Nature::Bashful => Stat::Spa,
            Nature::Docile => Stat::Def,
            Nature::Hardy => Stat::Atk,
            Nature::Quirky => Stat::Spd,
            Nature::Serious => Stat::Spe,
        }
    }

    /// The stat this nature drops by 10%
    pub fn drops(&self) -> Stat {
        match self {
            Nature::Bold | Nature::Calm | Nature::Modest | Nature::Timid => Stat::Atk,
            Nature::Hasty | Nature::Lonely | Nature::Mild | Nature::Gentle => Stat::Def,
            Nature::Adamant | Nature::Careful | Nature::Impish | Nature::Jolly => Stat::Spa,
            Nature::Lax | Nature::Naive | Nature::Naughty | Nature::Rash => Stat::Spd,
            Nature::Brave | Nature::Quiet | Nature::Relaxed | Nature::Sassy => Stat::Spe,
            Nature::Bashful => Stat::Spa,
            Nature::Docile => Stat::Def,
            Nature::Hardy => Stat::Atk,
            Nature::Quirky => Stat::Spd,
            Nature::Serious => Stat::Spe,
        }
    }

    /// Check if this nature has no stat effect
    pub fn is_neutral(&self) -> bool {
        self.boosts() == self.drops()
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Adamant => "Adamant",
            Nature::Bashful => "Bashful",
            Nature::Bold => "Bold",
            Nature::Brave => "Brave",
            Nature::Calm => "Calm",
            Nature::Careful => "Careful",
            Nature::Docile => "Docile",
            Nature::Gentle => "Gentle",
            Nature::Hardy => "Hardy",
            Nature::Hasty => "Hasty",
            Nature::Impish => "Impish",
            Nature::Jolly => "Jolly",
            Nature::Lax => "Lax",
            Nature::Lonely => "Lonely",
            Nature::Mild => "Mild",
            Nature::Modest => "Modest",
            Nature::Naive => "Naive",
            Nature::Naughty => "Naughty",
            Nature::Quiet => "Quiet",
            Nature::Quirky => "Quirky",
            Nature::Rash => "Rash",
            Nature::Relaxed => "Relaxed",
            Nature::Sassy => "Sassy",
            Nature::Serious => "Serious",
            Nature::Timid => "Timid",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
