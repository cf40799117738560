//! Stat tables and boost stages

use serde::{Deserialize, Serialize};

/// The six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    /// All six stats in canonical table order
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Parse from a protocol/JSON key ("hp", "atk", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            _ => None,
        }
    }

    /// Get the protocol key
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
        }
    }
}

/// A six-slot table indexed by [`Stat`].
///
/// Slots missing from a serialized table fall back to `T::default()`, so
/// partial spreads ("atk only") deserialize cleanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct Stats<T> {
    #[serde(default)]
    pub hp: T,
    #[serde(default)]
    pub atk: T,
    #[serde(default)]
    pub def: T,
    #[serde(default)]
    pub spa: T,
    #[serde(default)]
    pub spd: T,
    #[serde(default)]
    pub spe: T,
}

/// Concrete stat values (base stats, computed stats)
pub type StatTable = Stats<u16>;

/// Stat values that may be individually absent (IV/EV spreads under
/// partial information)
pub type PartialStats = Stats<Option<u16>>;

impl<T: Copy> Stats<T> {
    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Set the value for a stat
    pub fn set(&mut self, stat: Stat, value: T) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    /// Build a table with the same value in every slot
    pub fn filled(value: T) -> Self {
        Stats {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Apply a function to every slot
    pub fn map<U, F: FnMut(T) -> U>(&self, mut f: F) -> Stats<U> {
        Stats {
            hp: f(self.hp),
            atk: f(self.atk),
            def: f(self.def),
            spa: f(self.spa),
            spd: f(self.spd),
            spe: f(self.spe),
        }
    }

    /// Iterate over (stat, value) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl PartialStats {
    /// Fill absent slots from a default, producing a concrete table
    pub fn or_default(&self, default: u16) -> StatTable {
        self.map(|v| v.unwrap_or(default))
    }
}

/// Stat stage modifiers (-6 to +6)
///
/// HP has no stage; [`BoostTable::get`] returns 0 for it so the table can
/// be addressed uniformly by [`Stat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub accuracy: i8,
    #[serde(default)]
    pub evasion: i8,
}

impl BoostTable {
    /// Create new stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat (0 for HP)
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Set stage for a stat, clamped to -6..+6 (HP ignored)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Hp => {}
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
        }
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stages are at 0
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_parse() {
        assert_eq!(Stat::parse("hp"), Some(Stat::Hp));
        assert_eq!(Stat::parse("spe"), Some(Stat::Spe));
        assert_eq!(Stat::parse("evasion"), None);
    }

    #[test]
    fn test_stats_get_set() {
        let mut table = StatTable::default();
        table.set(Stat::Atk, 120);
        table.set(Stat::Hp, 78);
        assert_eq!(table.get(Stat::Atk), 120);
        assert_eq!(table.get(Stat::Hp), 78);
        assert_eq!(table.get(Stat::Spe), 0);
    }

    #[test]
    fn test_stats_filled() {
        let table = StatTable::filled(31);
        for (_, v) in table.iter() {
            assert_eq!(v, 31);
        }
    }

    #[test]
    fn test_partial_or_default() {
        let partial = PartialStats {
            atk: Some(0),
            ..Default::default()
        };
        let table = partial.or_default(31);
        assert_eq!(table.atk, 0);
        assert_eq!(table.hp, 31);
        assert_eq!(table.spd, 31);
    }

    #[test]
    fn test_boost_clamping() {
        let mut boosts = BoostTable::new();
        boosts.set(Stat::Atk, 9);
        assert_eq!(boosts.atk, 6);
        boosts.set(Stat::Spe, -8);
        assert_eq!(boosts.spe, -6);
    }

    #[test]
    fn test_boost_hp_is_zero() {
        let mut boosts = BoostTable::new();
        boosts.set(Stat::Hp, 3);
        assert_eq!(boosts.get(Stat::Hp), 0);
        assert!(boosts.is_clear());
    }
}
