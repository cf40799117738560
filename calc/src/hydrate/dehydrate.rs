//! Compact text encoding (dehydration)

use porygon_data::PartialStats;

use crate::types::{SideCondition, TrackedSide};

/// Outer field delimiter
pub const DELIM_OUTER: char = '/';

/// Inner delimiter for nested lists
pub const DELIM_INNER: char = ',';

/// Stands in for absent/unconvertible values
pub const PLACEHOLDER: char = '?';

/// Characters stripped from raw values to keep the encoding unambiguous.
/// Known limitation: the stripping is silently lossy for values that
/// contain them.
const RESERVED: [char; 3] = [',', ';', '|'];

fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| !RESERVED.contains(c)).collect()
}

/// A value the codec can encode
pub trait Dehydrate {
    fn dehydrate(&self) -> String;
}

impl Dehydrate for bool {
    fn dehydrate(&self) -> String {
        dehydrate_boolean(*self).to_string()
    }
}

macro_rules! dehydrate_via_display {
    ($($t:ty),*) => {
        $(
            impl Dehydrate for $t {
                fn dehydrate(&self) -> String {
                    sanitize(&self.to_string())
                }
            }
        )*
    };
}

dehydrate_via_display!(u8, u16, u32, u64, i8, i16, i32, i64, usize, f64, char, String);

impl Dehydrate for &str {
    fn dehydrate(&self) -> String {
        sanitize(self)
    }
}

/// Encode a boolean as a single character
pub fn dehydrate_boolean(value: bool) -> char {
    if value { 'y' } else { 'n' }
}

/// Encode an optional value; absence becomes the placeholder
pub fn dehydrate_value<T: Dehydrate>(value: Option<&T>) -> String {
    match value {
        Some(value) => {
            let encoded = value.dehydrate();
            if encoded.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                encoded
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Encode a list with the outer delimiter
pub fn dehydrate_array<T: Dehydrate>(values: &[T]) -> String {
    dehydrate_array_with(values, DELIM_OUTER)
}

/// Encode a list with an explicit delimiter
pub fn dehydrate_array_with<T: Dehydrate>(values: &[T], delim: char) -> String {
    values
        .iter()
        .map(Dehydrate::dehydrate)
        .collect::<Vec<_>>()
        .join(&delim.to_string())
}

/// Encode a stat table in the fixed order HP/Atk/Def/SpA/SpD/Spe.
///
/// Every slot is always present (placeholder for missing values), so
/// position alone identifies each stat on decode.
pub fn dehydrate_stats_table(stats: &PartialStats) -> String {
    [stats.hp, stats.atk, stats.def, stats.spa, stats.spd, stats.spe]
        .iter()
        .map(|slot| dehydrate_value(slot.as_ref()))
        .collect::<Vec<_>>()
        .join(&DELIM_OUTER.to_string())
}

/// Encode one side's conditions as `key=value` pairs joined by the outer
/// delimiter.
///
/// Falsy values are omitted entirely. The remaining-turns detail
/// (`condition_turns`) is deliberately not part of this encoding.
pub fn dehydrate_player_side(side: &TrackedSide) -> String {
    let mut pairs: Vec<String> = Vec::new();

    for cond in SideCondition::ALL {
        let layers = side.condition_layers(cond);
        if layers == 0 {
            continue;
        }
        let value = if cond.max_layers() > 1 {
            layers.to_string()
        } else {
            dehydrate_boolean(true).to_string()
        };
        pairs.push(format!("{}={}", cond.as_id(), value));
    }

    if side.fainted_count > 0 {
        pairs.push(format!("fc={}", side.fainted_count));
    }

    pairs.join(&DELIM_OUTER.to_string())
}

/// A per-slot value set: the authenticated perspective plus the four
/// player slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerSide<T> {
    pub auth: T,
    pub p1: T,
    pub p2: T,
    pub p3: T,
    pub p4: T,
}

impl<T> PerSide<T> {
    /// Slots in sorted key order (auth, p1, p2, p3, p4)
    pub fn slots(&self) -> [(&'static str, &T); 5] {
        [
            ("auth", &self.auth),
            ("p1", &self.p1),
            ("p2", &self.p2),
            ("p3", &self.p3),
            ("p4", &self.p4),
        ]
    }
}

/// Encode a per-slot list set: slots in sorted key order joined by the
/// outer delimiter, each slot's list sub-encoded with the inner delimiter
pub fn dehydrate_per_side(per_side: &PerSide<Vec<String>>) -> String {
    per_side
        .slots()
        .iter()
        .map(|(_, values)| dehydrate_array_with(values, DELIM_INNER))
        .collect::<Vec<_>>()
        .join(&DELIM_OUTER.to_string())
}

/// Per-side calc settings covered by the codec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalcSettings {
    /// Which spread rows ("iv", "ev") are visible by default, per slot
    pub show_spreads: PerSide<Vec<String>>,
}

/// Encode the settings subset
pub fn dehydrate_settings(settings: &CalcSettings) -> String {
    dehydrate_per_side(&settings.show_spreads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use porygon_snapshot::Player;

    #[test]
    fn test_dehydrate_boolean() {
        assert_eq!(dehydrate_boolean(true), 'y');
        assert_eq!(dehydrate_boolean(false), 'n');
    }

    #[test]
    fn test_dehydrate_value() {
        assert_eq!(dehydrate_value(Some(&42u32)), "42");
        assert_eq!(dehydrate_value(Some(&true)), "y");
        assert_eq!(dehydrate_value::<u32>(None), "?");
    }

    #[test]
    fn test_dehydrate_value_strips_reserved() {
        let tricky = "a,b;c|d".to_string();
        assert_eq!(dehydrate_value(Some(&tricky)), "abcd");
    }

    #[test]
    fn test_dehydrate_value_empty_becomes_placeholder() {
        let empty = String::new();
        assert_eq!(dehydrate_value(Some(&empty)), "?");
    }

    #[test]
    fn test_dehydrate_array() {
        let values = vec!["iv".to_string(), "ev".to_string()];
        assert_eq!(dehydrate_array(&values), "iv/ev");
        assert_eq!(dehydrate_array_with(&values, ','), "iv,ev");
        assert_eq!(dehydrate_array::<String>(&[]), "");
    }

    #[test]
    fn test_dehydrate_stats_table() {
        let stats = PartialStats {
            hp: Some(31),
            atk: Some(0),
            def: Some(31),
            spa: Some(31),
            spd: Some(31),
            spe: Some(31),
        };
        assert_eq!(dehydrate_stats_table(&stats), "31/0/31/31/31/31");
    }

    #[test]
    fn test_dehydrate_stats_table_missing_slots() {
        let stats = PartialStats {
            atk: Some(252),
            ..Default::default()
        };
        assert_eq!(dehydrate_stats_table(&stats), "?/252/?/?/?/?");
    }

    #[test]
    fn test_dehydrate_player_side() {
        let mut side = TrackedSide::new(Player::P1, "Alice");
        side.set_condition(SideCondition::Spikes, 2);
        side.set_condition(SideCondition::StealthRock, 1);
        side.set_condition(SideCondition::Reflect, 1);
        side.condition_turns.insert(SideCondition::Reflect, 3);
        side.fainted_count = 1;

        let encoded = dehydrate_player_side(&side);
        assert_eq!(encoded, "reflect=y/spikes=2/stealthrock=y/fc=1");
        // the turns detail never leaks into the encoding
        assert!(!encoded.contains('3'));
    }

    #[test]
    fn test_dehydrate_player_side_empty() {
        let side = TrackedSide::new(Player::P1, "Alice");
        assert_eq!(dehydrate_player_side(&side), "");
    }

    #[test]
    fn test_dehydrate_per_side() {
        let per_side = PerSide {
            auth: vec![],
            p1: vec!["iv".to_string(), "ev".to_string()],
            p2: vec!["iv".to_string(), "ev".to_string()],
            p3: vec!["iv".to_string(), "ev".to_string()],
            p4: vec!["iv".to_string(), "ev".to_string()],
        };
        assert_eq!(dehydrate_per_side(&per_side), "/iv,ev/iv,ev/iv,ev/iv,ev");
    }

    #[test]
    fn test_dehydrate_settings() {
        let mut settings = CalcSettings::default();
        settings.show_spreads.auth = vec!["iv".to_string()];
        assert_eq!(dehydrate_settings(&settings), "iv////");
    }
}
