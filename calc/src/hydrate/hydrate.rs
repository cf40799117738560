//! Decoding counterparts for the value-level encoders.
//!
//! The full battle-state decoder belongs to the external consumer; these
//! cover the value, boolean, and stats layers so the encode/decode
//! pairing stays verifiable in-repo. Delimiter precedence matches the
//! encoders exactly: outer `/`, inner `,`.

use porygon_data::PartialStats;

use super::dehydrate::{DELIM_OUTER, PLACEHOLDER};

/// Decode a single-character boolean
pub fn hydrate_boolean(value: char) -> Option<bool> {
    match value {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

/// Decode a value; the placeholder and the empty string mean absent
pub fn hydrate_value(value: &str) -> Option<String> {
    if value.is_empty() || (value.len() == 1 && value.starts_with(PLACEHOLDER)) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Decode an outer-delimited list
pub fn hydrate_array(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(DELIM_OUTER).map(str::to_string).collect()
}

/// Decode a positional stat table (HP/Atk/Def/SpA/SpD/Spe)
pub fn hydrate_stats_table(value: &str) -> PartialStats {
    let mut slots = value
        .split(DELIM_OUTER)
        .map(|slot| hydrate_value(slot).and_then(|v| v.parse::<u16>().ok()));

    PartialStats {
        hp: slots.next().flatten(),
        atk: slots.next().flatten(),
        def: slots.next().flatten(),
        spa: slots.next().flatten(),
        spd: slots.next().flatten(),
        spe: slots.next().flatten(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrate::dehydrate::{dehydrate_boolean, dehydrate_stats_table};

    #[test]
    fn test_hydrate_boolean() {
        assert_eq!(hydrate_boolean('y'), Some(true));
        assert_eq!(hydrate_boolean('n'), Some(false));
        assert_eq!(hydrate_boolean('?'), None);
    }

    #[test]
    fn test_hydrate_value() {
        assert_eq!(hydrate_value("42"), Some("42".to_string()));
        assert_eq!(hydrate_value("?"), None);
        assert_eq!(hydrate_value(""), None);
    }

    #[test]
    fn test_boolean_round_trip() {
        for value in [true, false] {
            assert_eq!(hydrate_boolean(dehydrate_boolean(value)), Some(value));
        }
    }

    #[test]
    fn test_stats_table_round_trip() {
        let stats = PartialStats {
            hp: Some(31),
            atk: Some(0),
            def: Some(31),
            spa: None,
            spd: Some(31),
            spe: Some(31),
        };
        let encoded = dehydrate_stats_table(&stats);
        assert_eq!(encoded, "31/0/31/?/31/31");
        assert_eq!(hydrate_stats_table(&encoded), stats);
    }

    #[test]
    fn test_hydrate_stats_table_short_input() {
        let stats = hydrate_stats_table("31/0");
        assert_eq!(stats.hp, Some(31));
        assert_eq!(stats.atk, Some(0));
        assert_eq!(stats.def, None);
        assert_eq!(stats.spe, None);
    }

    #[test]
    fn test_hydrate_array() {
        assert_eq!(hydrate_array("iv/ev"), vec!["iv", "ev"]);
        assert!(hydrate_array("").is_empty());
    }
}
