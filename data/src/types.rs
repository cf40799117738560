//! Elemental types

use serde::{Deserialize, Serialize};

use crate::ids::to_id;

/// Elemental type.
///
/// Effectiveness is deliberately not modeled here; the external damage
/// engine owns the type chart. This crate only names and forwards types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    /// Gen 9 tera-only type
    Stellar,
}

impl Type {
    /// Parse from a display name or id ("Fire", "fire", "FIRE")
    pub fn from_name(s: &str) -> Option<Self> {
        match to_id(s).as_str() {
            "normal" => Some(Type::Normal),
            "fighting" => Some(Type::Fighting),
            "flying" => Some(Type::Flying),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "rock" => Some(Type::Rock),
            "bug" => Some(Type::Bug),
            "ghost" => Some(Type::Ghost),
            "steel" => Some(Type::Steel),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "grass" => Some(Type::Grass),
            "electric" => Some(Type::Electric),
            "psychic" => Some(Type::Psychic),
            "ice" => Some(Type::Ice),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "fairy" => Some(Type::Fairy),
            "stellar" => Some(Type::Stellar),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
            Type::Stellar => "Stellar",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_name("???"), None);
        assert_eq!(Type::from_name(""), None);
    }

    #[test]
    fn test_round_trip() {
        let all = [
            Type::Normal,
            Type::Fighting,
            Type::Flying,
            Type::Poison,
            Type::Ground,
            Type::Rock,
            Type::Bug,
            Type::Ghost,
            Type::Steel,
            Type::Fire,
            Type::Water,
            Type::Grass,
            Type::Electric,
            Type::Psychic,
            Type::Ice,
            Type::Dragon,
            Type::Dark,
            Type::Fairy,
            Type::Stellar,
        ];
        for t in all {
            assert_eq!(Type::from_name(t.as_str()), Some(t));
        }
    }
}
