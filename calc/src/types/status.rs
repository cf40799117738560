//! Status conditions (volatile and non-volatile)

use porygon_data::to_id;

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Parse from a protocol string ("brn", "frz", "par", "psn", "tox", "slp").
    ///
    /// The unknown-status sentinel ("???") and the healthy markers ("", "ok")
    /// parse to `None`.
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::BadPoison => "tox",
            Status::Sleep => "slp",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user status override.
///
/// `Healthy` is the "semantically ok" edit: the user asserts the combatant
/// has no status, overriding whatever the base layer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusOverride {
    /// No status condition
    Healthy,

    /// A specific status condition
    Afflicted(Status),
}

impl StatusOverride {
    /// Map to the engine-facing optional status
    pub fn as_status(&self) -> Option<Status> {
        match self {
            StatusOverride::Healthy => None,
            StatusOverride::Afflicted(status) => Some(*status),
        }
    }
}

/// Volatile conditions this core consumes.
///
/// Only conditions with calc-relevant behavior get their own variant;
/// everything else is preserved under `Other` so revealed state is never
/// dropped on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Volatile {
    /// Attack and Defense swapped
    PowerTrick,

    /// Temporary elemental type change (Soak, Protean activation, ...)
    TypeChange,

    /// Salt Cure residual damage
    SaltCure,

    /// Transformed into another Pokemon
    Transformed,

    /// Ability suppressed
    GastroAcid,

    /// Currently Dynamaxed
    Dynamax,

    /// Behind a Substitute
    Substitute,

    /// Leech Seeded
    LeechSeed,

    /// Confused
    Confusion,

    /// Any other condition, by normalized id
    Other(String),
}

impl Volatile {
    /// Parse from a protocol string ("move: Salt Cure", "typechange", ...)
    pub fn from_protocol(s: &str) -> Self {
        let clean = s.strip_prefix("move: ").unwrap_or(s);
        match to_id(clean).as_str() {
            "powertrick" => Volatile::PowerTrick,
            "typechange" => Volatile::TypeChange,
            "saltcure" => Volatile::SaltCure,
            "transform" | "transformed" => Volatile::Transformed,
            "gastroacid" => Volatile::GastroAcid,
            "dynamax" => Volatile::Dynamax,
            "substitute" => Volatile::Substitute,
            "leechseed" => Volatile::LeechSeed,
            "confusion" => Volatile::Confusion,
            other => Volatile::Other(other.to_string()),
        }
    }

    /// Get the normalized id
    pub fn as_id(&self) -> &str {
        match self {
            Volatile::PowerTrick => "powertrick",
            Volatile::TypeChange => "typechange",
            Volatile::SaltCure => "saltcure",
            Volatile::Transformed => "transformed",
            Volatile::GastroAcid => "gastroacid",
            Volatile::Dynamax => "dynamax",
            Volatile::Substitute => "substitute",
            Volatile::LeechSeed => "leechseed",
            Volatile::Confusion => "confusion",
            Volatile::Other(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("???"), None);
        assert_eq!(Status::from_protocol("ok"), None);
        assert_eq!(Status::from_protocol(""), None);
    }

    #[test]
    fn test_status_override() {
        assert_eq!(StatusOverride::Healthy.as_status(), None);
        assert_eq!(
            StatusOverride::Afflicted(Status::Paralysis).as_status(),
            Some(Status::Paralysis)
        );
    }

    #[test]
    fn test_volatile_from_protocol() {
        assert_eq!(Volatile::from_protocol("powertrick"), Volatile::PowerTrick);
        assert_eq!(
            Volatile::from_protocol("move: Salt Cure"),
            Volatile::SaltCure
        );
        assert_eq!(Volatile::from_protocol("typechange"), Volatile::TypeChange);
        assert_eq!(
            Volatile::from_protocol("Smack Down"),
            Volatile::Other("smackdown".to_string())
        );
    }

    #[test]
    fn test_volatile_ids_round_trip() {
        for v in [
            Volatile::PowerTrick,
            Volatile::TypeChange,
            Volatile::SaltCure,
            Volatile::Transformed,
            Volatile::GastroAcid,
        ] {
            assert_eq!(Volatile::from_protocol(v.as_id()), v);
        }
    }
}
