//! Override layering primitives

use porygon_data::{BoostTable, Stat};

/// One user-overridable field.
///
/// `Cleared` is distinct from `Unset` on purpose: clearing an override is
/// an explicit user action ("go back to the base value") that consumers
/// can tell apart from a field that was never edited. Both resolve to the
/// base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Override<T> {
    /// Never edited
    Unset,

    /// User-supplied value taking precedence over the base layer
    Set(T),

    /// Explicitly reset to the base value
    Cleared,
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Override::Unset
    }
}

impl<T> Override<T> {
    /// Resolve against the base layer: a set override wins, everything
    /// else falls through
    pub fn resolve<'a>(&'a self, base: Option<&'a T>) -> Option<&'a T> {
        match self {
            Override::Set(value) => Some(value),
            Override::Unset | Override::Cleared => base,
        }
    }

    /// Check if an override value is currently set
    pub fn is_set(&self) -> bool {
        matches!(self, Override::Set(_))
    }

    /// Check if this field was explicitly cleared
    pub fn is_cleared(&self) -> bool {
        matches!(self, Override::Cleared)
    }

    /// Get the override value, if set
    pub fn value(&self) -> Option<&T> {
        match self {
            Override::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Set an override value
    pub fn set(&mut self, value: T) {
        *self = Override::Set(value);
    }

    /// Explicitly clear back to the base value
    pub fn clear(&mut self) {
        *self = Override::Cleared;
    }

    /// Forget any edit, returning to the never-set state
    pub fn reset(&mut self) {
        *self = Override::Unset;
    }
}

impl<T: Copy> Override<T> {
    /// Resolve by value for `Copy` payloads
    pub fn resolve_copied(&self, base: Option<T>) -> Option<T> {
        match self {
            Override::Set(value) => Some(*value),
            Override::Unset | Override::Cleared => base,
        }
    }
}

/// Per-stage overrides for the five boostable combat stats.
///
/// Accuracy and evasion stages are not overridable; they pass through from
/// the base table untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostOverrides {
    pub atk: Override<i8>,
    pub def: Override<i8>,
    pub spa: Override<i8>,
    pub spd: Override<i8>,
    pub spe: Override<i8>,
}

impl BoostOverrides {
    /// Get the override for a stat (HP has no stage)
    pub fn get(&self, stat: Stat) -> Override<i8> {
        match stat {
            Stat::Hp => Override::Unset,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Set the override for a stat (HP ignored)
    pub fn set(&mut self, stat: Stat, value: Override<i8>) {
        match stat {
            Stat::Hp => {}
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    /// Resolve against a base stage table
    pub fn resolve(&self, base: &BoostTable) -> BoostTable {
        let mut resolved = *base;
        for stat in [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe] {
            if let Some(value) = self.get(stat).resolve_copied(None) {
                resolved.set(stat, value);
            }
        }
        resolved
    }

    /// Check if any stage is overridden
    pub fn any_set(&self) -> bool {
        [self.atk, self.def, self.spa, self.spd, self.spe]
            .iter()
            .any(|o| o.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_resolves_to_base() {
        let field: Override<u16> = Override::Unset;
        assert_eq!(field.resolve(Some(&50)), Some(&50));
        assert_eq!(field.resolve(None), None);
    }

    #[test]
    fn test_set_wins_over_base() {
        let mut field = Override::Unset;
        field.set(80u16);
        assert_eq!(field.resolve(Some(&50)), Some(&80));
    }

    #[test]
    fn test_cleared_falls_through_but_is_distinct() {
        let mut field = Override::Set(80u16);
        field.clear();
        assert_eq!(field.resolve(Some(&50)), Some(&50));
        assert!(field.is_cleared());
        assert!(!field.is_set());

        field.reset();
        assert!(!field.is_cleared());
    }

    #[test]
    fn test_boost_overrides_resolve() {
        let mut base = BoostTable::new();
        base.set(Stat::Atk, 2);
        base.accuracy = -1;

        let mut overrides = BoostOverrides::default();
        overrides.atk.set(6);
        overrides.spe.set(-1);
        overrides.def.clear();

        let resolved = overrides.resolve(&base);
        assert_eq!(resolved.atk, 6);
        assert_eq!(resolved.spe, -1);
        assert_eq!(resolved.def, 0);
        // accuracy passes through untouched
        assert_eq!(resolved.accuracy, -1);
    }

    #[test]
    fn test_boost_overrides_hp_noop() {
        let mut overrides = BoostOverrides::default();
        overrides.set(Stat::Hp, Override::Set(3));
        assert!(!overrides.any_set());
    }
}
