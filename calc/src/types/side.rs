//! Side (player) state

use std::collections::HashMap;

use porygon_data::to_id;
use porygon_snapshot::Player;

use super::pokemon::TrackedPokemon;

/// Side conditions (hazards, screens, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideCondition {
    // Screens
    Reflect,
    LightScreen,
    AuroraVeil,

    // Entry hazards
    Spikes,      // Stackable 1-3
    ToxicSpikes, // Stackable 1-2
    StealthRock,
    StickyWeb,

    // Other
    Tailwind,
    Safeguard,
    Mist,
}

impl SideCondition {
    /// Parse from a protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);
        match to_id(clean).as_str() {
            "reflect" => Some(SideCondition::Reflect),
            "lightscreen" => Some(SideCondition::LightScreen),
            "auroraveil" => Some(SideCondition::AuroraVeil),
            "spikes" => Some(SideCondition::Spikes),
            "toxicspikes" => Some(SideCondition::ToxicSpikes),
            "stealthrock" => Some(SideCondition::StealthRock),
            "stickyweb" => Some(SideCondition::StickyWeb),
            "tailwind" => Some(SideCondition::Tailwind),
            "safeguard" => Some(SideCondition::Safeguard),
            "mist" => Some(SideCondition::Mist),
            _ => None,
        }
    }

    /// Maximum stackable layers
    pub fn max_layers(&self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }

    /// Check if this is an entry hazard
    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            SideCondition::Spikes
                | SideCondition::ToxicSpikes
                | SideCondition::StealthRock
                | SideCondition::StickyWeb
        )
    }

    /// Check if this is a screen
    pub fn is_screen(&self) -> bool {
        matches!(
            self,
            SideCondition::Reflect | SideCondition::LightScreen | SideCondition::AuroraVeil
        )
    }

    /// Normalized id
    pub fn as_id(&self) -> &'static str {
        match self {
            SideCondition::Reflect => "reflect",
            SideCondition::LightScreen => "lightscreen",
            SideCondition::AuroraVeil => "auroraveil",
            SideCondition::Spikes => "spikes",
            SideCondition::ToxicSpikes => "toxicspikes",
            SideCondition::StealthRock => "stealthrock",
            SideCondition::StickyWeb => "stickyweb",
            SideCondition::Tailwind => "tailwind",
            SideCondition::Safeguard => "safeguard",
            SideCondition::Mist => "mist",
        }
    }

    /// All conditions in a fixed, stable order
    pub const ALL: [SideCondition; 10] = [
        SideCondition::Reflect,
        SideCondition::LightScreen,
        SideCondition::AuroraVeil,
        SideCondition::Spikes,
        SideCondition::ToxicSpikes,
        SideCondition::StealthRock,
        SideCondition::StickyWeb,
        SideCondition::Tailwind,
        SideCondition::Safeguard,
        SideCondition::Mist,
    ];
}

/// One player's side of the battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedSide {
    /// Player identifier
    pub player: Player,

    /// Player's display name
    pub name: String,

    /// Party in order
    pub pokemon: Vec<TrackedPokemon>,

    /// Currently active Pokemon indices, one per slot
    pub active: Vec<Option<usize>>,

    /// Side conditions with their layer counts
    pub conditions: HashMap<SideCondition, u8>,

    /// Remaining turns for timed conditions (screens, Tailwind).
    /// Detail data; the hydration codec deliberately skips it.
    pub condition_turns: HashMap<SideCondition, u8>,

    /// Fainted teammate count, as observed from the battle
    pub fainted_count: u8,
}

impl TrackedSide {
    /// Create a new side
    pub fn new(player: Player, name: impl Into<String>) -> Self {
        Self {
            player,
            name: name.into(),
            pokemon: Vec::new(),
            active: vec![None],
            conditions: HashMap::new(),
            condition_turns: HashMap::new(),
            fainted_count: 0,
        }
    }

    /// Set the number of active slots (1 singles, 2 doubles, ...)
    pub fn set_active_slots(&mut self, count: usize) {
        self.active.resize(count, None);
    }

    /// Get the active Pokemon at a slot
    pub fn active_pokemon(&self, slot: usize) -> Option<&TrackedPokemon> {
        self.active
            .get(slot)
            .and_then(|idx| idx.as_ref())
            .and_then(|&idx| self.pokemon.get(idx))
    }

    /// Find a Pokemon by ident, nickname, or species forme
    pub fn find_pokemon(&self, name: &str) -> Option<usize> {
        let id = to_id(name);
        self.pokemon.iter().position(|p| {
            to_id(&p.ident) == id
                || to_id(p.display_name()) == id
                || to_id(&p.species_forme) == id
        })
    }

    /// Check if the side has a condition
    pub fn has_condition(&self, cond: SideCondition) -> bool {
        self.conditions.contains_key(&cond)
    }

    /// Get layers for a condition (0 if not present)
    pub fn condition_layers(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).copied().unwrap_or(0)
    }

    /// Set a condition's layers, clamped to its maximum; 0 removes it
    pub fn set_condition(&mut self, cond: SideCondition, layers: u8) {
        if layers == 0 {
            self.conditions.remove(&cond);
            self.condition_turns.remove(&cond);
        } else {
            self.conditions.insert(cond, layers.min(cond.max_layers()));
        }
    }

    /// Count fainted Pokemon in the tracked party
    pub fn count_fainted(&self) -> u8 {
        self.pokemon.iter().filter(|p| p.fainted).count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_with_party() -> TrackedSide {
        let mut side = TrackedSide::new(Player::P1, "Alice");
        let mut sparky = TrackedPokemon::new("Pikachu", 50);
        sparky.name = Some("Sparky".to_string());
        sparky.ident = "p1: Sparky".to_string();
        side.pokemon.push(sparky);
        side.pokemon.push(TrackedPokemon::new("Charizard", 50));
        side
    }

    #[test]
    fn test_find_pokemon() {
        let side = side_with_party();
        assert_eq!(side.find_pokemon("p1: Sparky"), Some(0));
        assert_eq!(side.find_pokemon("Sparky"), Some(0));
        assert_eq!(side.find_pokemon("Pikachu"), Some(0));
        assert_eq!(side.find_pokemon("Charizard"), Some(1));
        assert_eq!(side.find_pokemon("Blastoise"), None);
    }

    #[test]
    fn test_condition_layers_clamped() {
        let mut side = side_with_party();
        side.set_condition(SideCondition::Spikes, 5);
        assert_eq!(side.condition_layers(SideCondition::Spikes), 3);

        side.set_condition(SideCondition::StealthRock, 2);
        assert_eq!(side.condition_layers(SideCondition::StealthRock), 1);

        side.set_condition(SideCondition::Spikes, 0);
        assert!(!side.has_condition(SideCondition::Spikes));
    }

    #[test]
    fn test_hazards_and_screens() {
        assert!(SideCondition::StealthRock.is_hazard());
        assert!(!SideCondition::StealthRock.is_screen());
        assert!(SideCondition::AuroraVeil.is_screen());
        assert!(SideCondition::from_protocol("move: Light Screen").unwrap().is_screen());
    }

    #[test]
    fn test_count_fainted() {
        let mut side = side_with_party();
        assert_eq!(side.count_fainted(), 0);
        side.pokemon[1].fainted = true;
        assert_eq!(side.count_fainted(), 1);
    }

    #[test]
    fn test_active_pokemon() {
        let mut side = side_with_party();
        side.active[0] = Some(1);
        assert_eq!(
            side.active_pokemon(0).unwrap().species_forme,
            "Charizard"
        );
        assert!(side.active_pokemon(1).is_none());
    }
}
