//! Whole-battle snapshot and battle primitives

use serde::{Deserialize, Serialize};

use crate::field::{FieldSnapshot, SideConditionSnapshot};
use crate::pokemon::PokemonSnapshot;

/// Player in a battle (p1-p4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    P1,
    P2,
    P3,
    P4,
}

impl Player {
    /// Parse from a protocol id ("p1", "p2", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            "p3" => Some(Player::P3),
            "p4" => Some(Player::P4),
            _ => None,
        }
    }

    /// Get the protocol id
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
            Player::P3 => "p3",
            Player::P4 => "p4",
        }
    }

    /// Index into side arrays
    pub fn index(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
            Player::P3 => 2,
            Player::P4 => 3,
        }
    }

    /// The opposing player in a 1v1 battle
    pub fn opponent(&self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
            Player::P3 => Player::P4,
            Player::P4 => Player::P3,
        }
    }
}

/// Game type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Singles,
    Doubles,
    Triples,
    Multi,
    FreeForAll,
}

impl GameType {
    /// Parse from a protocol string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "singles" => Some(GameType::Singles),
            "doubles" => Some(GameType::Doubles),
            "triples" => Some(GameType::Triples),
            "multi" => Some(GameType::Multi),
            "freeforall" => Some(GameType::FreeForAll),
            _ => None,
        }
    }

    /// Active slots per side
    pub fn active_slots(&self) -> usize {
        match self {
            GameType::Singles | GameType::FreeForAll => 1,
            GameType::Doubles | GameType::Multi => 2,
            GameType::Triples => 3,
        }
    }
}

/// One player's side at a sync point
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSnapshot {
    /// Which player this side belongs to
    pub player: Player,

    /// Player's display name
    #[serde(default)]
    pub name: String,

    /// Party in order
    #[serde(default)]
    pub pokemon: Vec<PokemonSnapshot>,

    /// Indices into `pokemon` for each active slot
    #[serde(default)]
    pub active: Vec<Option<usize>>,

    /// Side conditions currently up
    #[serde(default)]
    pub conditions: Vec<SideConditionSnapshot>,

    /// Fainted teammate count, when the protocol layer tracks it
    #[serde(default)]
    pub fainted_count: Option<u8>,
}

/// An immutable snapshot of the whole battle at one sync point.
///
/// Produced by the external protocol layer; consumed by the reconciler.
/// Nothing here is mutated by this workspace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    /// Format id (e.g. "gen9ou")
    #[serde(default)]
    pub format: String,

    /// Game type, when announced
    #[serde(default)]
    pub game_type: Option<GameType>,

    /// Current turn number (0 = not started)
    #[serde(default)]
    pub turn: u32,

    /// Which player the authenticated user is
    #[serde(default)]
    pub perspective: Option<Player>,

    /// All sides seen so far
    #[serde(default)]
    pub sides: Vec<SideSnapshot>,

    /// Global field conditions
    #[serde(default)]
    pub field: FieldSnapshot,
}

impl BattleSnapshot {
    /// Parse a snapshot from JSON
    pub fn parse(json: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(json.clone()).ok()
    }

    /// Get the side for a player, if present
    pub fn side(&self, player: Player) -> Option<&SideSnapshot> {
        self.sides.iter().find(|s| s.player == player)
    }
}
