//! Field and side condition snapshot types

use serde::Deserialize;

/// Global field conditions at a sync point
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    /// Active weather, as a protocol name ("Sandstorm", "RainDance", ...)
    #[serde(default)]
    pub weather: Option<String>,

    /// Remaining weather turns, when known
    #[serde(default)]
    pub weather_turns: Option<u8>,

    /// Active terrain, as a protocol name
    #[serde(default)]
    pub terrain: Option<String>,

    /// Remaining terrain turns, when known
    #[serde(default)]
    pub terrain_turns: Option<u8>,
}

/// One side condition (hazard, screen, ...) at a sync point
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideConditionSnapshot {
    /// Condition name as reported ("Stealth Rock", "move: Light Screen")
    pub name: String,

    /// Stacked layer count (Spikes 1-3, Toxic Spikes 1-2)
    #[serde(default = "default_layers")]
    pub layers: u8,

    /// Remaining turns for timed conditions, when known
    #[serde(default)]
    pub turns: Option<u8>,
}

fn default_layers() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults() {
        let json = serde_json::json!({});
        let field: FieldSnapshot = serde_json::from_value(json).unwrap();
        assert!(field.weather.is_none());
        assert!(field.terrain.is_none());
    }

    #[test]
    fn test_condition_layers_default() {
        let json = serde_json::json!({ "name": "Stealth Rock" });
        let cond: SideConditionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(cond.layers, 1);
        assert!(cond.turns.is_none());
    }
}
