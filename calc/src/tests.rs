//! Cross-component scenarios: snapshot -> sync -> matching/matchup/codec

use porygon_data::{DexTable, Nature, SpeciesData, Stats, Type};
use porygon_sets::{Preset, PresetSource};
use porygon_snapshot::{BattleSnapshot, Player};

use crate::hydrate::dehydrate_player_side;
use crate::matchup::build_matchup;
use crate::preset::matches_preset;
use crate::sync::sync_battle;
use crate::types::SideCondition;

fn dex() -> DexTable {
    let mut dex = DexTable::new();
    dex.insert(SpeciesData {
        name: "Garchomp".to_string(),
        types: (Type::Dragon, Some(Type::Ground)),
        base_stats: Stats {
            hp: 108,
            atk: 130,
            def: 95,
            spa: 80,
            spd: 85,
            spe: 102,
        },
        base_species: None,
        max_hp: None,
    });
    dex.insert(SpeciesData {
        name: "Rotom-Wash".to_string(),
        types: (Type::Electric, Some(Type::Water)),
        base_stats: Stats {
            hp: 50,
            atk: 65,
            def: 107,
            spa: 105,
            spd: 107,
            spe: 86,
        },
        base_species: Some("Rotom".to_string()),
        max_hp: None,
    });
    dex
}

fn turn_one() -> BattleSnapshot {
    let json = serde_json::json!({
        "format": "gen9ou",
        "gameType": "singles",
        "turn": 1,
        "perspective": "p1",
        "sides": [
            {
                "player": "p1",
                "name": "Alice",
                "pokemon": [{
                    "ident": "p1: Garchomp",
                    "speciesForme": "Garchomp",
                    "level": 100,
                    "ability": "Rough Skin",
                    "item": "Rocky Helmet",
                    "moves": ["Earthquake"],
                    "hp": { "current": 357, "max": 357, "serverSourced": true }
                }],
                "active": [0]
            },
            {
                "player": "p2",
                "name": "Bob",
                "pokemon": [{
                    "ident": "p2: Rotom-Wash",
                    "speciesForme": "Rotom-Wash",
                    "level": 100,
                    "hp": { "current": 100, "serverSourced": false }
                }],
                "active": [0],
                "conditions": [{ "name": "Stealth Rock" }]
            }
        ],
        "field": { "weather": "Sandstorm", "weatherTurns": 4 }
    });
    BattleSnapshot::parse(&json).expect("fixture parses")
}

#[test]
fn test_snapshot_to_matchup_flow() {
    let dex = dex();
    let battle = sync_battle(None, &turn_one(), &dex).unwrap();

    let matchup = build_matchup(&battle, (Player::P1, 0), (Player::P2, 0)).unwrap();

    assert_eq!(matchup.generation.number(), 9);
    assert_eq!(matchup.attacker.name, "Garchomp");
    assert_eq!(matchup.attacker.hp, 357);
    assert_eq!(matchup.attacker.base_stats.atk, 130);
    assert_eq!(matchup.field.weather.as_deref(), Some("Sandstorm"));
    assert!(matchup.field.defender_side.has_condition("stealthrock"));

    // the opponent's HP was only a percentage; max HP comes from the
    // formula over dex base stats and generation defaults
    assert_eq!(matchup.defender.max_hp, 241);
    assert_eq!(matchup.defender.hp, 241);
}

#[test]
fn test_overrides_survive_resync() {
    let dex = dex();
    let mut battle = sync_battle(None, &turn_one(), &dex).unwrap();

    // user edits the opponent's item and nature
    {
        let side = battle.side_mut(Player::P2).unwrap();
        let mon = &mut side.pokemon[0];
        mon.dirty_item.set("Choice Scarf".to_string());
        mon.dirty_nature.set(Nature::Timid);
    }

    // next server update reveals the actual item
    let mut next = turn_one();
    next.turn = 2;
    next.sides[1].pokemon[0].item = Some("Leftovers".to_string());
    let battle = sync_battle(Some(&battle), &next, &dex).unwrap();

    let mon = &battle.side(Player::P2).unwrap().pokemon[0];
    assert_eq!(mon.item.as_deref(), Some("Leftovers"));
    // the user's override still wins at resolution time
    assert_eq!(mon.resolved_item(), Some("Choice Scarf"));
    assert_eq!(mon.resolved_nature(), Some(Nature::Timid));
}

#[test]
fn test_reveals_accumulate_across_turns() {
    let dex = dex();
    let battle = sync_battle(None, &turn_one(), &dex).unwrap();

    let mut next = turn_one();
    next.turn = 2;
    next.sides[0].pokemon[0].moves = vec!["Swords Dance".to_string()];
    let battle = sync_battle(Some(&battle), &next, &dex).unwrap();

    let mon = &battle.side(Player::P1).unwrap().pokemon[0];
    assert!(mon.knows_move("Earthquake"));
    assert!(mon.knows_move("Swords Dance"));
}

#[test]
fn test_synced_state_matches_its_own_preset() {
    let dex = dex();
    let battle = sync_battle(None, &turn_one(), &dex).unwrap();
    let mon = &battle.side(Player::P1).unwrap().pokemon[0];

    let preset = Preset {
        name: "Observed".to_string(),
        source: Some(PresetSource::Usage),
        species_forme: mon.species_forme.clone(),
        level: None,
        ability: mon.ability.clone(),
        item: mon.item.clone(),
        nature: mon.resolved_nature(),
        moves: vec!["Earthquake".to_string()],
        ivs: None,
        evs: None,
        tera_type: None,
    };

    assert!(matches_preset(battle.generation, mon, &preset));
}

#[test]
fn test_side_conditions_reach_the_codec() {
    let dex = dex();
    let battle = sync_battle(None, &turn_one(), &dex).unwrap();
    let side = battle.side(Player::P2).unwrap();

    assert!(side.has_condition(SideCondition::StealthRock));
    assert_eq!(dehydrate_player_side(side), "stealthrock=y");
}
