//! Matchup construction

use porygon_data::Generation;
use porygon_snapshot::Player;
use tracing::debug;

use super::engine::{CalcField, CalcMatchup, CalcMon, CalcSide};
use super::rules::{RuleCtx, apply_rules, is_multiscale_class};
use crate::types::{TrackedBattle, TrackedPokemon, TrackedSide, calc_hp};

/// Build the engine's combatant record from a tracked Pokemon.
///
/// Pure; returns `None` (never panics) when the combatant has no species
/// identity. The opponent is consulted only for cross-combatant ability
/// rules (aura cancellation).
pub fn build_calc_mon(
    generation: Generation,
    mon: &TrackedPokemon,
    opponent: Option<&TrackedPokemon>,
) -> Option<CalcMon> {
    if !mon.has_identity() {
        debug!("matchup unavailable: combatant has no species identity");
        return None;
    }

    let base_stats = mon.resolved_base_stats();
    let ivs = mon.resolved_ivs(generation);
    let evs = mon.resolved_evs(generation);

    let max_hp = match (mon.hp.server_sourced, mon.hp.max) {
        (true, Some(max)) => max,
        _ => calc_hp(base_stats.hp, ivs.hp, evs.hp, mon.level, mon.max_hp_override) as u32,
    };

    let ability_id = mon.resolved_ability_id();
    let hp = match mon.dirty_hp.resolve_copied(None) {
        Some(over) => over.min(max_hp),
        None if mon.hp.server_sourced => {
            let reported = mon.hp.current;
            // A damage-reduction-at-full-HP ability manually toggled on can
            // legitimately coexist with a reported 0 HP; treat it as full
            // so the engine does not consider the combatant fainted.
            if reported == 0
                && mon.ability_toggled
                && ability_id.as_deref().is_some_and(is_multiscale_class)
            {
                max_hp
            } else {
                reported.min(max_hp)
            }
        }
        None => (mon.hp.fraction * max_hp as f64).floor() as u32,
    };

    let mut calc = CalcMon {
        name: mon.current_forme().to_string(),
        level: mon.level,
        gender: mon.gender,
        hp,
        max_hp,
        ability: mon.resolved_ability().map(str::to_string),
        ability_on: None,
        // held items do not exist in generation 1
        item: if generation.has_items() {
            mon.resolved_item().map(str::to_string)
        } else {
            None
        },
        // natures do not exist before generation 3
        nature: if generation.has_natures() {
            mon.resolved_nature()
        } else {
            None
        },
        ivs,
        evs,
        base_stats,
        boosts: mon.resolved_boosts(),
        status: mon.resolved_status(),
        types: mon.resolved_types(),
        tera_type: mon.resolved_tera_type(),
        terastallized: mon.terastallized,
        conditions: mon.volatiles.iter().map(|v| v.as_id().to_string()).collect(),
    };

    let ctx = RuleCtx {
        generation,
        mon,
        opponent_ability: opponent.and_then(|o| o.resolved_ability_id()),
    };
    apply_rules(&mut calc, &ctx);

    Some(calc)
}

/// Build the engine's side record
fn build_calc_side(side: &TrackedSide, mon: &TrackedPokemon) -> CalcSide {
    CalcSide {
        conditions: side
            .conditions
            .iter()
            .map(|(cond, layers)| (cond.as_id().to_string(), *layers))
            .collect(),
        fainted_count: mon.resolved_faint_counter(side.fainted_count),
    }
}

/// Build the complete matchup input for one hypothetical move evaluation.
///
/// `attacker` and `defender` address a party slot on a side. Returns
/// `None` when either combatant is missing or lacks identity; callers
/// treat that as "matchup unavailable".
pub fn build_matchup(
    battle: &TrackedBattle,
    attacker: (Player, usize),
    defender: (Player, usize),
) -> Option<CalcMatchup> {
    let attacker_side = battle.side(attacker.0)?;
    let defender_side = battle.side(defender.0)?;
    let attacker_mon = attacker_side.pokemon.get(attacker.1)?;
    let defender_mon = defender_side.pokemon.get(defender.1)?;

    let generation = battle.generation;
    let attacker_calc = build_calc_mon(generation, attacker_mon, Some(defender_mon))?;
    let defender_calc = build_calc_mon(generation, defender_mon, Some(attacker_mon))?;

    Some(CalcMatchup {
        generation,
        attacker: attacker_calc,
        defender: defender_calc,
        field: CalcField {
            game_type: battle.game_type,
            weather: battle.field.weather_kind().map(|w| w.as_str().to_string()),
            terrain: battle.field.terrain_kind().map(|t| t.as_str().to_string()),
            attacker_side: build_calc_side(attacker_side, attacker_mon),
            defender_side: build_calc_side(defender_side, defender_mon),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SideCondition, Status, StatusOverride, Timed, TrackedSide, Weather};
    use porygon_data::{Nature, Stats, Type};

    fn generation(n: u8) -> Generation {
        Generation::new(n).unwrap()
    }

    fn dragonite() -> TrackedPokemon {
        let mut mon = TrackedPokemon::new("Dragonite", 100);
        mon.ability = Some("Multiscale".to_string());
        mon.item = Some("Heavy-Duty Boots".to_string());
        mon.nature = Some(Nature::Adamant);
        mon.base_stats = Stats {
            hp: 91,
            atk: 134,
            def: 95,
            spa: 100,
            spd: 100,
            spe: 80,
        };
        mon.types = Some((Type::Dragon, Some(Type::Flying)));
        mon
    }

    fn chien_pao() -> TrackedPokemon {
        let mut mon = TrackedPokemon::new("Chien-Pao", 100);
        mon.ability = Some("Sword of Ruin".to_string());
        mon.ability_toggled = true;
        mon.base_stats = Stats {
            hp: 80,
            atk: 120,
            def: 80,
            spa: 90,
            spd: 65,
            spe: 135,
        };
        mon.types = Some((Type::Dark, Some(Type::Ice)));
        mon
    }

    #[test]
    fn test_no_identity_yields_no_result() {
        let mon = TrackedPokemon::default();
        assert!(build_calc_mon(generation(9), &mon, None).is_none());
    }

    #[test]
    fn test_computed_max_hp_when_not_server_sourced() {
        let mut mon = dragonite();
        mon.hp.fraction = 0.5;
        mon.hp.server_sourced = false;

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        // 91 base, 31 IV, 0 EV at level 100 -> 323
        assert_eq!(calc.max_hp, 323);
        assert_eq!(calc.hp, 161); // floor(0.5 * 323)
    }

    #[test]
    fn test_server_hp_used_directly() {
        let mut mon = dragonite();
        mon.hp.current = 200;
        mon.hp.max = Some(386);
        mon.hp.server_sourced = true;

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.hp, 200);
        assert_eq!(calc.max_hp, 386);
    }

    #[test]
    fn test_multiscale_at_zero_hp_reads_full() {
        let mut mon = dragonite();
        mon.hp.current = 0;
        mon.hp.max = Some(386);
        mon.hp.server_sourced = true;
        mon.ability_toggled = true;

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.hp, 386);
    }

    #[test]
    fn test_zero_hp_without_toggle_stays_zero() {
        let mut mon = dragonite();
        mon.hp.current = 0;
        mon.hp.max = Some(386);
        mon.hp.server_sourced = true;
        mon.ability_toggled = false;

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.hp, 0);
    }

    #[test]
    fn test_dirty_hp_wins() {
        let mut mon = dragonite();
        mon.hp.current = 200;
        mon.hp.max = Some(386);
        mon.hp.server_sourced = true;
        mon.dirty_hp.set(123);

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.hp, 123);
    }

    #[test]
    fn test_status_override_maps_to_none() {
        let mut mon = dragonite();
        mon.status = Some(Status::Burn);
        mon.dirty_status.set(StatusOverride::Healthy);

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert!(calc.status.is_none());
    }

    #[test]
    fn test_ruin_pair_cancels_both() {
        let a = chien_pao();
        let mut b = chien_pao();
        b.species_forme = "Chien-Pao-Clone".to_string();

        let calc_a = build_calc_mon(generation(9), &a, Some(&b)).unwrap();
        let calc_b = build_calc_mon(generation(9), &b, Some(&a)).unwrap();
        assert_eq!(calc_a.ability.as_deref(), Some("Pressure"));
        assert_eq!(calc_b.ability.as_deref(), Some("Pressure"));
    }

    #[test]
    fn test_different_ruin_auras_do_not_cancel() {
        let a = chien_pao();
        let mut b = chien_pao();
        b.ability = Some("Beads of Ruin".to_string());

        let calc_a = build_calc_mon(generation(9), &a, Some(&b)).unwrap();
        let calc_b = build_calc_mon(generation(9), &b, Some(&a)).unwrap();
        assert_eq!(calc_a.ability.as_deref(), Some("Sword of Ruin"));
        assert_eq!(calc_b.ability.as_deref(), Some("Beads of Ruin"));
    }

    #[test]
    fn test_type_override_withheld_for_protean_without_typechange() {
        let mut mon = dragonite();
        mon.ability = Some("Protean".to_string());
        mon.dirty_types.set((Type::Water, None));

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.types, Some((Type::Dragon, Some(Type::Flying))));
    }

    #[test]
    fn test_type_override_forwarded_once_typechange_recorded() {
        let mut mon = dragonite();
        mon.ability = Some("Protean".to_string());
        mon.dirty_types.set((Type::Water, None));
        mon.add_volatile(crate::types::Volatile::TypeChange);

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.types, Some((Type::Water, None)));
    }

    #[test]
    fn test_gen1_has_no_item_or_nature() {
        let mon = dragonite();
        let calc = build_calc_mon(generation(1), &mon, None).unwrap();
        assert!(calc.item.is_none());
        assert!(calc.nature.is_none());
        // SpD couples to SpA via the shared special stat
        assert_eq!(calc.ivs.spd, calc.ivs.spa);
        assert_eq!(calc.evs.spd, calc.evs.spa);
        assert_eq!(calc.base_stats.spd, calc.base_stats.spa);
    }

    #[test]
    fn test_transformed_takes_forme_name_and_stats() {
        let mut mon = dragonite();
        mon.transformed_forme = Some("Garchomp".to_string());
        mon.transformed_base_stats = Some(Stats {
            hp: 108,
            atk: 130,
            def: 95,
            spa: 80,
            spd: 85,
            spe: 102,
        });

        let calc = build_calc_mon(generation(9), &mon, None).unwrap();
        assert_eq!(calc.name, "Garchomp");
        assert_eq!(calc.base_stats.hp, 91); // original HP base stat
        assert_eq!(calc.base_stats.atk, 130);
    }

    #[test]
    fn test_build_matchup_full() {
        let mut battle = TrackedBattle::new(generation(9));
        battle.field.weather = Some(Timed::new(Weather::Sand));

        let mut side1 = TrackedSide::new(Player::P1, "Alice");
        side1.pokemon.push(dragonite());
        side1.set_condition(SideCondition::Spikes, 2);
        side1.fainted_count = 1;

        let mut side2 = TrackedSide::new(Player::P2, "Bob");
        side2.pokemon.push(chien_pao());

        battle.sides[0] = Some(side1);
        battle.sides[1] = Some(side2);

        let matchup = build_matchup(&battle, (Player::P1, 0), (Player::P2, 0)).unwrap();
        assert_eq!(matchup.generation.number(), 9);
        assert_eq!(matchup.attacker.name, "Dragonite");
        assert_eq!(matchup.defender.name, "Chien-Pao");
        assert_eq!(matchup.field.weather.as_deref(), Some("Sandstorm"));
        assert_eq!(
            matchup.field.attacker_side.conditions.get("spikes"),
            Some(&2)
        );
        assert_eq!(matchup.field.attacker_side.fainted_count, 1);
    }

    #[test]
    fn test_build_matchup_missing_slot() {
        let battle = TrackedBattle::new(generation(9));
        assert!(build_matchup(&battle, (Player::P1, 0), (Player::P2, 0)).is_none());
    }
}
