//! Per-Pokemon reconciliation

use porygon_data::{Dex, Type, to_id};
use porygon_snapshot::PokemonSnapshot;
use tracing::trace;

use crate::types::{HpState, Status, TrackedPokemon, Volatile};

/// Reconcile one combatant against a snapshot.
///
/// The base layer absorbs everything the server reports; the `dirty_*`
/// override layer is never touched. Revealed information (moves, formes)
/// only grows. Missing snapshot fields mean "no new information" and leave
/// the prior value in place. This function never fails.
pub fn sync_pokemon(
    prev: Option<&TrackedPokemon>,
    snap: &PokemonSnapshot,
    dex: &dyn Dex,
) -> TrackedPokemon {
    let prev_ability_id = prev.and_then(|p| p.resolved_ability_id());

    let mut mon = match prev {
        Some(prev) => prev.clone(),
        None => {
            let mut mon = TrackedPokemon::new(&snap.species_forme, snap.level);
            mon.ident = snap.ident.clone();
            mon.name = snap.name.clone();
            apply_species_data(&mut mon, dex);
            mon
        }
    };

    // === Identity ===
    if !snap.species_forme.is_empty() && to_id(&snap.species_forme) != to_id(&mon.species_forme) {
        trace!(
            from = %mon.species_forme,
            to = %snap.species_forme,
            "forme change"
        );
        mon.species_forme = snap.species_forme.clone();
        mon.record_forme(&snap.species_forme);
        apply_species_data(&mut mon, dex);
    }
    if !snap.ident.is_empty() {
        mon.ident = snap.ident.clone();
    }
    if snap.name.is_some() {
        mon.name = snap.name.clone();
    }
    mon.level = snap.level;
    if snap.gender.is_some() {
        mon.gender = snap.gender;
    }
    mon.shiny = snap.shiny;
    mon.active = snap.active;

    // === Revealed information (monotonic union) ===
    for name in &snap.moves {
        mon.record_move(name);
    }
    if !snap.moves.is_empty() {
        mon.moves = snap.moves.clone();
    }
    for name in &snap.alt_moves {
        let id = to_id(name);
        if !mon.alt_moves.iter().any(|m| to_id(m) == id) {
            mon.alt_moves.push(name.clone());
        }
    }

    // === Server-authoritative base layer ===
    if let Some(ability) = &snap.ability {
        mon.ability = Some(ability.clone());
    }
    if let Some(base_ability) = &snap.base_ability {
        mon.base_ability = Some(base_ability.clone());
    }
    if let Some(item) = &snap.item {
        mon.item = Some(item.clone());
    }
    if let Some(prev_item) = &snap.prev_item {
        mon.prev_item = Some(prev_item.clone());
    }
    if snap.item_consumed {
        mon.item_consumed = true;
        if mon.prev_item.is_none() {
            mon.prev_item = mon.item.take();
        }
    }
    if let Some(stats) = snap.stats {
        mon.server_stats = Some(stats);
    }
    if let Some(boosts) = snap.boosts {
        mon.boosts = boosts;
    }

    if let Some(hp) = &snap.hp {
        mon.hp = HpState {
            current: hp.current,
            max: hp.max,
            fraction: hp.fraction(),
            server_sourced: hp.server_sourced,
        };
        if hp.server_sourced && hp.current == 0 {
            mon.fainted = true;
        }
    }
    if snap.fainted {
        mon.fainted = true;
        mon.hp.current = 0;
        mon.hp.fraction = 0.0;
    } else if snap.hp.as_ref().is_some_and(|hp| hp.current > 0) {
        mon.fainted = false;
    }

    if let Some(status) = &snap.status {
        if status == "fnt" {
            mon.fainted = true;
            mon.status = None;
        } else {
            // "", "ok", and "???" all resolve to no status
            mon.status = Status::from_protocol(status);
        }
    }

    // === Volatiles (authoritative when present) ===
    if let Some(volatiles) = &snap.volatiles {
        mon.volatiles = volatiles
            .iter()
            .map(|v| Volatile::from_protocol(v))
            .collect();
        if !mon.has_volatile(&Volatile::Transformed) && snap.transformed_forme.is_none() {
            mon.transformed_forme = None;
            mon.transformed_base_stats = None;
        }
    }

    // === Transformation ===
    if let Some(forme) = &snap.transformed_forme {
        mon.transformed_forme = Some(forme.clone());
        mon.add_volatile(Volatile::Transformed);
        mon.record_forme(forme);
        if let Some(data) = dex.species(forme) {
            mon.transformed_base_stats = Some(data.base_stats);
        }
    }

    // === Terastallization ===
    if let Some(tera) = &snap.tera_type
        && let Some(parsed) = Type::from_name(tera)
    {
        mon.tera_type = Some(parsed);
    }
    mon.terastallized = snap.terastallized;

    // A toggle state only survives while the ability identity does
    if mon.resolved_ability_id() != prev_ability_id {
        mon.ability_toggled = false;
    }

    mon
}

/// Fill species-derived fields from the dex
fn apply_species_data(mon: &mut TrackedPokemon, dex: &dyn Dex) {
    if let Some(data) = dex.species(&mon.species_forme) {
        mon.base_stats = data.base_stats;
        mon.types = Some(data.types);
        mon.max_hp_override = data.max_hp;
    }
}
