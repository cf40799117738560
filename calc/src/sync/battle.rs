//! Battle-level reconciliation

use porygon_data::{Dex, Generation};
use porygon_snapshot::{BattleSnapshot, FieldSnapshot, GameType, SideSnapshot};
use tracing::debug;

use super::pokemon::sync_pokemon;
use crate::types::{
    SideCondition, Terrain, Timed, TrackedBattle, TrackedField, TrackedSide, Weather,
};

/// Reconcile the global field state against a snapshot
pub fn sync_field(
    prev: Option<&TrackedField>,
    snap: &FieldSnapshot,
    game_type: Option<GameType>,
) -> TrackedField {
    let mut field = prev.cloned().unwrap_or_default();

    if game_type.is_some() {
        field.game_type = game_type;
    }

    match snap.weather.as_deref() {
        Some("") | Some("none") => field.weather = None,
        Some(name) => {
            field.weather = Weather::from_protocol(name).map(|kind| Timed {
                kind,
                turns_left: snap.weather_turns,
            });
        }
        None => {}
    }

    match snap.terrain.as_deref() {
        Some("") | Some("none") => field.terrain = None,
        Some(name) => {
            field.terrain = Terrain::from_protocol(name).map(|kind| Timed {
                kind,
                turns_left: snap.terrain_turns,
            });
        }
        None => {}
    }

    field
}

/// Reconcile one side against a snapshot.
///
/// Pokemon are matched by ident first, then display name/species, so a
/// forme change does not duplicate a party slot. Side conditions are
/// replaced wholesale: they are fully visible battle state, not partial
/// information.
pub fn sync_side(
    prev: Option<&TrackedSide>,
    snap: &SideSnapshot,
    dex: &dyn Dex,
) -> TrackedSide {
    let mut side = match prev {
        Some(prev) => prev.clone(),
        None => TrackedSide::new(snap.player, &snap.name),
    };
    if !snap.name.is_empty() {
        side.name = snap.name.clone();
    }

    for psnap in &snap.pokemon {
        let found = if !psnap.ident.is_empty() {
            side.find_pokemon(&psnap.ident)
        } else {
            None
        };
        let found = found.or_else(|| side.find_pokemon(psnap.display_name()));

        match found {
            Some(idx) => {
                let updated = sync_pokemon(Some(&side.pokemon[idx]), psnap, dex);
                side.pokemon[idx] = updated;
            }
            None => {
                side.pokemon.push(sync_pokemon(None, psnap, dex));
            }
        }
    }

    if !snap.active.is_empty() {
        side.active = snap.active.clone();
    }

    side.conditions.clear();
    side.condition_turns.clear();
    for cond_snap in &snap.conditions {
        if let Some(cond) = SideCondition::from_protocol(&cond_snap.name) {
            side.set_condition(cond, cond_snap.layers);
            if let Some(turns) = cond_snap.turns {
                side.condition_turns.insert(cond, turns);
            }
        }
    }

    side.fainted_count = snap.fainted_count.unwrap_or_else(|| side.count_fainted());

    side
}

/// Reconcile the whole battle against a snapshot.
///
/// Returns `None` only when the snapshot's format yields no generation and
/// there is no prior state to fall back on; reconciliation itself never
/// fails. Callers must serialize invocations per battle.
pub fn sync_battle(
    prev: Option<&TrackedBattle>,
    snap: &BattleSnapshot,
    dex: &dyn Dex,
) -> Option<TrackedBattle> {
    let generation = match Generation::from_format(&snap.format) {
        Ok(generation) => generation,
        Err(_) => match prev {
            Some(prev) => prev.generation,
            None => {
                debug!(format = %snap.format, "cannot detect generation, skipping sync");
                return None;
            }
        },
    };

    let mut battle = match prev {
        Some(prev) => prev.clone(),
        None => TrackedBattle::new(generation),
    };
    battle.generation = generation;
    if !snap.format.is_empty() {
        battle.format = snap.format.clone();
    }
    if snap.game_type.is_some() {
        battle.game_type = snap.game_type;
    }
    battle.turn = snap.turn;
    if snap.perspective.is_some() {
        battle.perspective = snap.perspective;
    }

    battle.field = sync_field(Some(&battle.field), &snap.field, snap.game_type);

    for side_snap in &snap.sides {
        let idx = side_snap.player.index();
        let updated = sync_side(battle.sides[idx].as_ref(), side_snap, dex);
        battle.sides[idx] = Some(updated);
    }

    if let Some(game_type) = battle.game_type {
        let slots = game_type.active_slots();
        for side in battle.sides.iter_mut().flatten() {
            if side.active.len() != slots {
                side.set_active_slots(slots);
            }
        }
    }

    debug!(
        format = %battle.format,
        turn = battle.turn,
        "battle synced"
    );

    Some(battle)
}
