//! Preset matching.
//!
//! Decides whether a named set configuration is currently applied to a
//! tracked combatant, given override layering and partial information.
//! Pure and total: any missing required datum yields `false`, never an
//! error.

use porygon_data::{Generation, Stat, to_id};
use porygon_sets::Preset;

use crate::types::TrackedPokemon;

/// Check whether a preset is currently applied to a combatant.
///
/// Move matching is directional: every preset move must appear in the
/// combatant's move set, but the combatant may know more. A combatant that
/// has revealed one of four preset moves is still "under" that preset.
pub fn matches_preset(generation: Generation, mon: &TrackedPokemon, preset: &Preset) -> bool {
    if preset.source.is_none() || !mon.has_identity() {
        return false;
    }

    // Natures and abilities only exist outside the legacy era
    if generation.has_natures() {
        if mon.resolved_nature() != preset.nature {
            return false;
        }
        if opt_id(mon.resolved_ability()) != opt_id(preset.ability.as_deref()) {
            return false;
        }
    }

    // Items exist from generation 2; a consumed/knocked-off item still matches
    // through the previous item so presets survive mid-battle removal
    if generation.has_items() {
        let held = if item_removed(mon) {
            mon.prev_item.as_deref()
        } else {
            mon.resolved_item()
        };
        if opt_id(held) != opt_id(preset.item.as_deref()) {
            return false;
        }
    }

    if !preset.moves.iter().all(|name| mon.knows_move(name)) {
        return false;
    }

    let default_iv = generation.default_iv();
    let preset_ivs = preset.ivs.unwrap_or_default().or_default(default_iv);
    let mon_ivs = mon.resolved_ivs(generation);
    for stat in Stat::ALL {
        // gens with a shared Special DV have no independent SpD value
        if stat == Stat::Spd && generation.has_shared_special_dv() {
            continue;
        }
        if preset_ivs.get(stat) != mon_ivs.get(stat) {
            return false;
        }
    }

    // Stat experience makes EV spreads meaningless in the legacy era
    if !generation.is_legacy() {
        let default_ev = generation.default_ev();
        let preset_evs = preset.evs.unwrap_or_default().or_default(default_ev);
        let mon_evs = mon.resolved_evs(generation);
        for stat in Stat::ALL {
            if preset_evs.get(stat) != mon_evs.get(stat) {
                return false;
            }
        }
    }

    true
}

fn opt_id(value: Option<&str>) -> Option<String> {
    value.map(to_id).filter(|id| !id.is_empty())
}

fn item_removed(mon: &TrackedPokemon) -> bool {
    mon.item_consumed || (mon.item.is_none() && mon.prev_item.is_some())
}
