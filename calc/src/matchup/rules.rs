//! Ability and volatile special-case rules.
//!
//! Each rule is a named transform over the working engine record, applied
//! in the fixed order of [`RULES`]. Keeping the order explicit here (rather
//! than scattered conditionals) makes the precedence testable: toggle
//! substitution runs before aura cancellation, type suppression before the
//! stat swaps, and the legacy coupling always runs last.

use porygon_data::{Generation, Stat, to_id};

use super::engine::CalcMon;
use crate::types::{TrackedPokemon, Volatile};

/// Neutral stand-in with no damage-relevant effect in any supported
/// generation
pub const PLACEHOLDER_ABILITY: &str = "Pressure";

/// Abilities whose game effect can be manually switched on/off
/// independently of their normal activation conditions
const TOGGLEABLE_ABILITIES: &[&str] = &[
    "beadsofruin",
    "flashfire",
    "minus",
    "multiscale",
    "plus",
    "protosynthesis",
    "quarkdrive",
    "shadowshield",
    "slowstart",
    "stakeout",
    "swordofruin",
    "tabletsofruin",
    "unburden",
    "vesselofruin",
];

/// One-shot switch-in stat boosts the client already reflects in the
/// reported stat line
const SWITCH_IN_BOOST_ABILITIES: &[&str] = &["dauntlessshield", "intrepidsword"];

/// The four "aura" abilities; two identical auras cancel each other
const RUIN_ABILITIES: &[&str] = &[
    "beadsofruin",
    "swordofruin",
    "tabletsofruin",
    "vesselofruin",
];

/// Damage-reduction-at-full-HP abilities
const MULTISCALE_ABILITIES: &[&str] = &["multiscale", "shadowshield"];

/// Abilities that change the user's own type on move use
const SELF_TYPE_CHANGE_ABILITIES: &[&str] = &["libero", "protean"];

pub(crate) fn is_toggleable(id: &str) -> bool {
    TOGGLEABLE_ABILITIES.contains(&id)
}

pub(crate) fn is_ruin(id: &str) -> bool {
    RUIN_ABILITIES.contains(&id)
}

pub(crate) fn is_multiscale_class(id: &str) -> bool {
    MULTISCALE_ABILITIES.contains(&id)
}

/// Context a rule may read
pub(crate) struct RuleCtx<'a> {
    pub generation: Generation,
    pub mon: &'a TrackedPokemon,
    /// The opposing combatant's resolved ability id
    pub opponent_ability: Option<String>,
}

/// A named transform over the working engine record
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(&mut CalcMon, &RuleCtx),
}

/// All rules, in application order
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "toggle-substitution",
        apply: toggle_substitution,
    },
    Rule {
        name: "switch-in-boost-neutralization",
        apply: switch_in_boost_neutralization,
    },
    Rule {
        name: "ruin-pair-cancellation",
        apply: ruin_pair_cancellation,
    },
    Rule {
        name: "self-type-change-suppression",
        apply: self_type_change_suppression,
    },
    Rule {
        name: "power-trick-swap",
        apply: power_trick_swap,
    },
    Rule {
        name: "legacy-special-coupling",
        apply: legacy_special_coupling,
    },
];

/// Apply every rule in order
pub(crate) fn apply_rules(calc: &mut CalcMon, ctx: &RuleCtx) {
    for rule in RULES {
        (rule.apply)(calc, ctx);
    }
}

/// A pseudo-toggleable ability that is toggled off is replaced with the
/// neutral placeholder so the engine does not apply its effect; the toggle
/// state is still reported either way.
fn toggle_substitution(calc: &mut CalcMon, ctx: &RuleCtx) {
    let Some(id) = calc.ability.as_deref().map(to_id) else {
        return;
    };
    if is_toggleable(&id) {
        calc.ability_on = Some(ctx.mon.ability_toggled);
        if !ctx.mon.ability_toggled {
            calc.ability = Some(PLACEHOLDER_ABILITY.to_string());
        }
    }
}

/// Switch-in stat boosts are already baked into the reported stat line, so
/// the engine must not apply them again.
fn switch_in_boost_neutralization(calc: &mut CalcMon, _ctx: &RuleCtx) {
    if calc.has_ability(SWITCH_IN_BOOST_ABILITIES.iter().copied()) {
        calc.ability = Some(PLACEHOLDER_ABILITY.to_string());
    }
}

/// Two combatants carrying the identical aura ability cancel each other;
/// the engine does not model that rule, so both sides get neutralized.
/// Each side's record is built with the other as the opponent, so applying
/// this symmetrically neutralizes both.
fn ruin_pair_cancellation(calc: &mut CalcMon, ctx: &RuleCtx) {
    let own = ctx.mon.resolved_ability_id();
    if let (Some(own), Some(opp)) = (own, ctx.opponent_ability.as_deref())
        && is_ruin(&own)
        && own == opp
    {
        calc.ability = Some(PLACEHOLDER_ABILITY.to_string());
    }
}

/// A type override on a self-type-changing combatant is withheld until the
/// temporary type-change state is actually recorded, so the engine keeps
/// applying the same-type bonus from the original typing.
fn self_type_change_suppression(calc: &mut CalcMon, ctx: &RuleCtx) {
    let Some(id) = ctx.mon.resolved_ability_id() else {
        return;
    };
    if SELF_TYPE_CHANGE_ABILITIES.contains(&id.as_str())
        && ctx.mon.dirty_types.is_set()
        && !ctx.mon.has_volatile(&Volatile::TypeChange)
    {
        calc.types = ctx.mon.types;
    }
}

/// Power Trick permanently exchanges Attack and Defense.
fn power_trick_swap(calc: &mut CalcMon, ctx: &RuleCtx) {
    if ctx.mon.has_volatile(&Volatile::PowerTrick) {
        std::mem::swap(&mut calc.base_stats.atk, &mut calc.base_stats.def);
    }
}

/// The shared Special DV makes SpD mirror SpA in gens 1-2; generation 1 has a
/// single Special stat outright, coupling EVs, boosts, and the base stat
/// as well.
fn legacy_special_coupling(calc: &mut CalcMon, ctx: &RuleCtx) {
    if ctx.generation.has_shared_special_dv() {
        calc.ivs.spd = calc.ivs.spa;
    }
    if !ctx.generation.has_split_special() {
        calc.evs.spd = calc.evs.spa;
        calc.boosts.set(Stat::Spd, calc.boosts.get(Stat::Spa));
        if calc.base_stats.spd != calc.base_stats.spa {
            calc.base_stats.spd = calc.base_stats.spa;
        }
    }
}
