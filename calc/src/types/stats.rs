//! Stat computation

use porygon_data::{Generation, Nature, Stat};

/// Compute a non-HP stat from its inputs.
///
/// Uses the shared formula `floor((2*base + iv + floor(ev/4)) * level/100) + 5`
/// with the nature modifier applied afterward. DV-era generations use the
/// same shape under the `iv = 2*dv` convention (max DV 15 = IV 30) with
/// stat experience standing in for EVs, so no separate legacy branch is
/// needed here; natures simply do not exist before generation 3.
pub fn calc_stat(
    generation: Generation,
    stat: Stat,
    base: u16,
    iv: u16,
    ev: u16,
    level: u8,
    nature: Option<Nature>,
) -> u16 {
    let level = level as u32;
    let raw = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level / 100 + 5;

    let modified = match nature {
        Some(nature) if generation.has_natures() && !nature.is_neutral() => {
            if nature.boosts() == stat {
                raw * 110 / 100
            } else if nature.drops() == stat {
                raw * 90 / 100
            } else {
                raw
            }
        }
        _ => raw,
    };

    modified as u16
}

/// Compute maximum HP from its inputs.
///
/// `fixed_max` short-circuits the formula for species with a pinned HP
/// total.
pub fn calc_hp(base: u16, iv: u16, ev: u16, level: u8, fixed_max: Option<u16>) -> u16 {
    if let Some(fixed) = fixed_max {
        return fixed;
    }
    let level = level as u32;
    ((2 * base as u32 + iv as u32 + ev as u32 / 4) * level / 100 + level + 10) as u16
}
