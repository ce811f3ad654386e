//! Static value formulas.
//!
//! Defense, Evasion, Parry, Resolve, Soak and Hardness. Each formula sums
//! its terms, applies its own modifier clamped to `[-5, 5]`, and floors
//! the result at zero:
//!
//! ```text
//! Evasion  = ceil((Athletics + highest attribute) / 2) + mod
//! Parry    = ceil((Close Combat + highest attribute) / 2) + mod
//! Defense  = max(Evasion, Parry) + mod
//! Resolve  = 2 + Integrity steps + mod
//! Soak     = 1 (+1 at Physique 3) + armor soak + mod
//! Hardness = Essence + 2 + armor hardness + mod
//! ```
//!
//! Every formula is written once as a `*_breakdown` function returning a
//! [`ResolvedStat`]; the plain functions return its value.

use crate::character::{ArmorPiece, Character};
use crate::numeric::{ceil_half, clamp_modifier};
use crate::resolved::{ResolvedStat, StaticValue};
use crate::ruleset::{ResolveTable, Ruleset};
use crate::stats::{stat_total, Attributes, StatBlock};
use serde::{Deserialize, Serialize};

const RESOLVE_BASE: i32 = 2;
const SOAK_BASE: i32 = 1;
const SOAK_PHYSIQUE_THRESHOLD: i32 = 3;
const HARDNESS_BASE: i32 = 2;

/// `(integrity threshold, bonus)`, cumulative. The last step belongs to the
/// extended table only.
const RESOLVE_STEPS: [(i32, i32); 3] = [(1, 1), (3, 2), (5, 3)];

fn apply_modifier(stat: &mut ResolvedStat, raw: i32) {
    let modifier = clamp_modifier(raw);
    if modifier != 0 {
        let after = stat.value.saturating_add(modifier);
        stat.add_adjustment(format!("Modifier {:+}", modifier), after);
    }
}

fn floor_at_zero(stat: &mut ResolvedStat) {
    if stat.value < 0 {
        stat.add_adjustment("Floor at 0", 0);
    }
}

fn halved_with_attribute(
    stat: StaticValue,
    ability_name: &str,
    ability: &StatBlock,
    attributes: &Attributes,
    modifier: i32,
) -> ResolvedStat {
    let mut resolved = ResolvedStat::new(stat);
    resolved.add_source(ability_name, stat_total(ability));
    resolved.add_source("Highest attribute", attributes.highest());
    let halved = ceil_half(resolved.value);
    resolved.add_adjustment("Halved, rounded up", halved);
    apply_modifier(&mut resolved, modifier);
    floor_at_zero(&mut resolved);
    resolved
}

/// Evasion with breakdown.
pub fn evasion_breakdown(
    athletics: &StatBlock,
    attributes: &Attributes,
    modifier: i32,
) -> ResolvedStat {
    halved_with_attribute(StaticValue::Evasion, "Athletics", athletics, attributes, modifier)
}

/// `max(0, ceil((athletics + highest attribute) / 2) + clamp(modifier))`
pub fn evasion(athletics: &StatBlock, attributes: &Attributes, modifier: i32) -> i32 {
    evasion_breakdown(athletics, attributes, modifier).value
}

/// Parry with breakdown.
pub fn parry_breakdown(
    close_combat: &StatBlock,
    attributes: &Attributes,
    modifier: i32,
) -> ResolvedStat {
    halved_with_attribute(StaticValue::Parry, "Close Combat", close_combat, attributes, modifier)
}

/// `max(0, ceil((close combat + highest attribute) / 2) + clamp(modifier))`
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{parry, Attributes, StatBlock};
///
/// let attributes = Attributes {
///     force: StatBlock::with_base(3),
///     ..Attributes::default()
/// };
/// assert_eq!(parry(&StatBlock::with_base(2), &attributes, 0), 3);
/// assert_eq!(parry(&StatBlock::with_base(2), &attributes, -9), 0);
/// ```
pub fn parry(close_combat: &StatBlock, attributes: &Attributes, modifier: i32) -> i32 {
    parry_breakdown(close_combat, attributes, modifier).value
}

/// Defense with breakdown, from already-resolved Evasion and Parry.
pub fn defense_breakdown(evasion: i32, parry: i32, modifier: i32) -> ResolvedStat {
    let mut resolved = ResolvedStat::new(StaticValue::Defense);
    if evasion >= parry {
        resolved.add_source("Evasion", evasion);
    } else {
        resolved.add_source("Parry", parry);
    }
    apply_modifier(&mut resolved, modifier);
    floor_at_zero(&mut resolved);
    resolved
}

/// `max(0, max(evasion, parry) + clamp(modifier))`
pub fn defense(evasion: i32, parry: i32, modifier: i32) -> i32 {
    defense_breakdown(evasion, parry, modifier).value
}

/// Resolve with breakdown.
pub fn resolve_breakdown(
    integrity: &StatBlock,
    modifier: i32,
    table: ResolveTable,
) -> ResolvedStat {
    let steps = match table {
        ResolveTable::Standard => &RESOLVE_STEPS[..2],
        ResolveTable::Extended => &RESOLVE_STEPS[..],
    };
    let integrity = stat_total(integrity);

    let mut resolved = ResolvedStat::new(StaticValue::Resolve);
    resolved.add_source("Base", RESOLVE_BASE);
    for &(threshold, bonus) in steps {
        if integrity >= threshold {
            resolved.add_source(format!("Integrity {}+", threshold), bonus);
        }
    }
    apply_modifier(&mut resolved, modifier);
    floor_at_zero(&mut resolved);
    resolved
}

/// `max(0, 2 + integrity bonuses + clamp(modifier))`
///
/// Integrity 1 grants +1 and Integrity 3 a further +2. The extended table
/// adds +3 more at Integrity 5.
pub fn resolve(integrity: &StatBlock, modifier: i32, table: ResolveTable) -> i32 {
    resolve_breakdown(integrity, modifier, table).value
}

/// Soak with breakdown.
pub fn soak_breakdown(physique: &StatBlock, armor: &[ArmorPiece], modifier: i32) -> ResolvedStat {
    let mut resolved = ResolvedStat::new(StaticValue::Soak);
    resolved.add_source("Base", SOAK_BASE);
    if stat_total(physique) >= SOAK_PHYSIQUE_THRESHOLD {
        resolved.add_source("Physique 3+", 1);
    }
    if !armor.is_empty() {
        resolved.add_source("Armor", armor_soak(armor));
    }
    apply_modifier(&mut resolved, modifier);
    floor_at_zero(&mut resolved);
    resolved
}

/// `max(0, 1 + (physique >= 3) + Σ armor soak + clamp(modifier))`
pub fn soak(physique: &StatBlock, armor: &[ArmorPiece], modifier: i32) -> i32 {
    soak_breakdown(physique, armor, modifier).value
}

/// Hardness with breakdown.
pub fn hardness_breakdown(
    essence_rating: i32,
    armor: &[ArmorPiece],
    modifier: i32,
) -> ResolvedStat {
    let mut resolved = ResolvedStat::new(StaticValue::Hardness);
    resolved.add_source("Essence", essence_rating);
    resolved.add_source("Base", HARDNESS_BASE);
    if !armor.is_empty() {
        resolved.add_source("Armor", armor_hardness(armor));
    }
    apply_modifier(&mut resolved, modifier);
    floor_at_zero(&mut resolved);
    resolved
}

/// `max(0, essence + 2 + Σ armor hardness + clamp(modifier))`
pub fn hardness(essence_rating: i32, armor: &[ArmorPiece], modifier: i32) -> i32 {
    hardness_breakdown(essence_rating, armor, modifier).value
}

/// Total soak of all equipped armor.
pub fn armor_soak(armor: &[ArmorPiece]) -> i32 {
    armor.iter().fold(0, |sum, piece| sum.saturating_add(piece.soak))
}

/// Total hardness of all equipped armor.
pub fn armor_hardness(armor: &[ArmorPiece]) -> i32 {
    armor.iter().fold(0, |sum, piece| sum.saturating_add(piece.hardness))
}

/// Total mobility penalty of all equipped armor.
pub fn armor_mobility_penalty(armor: &[ArmorPiece]) -> i32 {
    armor.iter().fold(0, |sum, piece| sum.saturating_add(piece.mobility))
}

/// Resolve one static value for a character, with breakdown.
pub fn static_breakdown(character: &Character, rules: &Ruleset, stat: StaticValue) -> ResolvedStat {
    let abilities = &character.abilities;
    let attributes = &character.attributes;
    let mods = &character.static_modifiers;
    match stat {
        StaticValue::Evasion => evasion_breakdown(&abilities.athletics, attributes, mods.evasion),
        StaticValue::Parry => parry_breakdown(&abilities.close_combat, attributes, mods.parry),
        StaticValue::Defense => {
            let evasion = evasion(&abilities.athletics, attributes, mods.evasion);
            let parry = parry(&abilities.close_combat, attributes, mods.parry);
            defense_breakdown(evasion, parry, mods.defense)
        }
        StaticValue::Resolve => {
            resolve_breakdown(&abilities.integrity, mods.resolve, rules.resolve_table)
        }
        StaticValue::Soak => soak_breakdown(&abilities.physique, &character.armor, mods.soak),
        StaticValue::Hardness => {
            hardness_breakdown(character.essence.rating, &character.armor, mods.hardness)
        }
    }
}

/// The six static values of one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticValues {
    pub defense: i32,
    pub evasion: i32,
    pub parry: i32,
    pub resolve: i32,
    pub soak: i32,
    pub hardness: i32,
}

impl StaticValues {
    /// Look up one value by key.
    pub fn get(&self, stat: StaticValue) -> i32 {
        match stat {
            StaticValue::Defense => self.defense,
            StaticValue::Evasion => self.evasion,
            StaticValue::Parry => self.parry,
            StaticValue::Resolve => self.resolve,
            StaticValue::Soak => self.soak,
            StaticValue::Hardness => self.hardness,
        }
    }
}

/// Compute all six static values for a character.
pub fn static_values(character: &Character, rules: &Ruleset) -> StaticValues {
    let abilities = &character.abilities;
    let attributes = &character.attributes;
    let mods = &character.static_modifiers;

    let evasion = evasion(&abilities.athletics, attributes, mods.evasion);
    let parry = parry(&abilities.close_combat, attributes, mods.parry);
    StaticValues {
        defense: defense(evasion, parry, mods.defense),
        evasion,
        parry,
        resolve: resolve(&abilities.integrity, mods.resolve, rules.resolve_table),
        soak: soak(&abilities.physique, &character.armor, mods.soak),
        hardness: hardness(character.essence.rating, &character.armor, mods.hardness),
    }
}
