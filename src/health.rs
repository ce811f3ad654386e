//! Health levels, Ox-Body and wound penalties.
//!
//! Health is four tiers of boxes: no penalty, -1, -2 and incapacitated.
//! Ox-Body adds boxes per rank according to the character's Exalt type.
//! Damage fills the tiers in order and the first tier that still holds
//! all of it sets the penalty.

use crate::character::ExaltType;
use crate::numeric::{clamp_ox_body_rank, lenient_i32, non_negative, null_as_default};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Box counts per health tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthLevels {
    #[serde(deserialize_with = "lenient_i32")]
    pub zero: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub minus_one: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub minus_two: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub incap: i32,
}

impl HealthLevels {
    /// The track a new character starts with.
    pub const STANDARD: HealthLevels = HealthLevels::new(1, 2, 2, 1);

    /// Box counts from the no-penalty tier down to incapacitated.
    pub const fn new(zero: i32, minus_one: i32, minus_two: i32, incap: i32) -> Self {
        Self {
            zero,
            minus_one,
            minus_two,
            incap,
        }
    }

    /// Boxes across all four tiers.
    pub fn total(&self) -> i32 {
        self.zero
            .saturating_add(self.minus_one)
            .saturating_add(self.minus_two)
            .saturating_add(self.incap)
    }

    fn plus(self, other: HealthLevels) -> Self {
        Self {
            zero: self.zero.saturating_add(other.zero),
            minus_one: self.minus_one.saturating_add(other.minus_one),
            minus_two: self.minus_two.saturating_add(other.minus_two),
            incap: self.incap.saturating_add(other.incap),
        }
    }

    fn times(self, n: i32) -> Self {
        Self {
            zero: self.zero * n,
            minus_one: self.minus_one * n,
            minus_two: self.minus_two * n,
            incap: self.incap * n,
        }
    }
}

/// Damage taken, by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Damage {
    #[serde(deserialize_with = "lenient_i32")]
    pub bashing: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub lethal: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub aggravated: i32,
}

impl Damage {
    /// Sum of all three counters. Negative counters count as zero.
    pub fn total(&self) -> i32 {
        non_negative(self.bashing)
            .saturating_add(non_negative(self.lethal))
            .saturating_add(non_negative(self.aggravated))
    }
}

/// A lasting injury noted on the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Injury {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// The health section of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Health {
    /// Boxes before the Ox-Body bonus.
    #[serde(alias = "healthLevels", deserialize_with = "null_as_default")]
    pub baseline: HealthLevels,
    #[serde(deserialize_with = "null_as_default")]
    pub damage: Damage,
    /// Ox-Body rank, 0 to 5.
    #[serde(deserialize_with = "lenient_i32")]
    pub ox_body: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub injuries: Vec<Injury>,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            baseline: HealthLevels::STANDARD,
            damage: Damage::default(),
            ox_body: 0,
            injuries: Vec::new(),
        }
    }
}

const LUNAR_OX_BODY_RANK: HealthLevels = HealthLevels::new(1, 2, 2, 0);
const OX_BODY_RANK: HealthLevels = HealthLevels::new(0, 1, 2, 0);

/// Boxes granted by Ox-Body at the given rank (clamped to `[0, 5]`).
///
/// Lunars gain one 0, two -1 and two -2 boxes per rank; everyone else one
/// -1 and two -2 boxes.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{ox_body_bonus, ExaltType, HealthLevels};
///
/// assert_eq!(ox_body_bonus(ExaltType::Lunar, 3), HealthLevels::new(3, 6, 6, 0));
/// assert_eq!(ox_body_bonus(ExaltType::Solar, 2), HealthLevels::new(0, 2, 4, 0));
/// ```
pub fn ox_body_bonus(exalt_type: ExaltType, rank: i32) -> HealthLevels {
    let per_rank = match exalt_type {
        ExaltType::Lunar => LUNAR_OX_BODY_RANK,
        _ => OX_BODY_RANK,
    };
    per_rank.times(clamp_ox_body_rank(rank))
}

/// Baseline plus the Ox-Body bonus, tier by tier.
pub fn total_health_levels(
    baseline: &HealthLevels,
    exalt_type: ExaltType,
    ox_body: i32,
) -> HealthLevels {
    baseline.plus(ox_body_bonus(exalt_type, ox_body))
}

/// Numeric stand-in for [`WoundPenalty::Incapacitated`] where a number is
/// required.
pub const INCAPACITATED_MODIFIER: i32 = -4;

/// The penalty imposed by current damage.
///
/// Incapacitation is its own state, not a four-die penalty; only
/// [`WoundPenalty::modifier`] flattens it to `-4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WoundPenalty {
    /// Dice removed from pools: `0`, `-1` or `-2`.
    Dice(i32),
    Incapacitated,
}

impl WoundPenalty {
    /// The penalty as a number, `-4` when incapacitated.
    pub fn modifier(self) -> i32 {
        match self {
            WoundPenalty::Dice(n) => n,
            WoundPenalty::Incapacitated => INCAPACITATED_MODIFIER,
        }
    }

    /// True once damage has passed the -2 tier.
    pub fn is_incapacitated(self) -> bool {
        matches!(self, WoundPenalty::Incapacitated)
    }
}

impl fmt::Display for WoundPenalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WoundPenalty::Dice(n) => write!(f, "{}", n),
            WoundPenalty::Incapacitated => f.write_str("Incapacitated"),
        }
    }
}

/// Walk damage down the tiers: 0 while it fits the zero tier, -1 while it
/// fits the -1 tier as well, -2 for the -2 tier, incapacitated beyond.
///
/// Negative tier sizes count as empty tiers.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{wound_penalty, Damage, HealthLevels, WoundPenalty};
///
/// let levels = HealthLevels::new(2, 2, 2, 1);
/// let hurt = Damage { lethal: 3, ..Damage::default() };
/// assert_eq!(wound_penalty(&levels, &hurt), WoundPenalty::Dice(-1));
///
/// let down = Damage { bashing: 4, lethal: 3, ..Damage::default() };
/// assert_eq!(wound_penalty(&levels, &down), WoundPenalty::Incapacitated);
/// ```
pub fn wound_penalty(levels: &HealthLevels, damage: &Damage) -> WoundPenalty {
    let taken = damage.total();
    let ladder = [
        (levels.zero, 0),
        (levels.minus_one, -1),
        (levels.minus_two, -2),
    ];

    let mut capacity = 0i32;
    let penalty = ladder
        .into_iter()
        .find_map(|(boxes, penalty)| {
            capacity = capacity.saturating_add(boxes.max(0));
            (taken <= capacity).then_some(WoundPenalty::Dice(penalty))
        })
        .unwrap_or(WoundPenalty::Incapacitated);

    trace!("{} damage against {:?}: {}", taken, levels, penalty);
    penalty
}

/// Boxes not yet filled by damage, never below zero.
pub fn health_boxes_remaining(levels: &HealthLevels, damage: &Damage) -> i32 {
    levels.total().saturating_sub(damage.total()).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damage(total: i32) -> Damage {
        Damage {
            bashing: total,
            ..Damage::default()
        }
    }

    #[test]
    fn test_penalty_ladder() {
        let levels = HealthLevels::new(2, 2, 2, 1);
        let expected = [
            (0, WoundPenalty::Dice(0)),
            (1, WoundPenalty::Dice(0)),
            (2, WoundPenalty::Dice(0)),
            (3, WoundPenalty::Dice(-1)),
            (4, WoundPenalty::Dice(-1)),
            (5, WoundPenalty::Dice(-2)),
            (6, WoundPenalty::Dice(-2)),
            (7, WoundPenalty::Incapacitated),
            (40, WoundPenalty::Incapacitated),
        ];
        for (taken, penalty) in expected {
            assert_eq!(wound_penalty(&levels, &damage(taken)), penalty, "damage {}", taken);
        }
    }

    #[test]
    fn test_damage_types_sum() {
        let levels = HealthLevels::new(2, 2, 2, 1);
        let mixed = Damage {
            bashing: 1,
            lethal: 2,
            aggravated: 1,
        };
        assert_eq!(mixed.total(), 4);
        assert_eq!(wound_penalty(&levels, &mixed), WoundPenalty::Dice(-1));
    }

    #[test]
    fn test_negative_damage_counts_as_zero() {
        let odd = Damage {
            bashing: -3,
            lethal: 1,
            aggravated: 0,
        };
        assert_eq!(odd.total(), 1);
    }

    #[test]
    fn test_incapacitated_is_distinct() {
        let penalty = WoundPenalty::Incapacitated;
        assert_eq!(penalty.modifier(), -4);
        assert!(penalty.is_incapacitated());
        assert_ne!(penalty, WoundPenalty::Dice(-4));
        assert_eq!(penalty.to_string(), "Incapacitated");
        assert_eq!(WoundPenalty::Dice(-2).to_string(), "-2");
        assert!(!WoundPenalty::Dice(0).is_incapacitated());
    }

    #[test]
    fn test_empty_track_incapacitates_on_first_box() {
        let levels = HealthLevels::default();
        assert_eq!(wound_penalty(&levels, &damage(0)), WoundPenalty::Dice(0));
        assert_eq!(wound_penalty(&levels, &damage(1)), WoundPenalty::Incapacitated);
    }

    #[test]
    fn test_negative_tiers_are_empty() {
        let levels = HealthLevels::new(-2, 1, 0, 0);
        assert_eq!(wound_penalty(&levels, &damage(0)), WoundPenalty::Dice(0));
        assert_eq!(wound_penalty(&levels, &damage(1)), WoundPenalty::Dice(-1));
    }

    #[test]
    fn test_lunar_ox_body_progression() {
        let zero = HealthLevels::default();
        let lunar = ExaltType::Lunar;
        assert_eq!(total_health_levels(&zero, lunar, 1), HealthLevels::new(1, 2, 2, 0));
        assert_eq!(total_health_levels(&zero, lunar, 3), HealthLevels::new(3, 6, 6, 0));
        assert_eq!(total_health_levels(&zero, lunar, 5), HealthLevels::new(5, 10, 10, 0));
        assert_eq!(total_health_levels(&zero, lunar, 9), HealthLevels::new(5, 10, 10, 0));
    }

    #[test]
    fn test_generic_ox_body_progression() {
        let zero = HealthLevels::default();
        for exalt in ExaltType::ALL {
            if exalt == ExaltType::Lunar {
                continue;
            }
            assert_eq!(total_health_levels(&zero, exalt, 2), HealthLevels::new(0, 2, 4, 0));
        }
        assert_eq!(ox_body_bonus(ExaltType::Sidereal, -1), HealthLevels::default());
    }

    #[test]
    fn test_ox_body_adds_to_baseline() {
        let levels = total_health_levels(&HealthLevels::STANDARD, ExaltType::Abyssal, 1);
        assert_eq!(levels, HealthLevels::new(1, 3, 4, 1));
        assert_eq!(levels.total(), 9);
    }

    #[test]
    fn test_boxes_remaining() {
        let levels = HealthLevels::new(1, 2, 2, 1);
        assert_eq!(health_boxes_remaining(&levels, &damage(2)), 4);
        assert_eq!(health_boxes_remaining(&levels, &damage(10)), 0);
    }

    #[test]
    fn test_health_defaults_from_json() {
        let health: Health = serde_json::from_str(r#"{ "damage": { "lethal": "2" } }"#).unwrap();
        assert_eq!(health.baseline, HealthLevels::STANDARD);
        assert_eq!(health.damage.lethal, 2);
        assert_eq!(health.ox_body, 0);
    }
}
