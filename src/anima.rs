//! Anima tiers and effects.

use crate::numeric::clamp_anima;
use crate::ruleset::AnimaTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity of a character's anima banner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimaLevel {
    Dim,
    Glowing,
    Burning,
    Bonfire,
    Iconic,
}

impl AnimaLevel {
    /// Display name of the level.
    pub fn name(self) -> &'static str {
        match self {
            AnimaLevel::Dim => "Dim",
            AnimaLevel::Glowing => "Glowing",
            AnimaLevel::Burning => "Burning",
            AnimaLevel::Bonfire => "Bonfire",
            AnimaLevel::Iconic => "Iconic",
        }
    }
}

impl fmt::Display for AnimaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper bounds per tier, ascending. Anything above the last bound is
/// Iconic.
const FIVE_TIER: [(i32, AnimaLevel); 4] = [
    (2, AnimaLevel::Dim),
    (4, AnimaLevel::Glowing),
    (6, AnimaLevel::Burning),
    (9, AnimaLevel::Bonfire),
];

const FOUR_TIER: [(i32, AnimaLevel); 3] = [
    (4, AnimaLevel::Dim),
    (6, AnimaLevel::Burning),
    (9, AnimaLevel::Bonfire),
];

/// Classify an anima value. Values outside `[0, 10]` are clamped first.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{anima_level, AnimaLevel, AnimaTable};
///
/// assert_eq!(anima_level(3, AnimaTable::FiveTier), AnimaLevel::Glowing);
/// assert_eq!(anima_level(3, AnimaTable::FourTier), AnimaLevel::Dim);
/// assert_eq!(anima_level(14, AnimaTable::FiveTier), AnimaLevel::Iconic);
/// ```
pub fn anima_level(anima: i32, table: AnimaTable) -> AnimaLevel {
    let anima = clamp_anima(anima);
    let bounds: &[(i32, AnimaLevel)] = match table {
        AnimaTable::FiveTier => &FIVE_TIER,
        AnimaTable::FourTier => &FOUR_TIER,
    };
    bounds
        .iter()
        .find(|(bound, _)| anima <= *bound)
        .map(|&(_, level)| level)
        .unwrap_or(AnimaLevel::Iconic)
}

/// Rule notes unlocked at anima thresholds, cumulative.
const ANIMA_EFFECTS: [(i32, &str); 3] = [
    (3, "Caste mark visible: stealth is impossible without magic"),
    (5, "Anima banner visible for miles: the Exalt cannot hide their nature"),
    (10, "Iconic anima: the full anima power may be invoked"),
];

/// Notes for every threshold the anima value has reached, lowest first.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::active_anima_effects;
///
/// assert!(active_anima_effects(2).is_empty());
/// assert_eq!(active_anima_effects(5).len(), 2);
/// assert_eq!(active_anima_effects(10).len(), 3);
/// ```
pub fn active_anima_effects(anima: i32) -> Vec<&'static str> {
    let anima = clamp_anima(anima);
    ANIMA_EFFECTS
        .iter()
        .take_while(|(threshold, _)| anima >= *threshold)
        .map(|&(_, note)| note)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_tier_table() {
        let expected = [
            AnimaLevel::Dim,
            AnimaLevel::Dim,
            AnimaLevel::Dim,
            AnimaLevel::Glowing,
            AnimaLevel::Glowing,
            AnimaLevel::Burning,
            AnimaLevel::Burning,
            AnimaLevel::Bonfire,
            AnimaLevel::Bonfire,
            AnimaLevel::Bonfire,
            AnimaLevel::Iconic,
        ];
        for (anima, level) in expected.into_iter().enumerate() {
            assert_eq!(anima_level(anima as i32, AnimaTable::FiveTier), level);
        }
    }

    #[test]
    fn test_four_tier_table_never_glows() {
        for anima in 0..=10 {
            assert_ne!(anima_level(anima, AnimaTable::FourTier), AnimaLevel::Glowing);
        }
        assert_eq!(anima_level(4, AnimaTable::FourTier), AnimaLevel::Dim);
        assert_eq!(anima_level(5, AnimaTable::FourTier), AnimaLevel::Burning);
        assert_eq!(anima_level(9, AnimaTable::FourTier), AnimaLevel::Bonfire);
        assert_eq!(anima_level(10, AnimaTable::FourTier), AnimaLevel::Iconic);
    }

    #[test]
    fn test_out_of_range_anima_clamps() {
        assert_eq!(anima_level(-4, AnimaTable::FiveTier), AnimaLevel::Dim);
        assert_eq!(anima_level(i32::MAX, AnimaTable::FourTier), AnimaLevel::Iconic);
        assert_eq!(active_anima_effects(99).len(), 3);
        assert!(active_anima_effects(-1).is_empty());
    }

    #[test]
    fn test_effects_are_cumulative() {
        assert!(active_anima_effects(0).is_empty());
        assert_eq!(active_anima_effects(3).len(), 1);
        assert_eq!(active_anima_effects(4).len(), 1);
        assert_eq!(active_anima_effects(9).len(), 2);

        let all = active_anima_effects(10);
        assert_eq!(all[..2], active_anima_effects(6)[..]);
        assert!(all[2].starts_with("Iconic"));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AnimaLevel::Dim < AnimaLevel::Glowing);
        assert!(AnimaLevel::Bonfire < AnimaLevel::Iconic);
        assert_eq!(AnimaLevel::Bonfire.to_string(), "Bonfire");
    }
}
