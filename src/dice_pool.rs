//! Dice pool assembly.
//!
//! A pool is an attribute plus an ability, plus extra dice. Bonus dice
//! from Charms and other special effects may at most double the base pool;
//! non-bonus dice and the two stunt dice are never capped.

use crate::numeric::{lenient_bool, lenient_i32, null_as_default};
use crate::stat_id::{Ability, Attribute};
use log::trace;
use serde::{Deserialize, Serialize};

/// Dice added by a stunt.
pub const STUNT_DICE: i32 = 2;

/// The roll being prepared on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DicePoolConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub attribute: Attribute,
    #[serde(deserialize_with = "null_as_default")]
    pub ability: Ability,
    #[serde(deserialize_with = "lenient_i32")]
    pub target_number: i32,
    /// Die faces at or above this count two successes.
    #[serde(deserialize_with = "lenient_i32")]
    pub doubles_threshold: i32,
    /// Capped at the base pool: `min(bonus, base pool)`.
    #[serde(deserialize_with = "lenient_i32")]
    pub extra_dice_bonus: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub extra_dice_non_bonus: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub extra_success_bonus: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub extra_success_non_bonus: i32,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_stunted: bool,
}

impl Default for DicePoolConfig {
    fn default() -> Self {
        Self {
            attribute: Attribute::default(),
            ability: Ability::default(),
            target_number: 7,
            doubles_threshold: 10,
            extra_dice_bonus: 0,
            extra_dice_non_bonus: 0,
            extra_success_bonus: 0,
            extra_success_non_bonus: 0,
            is_stunted: false,
        }
    }
}

/// An assembled pool and its description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicePoolResult {
    /// Attribute + ability.
    pub base_pool: i32,
    /// Bonus dice actually applied after the cap. Negative when the bonus
    /// or the base pool is.
    pub capped_bonus_dice: i32,
    /// Capped bonus dice + non-bonus dice + stunt dice.
    pub extra_dice: i32,
    pub total_pool: i32,
    pub extra_successes: i32,
    /// e.g. `"Roll 10, TN 7 Double 10s +2 successes"`.
    pub action_phrase: String,
}

/// Assemble a dice pool from attribute and ability totals.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{assemble_dice_pool, DicePoolConfig};
///
/// let config = DicePoolConfig {
///     extra_dice_bonus: 10,
///     is_stunted: true,
///     ..DicePoolConfig::default()
/// };
/// let pool = assemble_dice_pool(3, 2, &config);
///
/// assert_eq!(pool.capped_bonus_dice, 5);
/// assert_eq!(pool.total_pool, 12);
/// assert_eq!(pool.action_phrase, "Roll 12, TN 7 Double 10s (Stunted)");
/// ```
pub fn assemble_dice_pool(
    attribute_total: i32,
    ability_total: i32,
    config: &DicePoolConfig,
) -> DicePoolResult {
    let base_pool = attribute_total.saturating_add(ability_total);
    let capped_bonus_dice = config.extra_dice_bonus.min(base_pool);
    let stunt_dice = if config.is_stunted { STUNT_DICE } else { 0 };
    let extra_dice = capped_bonus_dice
        .saturating_add(config.extra_dice_non_bonus)
        .saturating_add(stunt_dice);
    let total_pool = base_pool.saturating_add(extra_dice);
    let extra_successes = config
        .extra_success_bonus
        .saturating_add(config.extra_success_non_bonus);

    let mut action_phrase = format!(
        "Roll {}, TN {} Double {}s",
        total_pool, config.target_number, config.doubles_threshold
    );
    if extra_successes > 0 {
        action_phrase.push_str(&format!(" +{} successes", extra_successes));
    }
    if config.is_stunted {
        action_phrase.push_str(" (Stunted)");
    }
    trace!(
        "{} + {}: base {}, extra {}: {}",
        config.attribute,
        config.ability,
        base_pool,
        extra_dice,
        action_phrase
    );

    DicePoolResult {
        base_pool,
        capped_bonus_dice,
        extra_dice,
        total_pool,
        extra_successes,
        action_phrase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pool() {
        let pool = assemble_dice_pool(3, 2, &DicePoolConfig::default());
        assert_eq!(pool.base_pool, 5);
        assert_eq!(pool.extra_dice, 0);
        assert_eq!(pool.total_pool, 5);
        assert_eq!(pool.action_phrase, "Roll 5, TN 7 Double 10s");
    }

    #[test]
    fn test_stunted_pool() {
        let config = DicePoolConfig {
            is_stunted: true,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(3, 2, &config);
        assert_eq!(pool.extra_dice, 2);
        assert_eq!(pool.total_pool, 7);
        assert!(pool.action_phrase.contains("(Stunted)"));
    }

    #[test]
    fn test_bonus_dice_capped_at_base_pool() {
        let config = DicePoolConfig {
            extra_dice_bonus: 10,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(3, 2, &config);
        assert_eq!(pool.capped_bonus_dice, 5);
        assert_eq!(pool.total_pool, 10);
    }

    #[test]
    fn test_non_bonus_and_stunt_dice_uncapped() {
        let config = DicePoolConfig {
            extra_dice_bonus: 9,
            extra_dice_non_bonus: 6,
            is_stunted: true,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(1, 1, &config);
        assert_eq!(pool.capped_bonus_dice, 2);
        assert_eq!(pool.extra_dice, 10);
        assert_eq!(pool.total_pool, 12);
    }

    #[test]
    fn test_full_pool_phrase() {
        let config = DicePoolConfig {
            target_number: 7,
            doubles_threshold: 10,
            extra_dice_bonus: 2,
            extra_dice_non_bonus: 1,
            extra_success_bonus: 1,
            extra_success_non_bonus: 1,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(4, 3, &config);
        assert_eq!(pool.extra_successes, 2);
        assert_eq!(pool.action_phrase, "Roll 10, TN 7 Double 10s +2 successes");
    }

    #[test]
    fn test_phrase_order_successes_then_stunt() {
        let config = DicePoolConfig {
            target_number: 6,
            doubles_threshold: 9,
            extra_success_non_bonus: 1,
            is_stunted: true,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(2, 2, &config);
        assert_eq!(pool.action_phrase, "Roll 6, TN 6 Double 9s +1 successes (Stunted)");
    }

    #[test]
    fn test_negative_successes_not_shown() {
        let config = DicePoolConfig {
            extra_success_bonus: -1,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(2, 2, &config);
        assert_eq!(pool.extra_successes, -1);
        assert_eq!(pool.action_phrase, "Roll 4, TN 7 Double 10s");
    }

    #[test]
    fn test_negative_base_pool_caps_bonus_below_zero() {
        let config = DicePoolConfig {
            extra_dice_bonus: 3,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(-2, 1, &config);
        assert_eq!(pool.base_pool, -1);
        assert_eq!(pool.capped_bonus_dice, -1);
        assert_eq!(pool.extra_dice, -1);
        assert_eq!(pool.total_pool, -2);
        assert_eq!(pool.action_phrase, "Roll -2, TN 7 Double 10s");
    }

    #[test]
    fn test_negative_bonus_dice_reduce_pool() {
        let config = DicePoolConfig {
            extra_dice_bonus: -3,
            ..DicePoolConfig::default()
        };
        let pool = assemble_dice_pool(3, 2, &config);
        assert_eq!(pool.capped_bonus_dice, -3);
        assert_eq!(pool.total_pool, 2);
        assert_eq!(pool.action_phrase, "Roll 2, TN 7 Double 10s");
    }

    #[test]
    fn test_config_from_json() {
        let config: DicePoolConfig = serde_json::from_str(
            r#"{ "attribute": "finesse", "ability": "closeCombat", "extraDiceBonus": "2" }"#,
        )
        .unwrap();
        assert_eq!(config.attribute, Attribute::Finesse);
        assert_eq!(config.ability, Ability::CloseCombat);
        assert_eq!(config.extra_dice_bonus, 2);
        assert_eq!(config.target_number, 7);
        assert_eq!(config.doubles_threshold, 10);
    }

    #[test]
    fn test_config_null_fields() {
        let config: DicePoolConfig = serde_json::from_str(
            r#"{ "attribute": null, "ability": null, "isStunted": null, "targetNumber": null }"#,
        )
        .unwrap();
        assert_eq!(config.attribute, Attribute::default());
        assert_eq!(config.ability, Ability::default());
        assert!(!config.is_stunted);
        assert_eq!(config.target_number, 0);

        let config: DicePoolConfig =
            serde_json::from_str(r#"{ "isStunted": "true" }"#).unwrap();
        assert!(config.is_stunted);
    }
}
