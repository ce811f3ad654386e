//! # essence-sheet - Derived Stats for Exalted: Essence Character Sheets
//!
//! A stat calculation engine for a character sheet editor that provides:
//! - **Deterministic** calculation (same sheet → same numbers, no state)
//! - **Forgiving** input handling (out-of-range values clamp, bad numbers
//!   read as zero, nothing panics)
//! - **Debug-friendly** static values with a full breakdown
//!
//! ## Core Concepts
//!
//! ```text
//! [StatBlock totals] → [Static values / Health / Anima] → [Dice pool phrase]
//! ```
//!
//! 1. **Totals** sum each score's base, added and bonus values
//! 2. **Static values** combine totals, armor and a clamped modifier
//! 3. **Health** applies Ox-Body to the baseline track and walks damage
//!    down the tiers to a wound penalty
//! 4. **Dice pools** combine an attribute, an ability and extra dice into
//!    a roll description
//!
//! Everything reads a [`Character`] snapshot and returns plain values.
//!
//! ## Example
//!
//! ```rust
//! use essence_sheet::*;
//!
//! let sheet = Character::new("Sun-Kissed Ruby")
//!     .with_attribute(Attribute::Force, StatBlock::with_base(3))
//!     .with_ability(Ability::CloseCombat, StatBlock::new(2, 1, 0))
//!     .with_armor(vec![ArmorPiece::new("Lamellar", ArmorClass::Heavy, 3, 2)]);
//!
//! let rules = Ruleset::new();
//! let values = sheet.static_values(&rules);
//! assert_eq!(values.parry, 3); // ceil((3 + 3) / 2)
//! assert_eq!(values.soak, 4); // 1 + 3 armor
//!
//! assert_eq!(sheet.wound_penalty(), WoundPenalty::Dice(0));
//! ```
//!
//! ## Modules
//!
//! - [`stat_id`] - Attribute and ability keys
//! - [`stats`] - Stat blocks and aggregation
//! - [`character`] - The character record
//! - [`static_values`] - Defense, Evasion, Parry, Resolve, Soak, Hardness
//! - [`resolved`] - Static values with breakdown
//! - [`health`] - Health levels, Ox-Body, wound penalties
//! - [`anima`] - Anima tiers and effects
//! - [`dice_pool`] - Dice pool assembly
//! - [`ruleset`] - Rule options
//! - [`numeric`] - Clamping and lenient number parsing
//! - [`error`] - Error types

pub mod anima;
pub mod character;
pub mod dice_pool;
pub mod error;
pub mod health;
pub mod numeric;
pub mod resolved;
pub mod ruleset;
pub mod stat_id;
pub mod static_values;
pub mod stats;

// Re-export main types for convenience
pub use character::{
    ArmorClass, ArmorPiece, Character, Essence, ExaltType, StaticModifiers, Weapon, WeaponWeight,
};
pub use error::SheetError;
pub use resolved::{ResolvedStat, StaticValue};
pub use ruleset::{AnimaTable, ResolveTable, Ruleset};
pub use stat_id::{Ability, Attribute};
pub use stats::{highest_attribute, stat_total, Abilities, Attributes, StatBlock};

// Re-export calculations
pub use anima::{active_anima_effects, anima_level, AnimaLevel};
pub use dice_pool::{assemble_dice_pool, DicePoolConfig, DicePoolResult};
pub use health::{
    health_boxes_remaining, ox_body_bonus, total_health_levels, wound_penalty, Damage, Health,
    HealthLevels, Injury, WoundPenalty,
};
pub use static_values::{
    armor_hardness, armor_mobility_penalty, armor_soak, defense, evasion, hardness, parry, resolve,
    soak, static_breakdown, static_values, StaticValues,
};
