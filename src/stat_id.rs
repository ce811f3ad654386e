//! Attribute and ability keys.
//!
//! The sheet has a fixed set of three attributes and fourteen abilities.
//! Keys serialize in camelCase (`"closeCombat"`) to match the sheet's JSON
//! and parse leniently from user-facing names (`"Close Combat"`,
//! `"close_combat"`).

use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three attributes.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::Attribute;
///
/// let force: Attribute = "Force".parse().unwrap();
/// assert_eq!(force, Attribute::Force);
/// assert_eq!(force.to_string(), "Force");
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Force,
    Finesse,
    #[default]
    Fortitude,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 3] = [Attribute::Force, Attribute::Finesse, Attribute::Fortitude];

    /// Display name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Force => "Force",
            Attribute::Finesse => "Finesse",
            Attribute::Fortitude => "Fortitude",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Attribute::ALL
            .into_iter()
            .find(|attr| normalize(attr.name()) == wanted)
            .ok_or_else(|| SheetError::UnknownAttribute(s.to_string()))
    }
}

/// One of the fourteen abilities.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::Ability;
///
/// assert_eq!("close_combat".parse::<Ability>().unwrap(), Ability::CloseCombat);
/// assert_eq!("Ranged Combat".parse::<Ability>().unwrap(), Ability::RangedCombat);
/// assert_eq!(Ability::CloseCombat.to_string(), "Close Combat");
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    #[default]
    Athletics,
    Awareness,
    CloseCombat,
    Craft,
    Embassy,
    Integrity,
    Navigate,
    Performance,
    Physique,
    Presence,
    RangedCombat,
    Sagacity,
    Stealth,
    War,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 14] = [
        Ability::Athletics,
        Ability::Awareness,
        Ability::CloseCombat,
        Ability::Craft,
        Ability::Embassy,
        Ability::Integrity,
        Ability::Navigate,
        Ability::Performance,
        Ability::Physique,
        Ability::Presence,
        Ability::RangedCombat,
        Ability::Sagacity,
        Ability::Stealth,
        Ability::War,
    ];

    /// Display name of this ability.
    pub fn name(self) -> &'static str {
        match self {
            Ability::Athletics => "Athletics",
            Ability::Awareness => "Awareness",
            Ability::CloseCombat => "Close Combat",
            Ability::Craft => "Craft",
            Ability::Embassy => "Embassy",
            Ability::Integrity => "Integrity",
            Ability::Navigate => "Navigate",
            Ability::Performance => "Performance",
            Ability::Physique => "Physique",
            Ability::Presence => "Presence",
            Ability::RangedCombat => "Ranged Combat",
            Ability::Sagacity => "Sagacity",
            Ability::Stealth => "Stealth",
            Ability::War => "War",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Ability::ALL
            .into_iter()
            .find(|ability| normalize(ability.name()) == wanted)
            .ok_or_else(|| SheetError::UnknownAbility(s.to_string()))
    }
}

/// Lowercase and drop separators so `"Close Combat"`, `"closeCombat"` and
/// `"close_combat"` compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
