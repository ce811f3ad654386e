//! Stat blocks and their aggregation.
//!
//! Every attribute and ability score is a [`StatBlock`]: the value bought
//! at creation, the dots added through advancement, and a situational
//! bonus. Totals are plain sums; the `base + added <= 5` rule is enforced
//! by the editor, not here.

use crate::numeric::{lenient_i32, null_as_default};
use crate::stat_id::{Ability, Attribute};
use serde::{Deserialize, Serialize};

/// The base/added/bonus triple behind a single score.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::StatBlock;
///
/// let block = StatBlock::new(3, 1, -1);
/// assert_eq!(block.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(default, deserialize_with = "lenient_i32")]
    pub base: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub added: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub bonus: i32,
}

impl StatBlock {
    /// A block from its three parts.
    pub fn new(base: i32, added: i32, bonus: i32) -> Self {
        Self { base, added, bonus }
    }

    /// A block with only a base value.
    pub fn with_base(base: i32) -> Self {
        Self::new(base, 0, 0)
    }

    /// `base + added + bonus`, unclamped.
    pub fn total(&self) -> i32 {
        stat_total(self)
    }
}

/// Sum a stat block. Negative totals are kept as they are.
pub fn stat_total(block: &StatBlock) -> i32 {
    block
        .base
        .saturating_add(block.added)
        .saturating_add(block.bonus)
}

/// The three attribute scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    #[serde(deserialize_with = "null_as_default")]
    pub force: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub finesse: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub fortitude: StatBlock,
}

impl Attributes {
    /// The block behind one attribute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essence_sheet::{Attribute, Attributes, StatBlock};
    ///
    /// let mut attributes = Attributes::default();
    /// *attributes.get_mut(Attribute::Fortitude) = StatBlock::with_base(3);
    /// assert_eq!(attributes.get(Attribute::Fortitude).base, 3);
    /// assert_eq!(attributes.total(Attribute::Force), 0);
    /// ```
    pub fn get(&self, attribute: Attribute) -> &StatBlock {
        match attribute {
            Attribute::Force => &self.force,
            Attribute::Finesse => &self.finesse,
            Attribute::Fortitude => &self.fortitude,
        }
    }

    /// Mutable access to the block behind one attribute.
    pub fn get_mut(&mut self, attribute: Attribute) -> &mut StatBlock {
        match attribute {
            Attribute::Force => &mut self.force,
            Attribute::Finesse => &mut self.finesse,
            Attribute::Fortitude => &mut self.fortitude,
        }
    }

    /// Total of a single attribute.
    pub fn total(&self, attribute: Attribute) -> i32 {
        stat_total(self.get(attribute))
    }

    /// Highest of the three totals.
    pub fn highest(&self) -> i32 {
        highest_attribute(self)
    }
}

/// The largest attribute total. Only the number matters, not which
/// attribute produced it.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{highest_attribute, Attributes, StatBlock};
///
/// let attributes = Attributes {
///     force: StatBlock::with_base(2),
///     finesse: StatBlock::new(3, 1, 0),
///     fortitude: StatBlock::with_base(1),
/// };
/// assert_eq!(highest_attribute(&attributes), 4);
/// ```
pub fn highest_attribute(attributes: &Attributes) -> i32 {
    Attribute::ALL
        .into_iter()
        .map(|attr| attributes.total(attr))
        .max()
        .unwrap_or_default()
}

/// The fourteen ability scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Abilities {
    #[serde(deserialize_with = "null_as_default")]
    pub athletics: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub awareness: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub close_combat: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub craft: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub embassy: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub integrity: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub navigate: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub performance: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub physique: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub presence: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub ranged_combat: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub sagacity: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub stealth: StatBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub war: StatBlock,
}

impl Abilities {
    /// The block behind one ability.
    pub fn get(&self, ability: Ability) -> &StatBlock {
        match ability {
            Ability::Athletics => &self.athletics,
            Ability::Awareness => &self.awareness,
            Ability::CloseCombat => &self.close_combat,
            Ability::Craft => &self.craft,
            Ability::Embassy => &self.embassy,
            Ability::Integrity => &self.integrity,
            Ability::Navigate => &self.navigate,
            Ability::Performance => &self.performance,
            Ability::Physique => &self.physique,
            Ability::Presence => &self.presence,
            Ability::RangedCombat => &self.ranged_combat,
            Ability::Sagacity => &self.sagacity,
            Ability::Stealth => &self.stealth,
            Ability::War => &self.war,
        }
    }

    /// Mutable access to the block behind one ability.
    pub fn get_mut(&mut self, ability: Ability) -> &mut StatBlock {
        match ability {
            Ability::Athletics => &mut self.athletics,
            Ability::Awareness => &mut self.awareness,
            Ability::CloseCombat => &mut self.close_combat,
            Ability::Craft => &mut self.craft,
            Ability::Embassy => &mut self.embassy,
            Ability::Integrity => &mut self.integrity,
            Ability::Navigate => &mut self.navigate,
            Ability::Performance => &mut self.performance,
            Ability::Physique => &mut self.physique,
            Ability::Presence => &mut self.presence,
            Ability::RangedCombat => &mut self.ranged_combat,
            Ability::Sagacity => &mut self.sagacity,
            Ability::Stealth => &mut self.stealth,
            Ability::War => &mut self.war,
        }
    }

    /// Total of a single ability.
    pub fn total(&self, ability: Ability) -> i32 {
        stat_total(self.get(ability))
    }
}
