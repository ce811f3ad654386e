//! The character record.
//!
//! A [`Character`] is an immutable snapshot of one sheet. Edits produce a
//! new record through the `with_*` helpers; the engine only ever reads.
//! Fields the engine does not use (charms, spells, advancement log,
//! social data, rulings, ...) are kept verbatim in [`Character::extra`] so
//! a sheet survives a read/write cycle unchanged.

use crate::anima::{active_anima_effects, anima_level, AnimaLevel};
use crate::dice_pool::{assemble_dice_pool, DicePoolConfig, DicePoolResult};
use crate::error::SheetError;
use crate::health::{total_health_levels, Damage, Health, HealthLevels, WoundPenalty};
use crate::numeric::{lenient_bool, lenient_i32, null_as_default};
use crate::ruleset::Ruleset;
use crate::stat_id::{normalize, Ability, Attribute};
use crate::static_values::{static_values, StaticValues};
use crate::stats::{Abilities, Attributes, StatBlock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character template. Selects the Ox-Body health table.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExaltType {
    #[default]
    Solar,
    Lunar,
    #[serde(alias = "dragon-blooded", alias = "dragonblooded")]
    DragonBlooded,
    Sidereal,
    Abyssal,
    Alchemical,
    Exigent,
}

impl ExaltType {
    /// Every Exalt type.
    pub const ALL: [ExaltType; 7] = [
        ExaltType::Solar,
        ExaltType::Lunar,
        ExaltType::DragonBlooded,
        ExaltType::Sidereal,
        ExaltType::Abyssal,
        ExaltType::Alchemical,
        ExaltType::Exigent,
    ];

    /// Display name, e.g. `"Dragon-Blooded"`.
    pub fn name(self) -> &'static str {
        match self {
            ExaltType::Solar => "Solar",
            ExaltType::Lunar => "Lunar",
            ExaltType::DragonBlooded => "Dragon-Blooded",
            ExaltType::Sidereal => "Sidereal",
            ExaltType::Abyssal => "Abyssal",
            ExaltType::Alchemical => "Alchemical",
            ExaltType::Exigent => "Exigent",
        }
    }
}

impl fmt::Display for ExaltType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExaltType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ExaltType::ALL
            .into_iter()
            .find(|exalt| normalize(exalt.name()) == wanted)
            .ok_or_else(|| SheetError::UnknownExaltType(s.to_string()))
    }
}

/// Mote pool, anima gauge and Essence rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Essence {
    #[serde(deserialize_with = "lenient_i32")]
    pub motes: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub commitments: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub spent: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub anima: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub rating: i32,
}

impl Essence {
    /// Motes left to spend: `motes - commitments - spent`.
    pub fn available_motes(&self) -> i32 {
        self.motes
            .saturating_sub(self.commitments)
            .saturating_sub(self.spent)
    }

    /// Motes not tied up in commitments: `motes - commitments`.
    pub fn uncommitted_motes(&self) -> i32 {
        self.motes.saturating_sub(self.commitments)
    }
}

/// Raw manual adjustments to the six static values.
///
/// Stored unclamped; each formula clamps its modifier to `[-5, 5]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticModifiers {
    #[serde(deserialize_with = "lenient_i32")]
    pub defense: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub evasion: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub parry: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub resolve: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub soak: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub hardness: i32,
}

/// Light or heavy armor. Stored on the sheet, not used by any formula.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmorClass {
    #[default]
    Light,
    Heavy,
}

/// A worn armor piece. Every equipped piece adds its soak, hardness and
/// mobility penalty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmorPiece {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", alias = "armorClass", deserialize_with = "null_as_default")]
    pub armor_class: ArmorClass,
    #[serde(deserialize_with = "lenient_i32")]
    pub soak: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub hardness: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub mobility: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl ArmorPiece {
    /// A piece with no mobility penalty or tags. The id is derived from
    /// the name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essence_sheet::{ArmorClass, ArmorPiece};
    ///
    /// let piece = ArmorPiece::new("Silk Armor", ArmorClass::Light, 2, 0);
    /// assert_eq!(piece.id, "silkarmor");
    /// assert_eq!(piece.mobility, 0);
    /// ```
    pub fn new(name: impl Into<String>, armor_class: ArmorClass, soak: i32, hardness: i32) -> Self {
        let name = name.into();
        Self {
            id: normalize(&name),
            name,
            armor_class,
            soak,
            hardness,
            ..Self::default()
        }
    }
}

/// Weapon weight category.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponWeight {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// A carried weapon. The engine stores weapons but derives nothing from
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weapon {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: WeaponWeight,
    #[serde(deserialize_with = "lenient_i32")]
    pub accuracy: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub damage: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub defense: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub overwhelming: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_artifact: bool,
}

/// One character sheet.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{Ability, Attribute, Character, Ruleset, StatBlock};
///
/// let hero = Character::new("Harmonious Jade")
///     .with_attribute(Attribute::Finesse, StatBlock::with_base(4))
///     .with_ability(Ability::Athletics, StatBlock::with_base(3));
///
/// let values = hero.static_values(&Ruleset::new());
/// assert_eq!(values.evasion, 4); // ceil((3 + 4) / 2)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exalt_type: ExaltType,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Attributes,
    #[serde(deserialize_with = "null_as_default")]
    pub abilities: Abilities,
    #[serde(deserialize_with = "null_as_default")]
    pub essence: Essence,
    #[serde(rename = "staticValues", deserialize_with = "null_as_default")]
    pub static_modifiers: StaticModifiers,
    #[serde(deserialize_with = "null_as_default")]
    pub health: Health,
    #[serde(deserialize_with = "null_as_default")]
    pub armor: Vec<ArmorPiece>,
    #[serde(deserialize_with = "null_as_default")]
    pub weapons: Vec<Weapon>,
    #[serde(deserialize_with = "null_as_default")]
    pub dice_pool: DicePoolConfig,
    /// Sheet data the engine does not read, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Character {
    /// A fresh character: every score at zero, standard health track.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: normalize(&name),
            name,
            ..Self::default()
        }
    }

    /// Read a character from the sheet's JSON form.
    ///
    /// Missing sections default to zero; malformed numbers coerce to zero.
    /// Only text that is not a JSON object of the right shape is an error.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the character in the sheet's JSON form.
    pub fn to_json(&self) -> Result<String, SheetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with one attribute block replaced.
    pub fn with_attribute(&self, attribute: Attribute, block: StatBlock) -> Self {
        let mut next = self.clone();
        *next.attributes.get_mut(attribute) = block;
        next
    }

    /// Copy with one ability block replaced.
    pub fn with_ability(&self, ability: Ability, block: StatBlock) -> Self {
        let mut next = self.clone();
        *next.abilities.get_mut(ability) = block;
        next
    }

    /// Copy with a different Exalt type. Changes the Ox-Body table.
    pub fn with_exalt_type(&self, exalt_type: ExaltType) -> Self {
        Self {
            exalt_type,
            ..self.clone()
        }
    }

    /// Copy with the essence section replaced.
    pub fn with_essence(&self, essence: Essence) -> Self {
        Self {
            essence,
            ..self.clone()
        }
    }

    /// Copy with new raw static value modifiers.
    pub fn with_static_modifiers(&self, static_modifiers: StaticModifiers) -> Self {
        Self {
            static_modifiers,
            ..self.clone()
        }
    }

    /// Replace the equipped armor.
    pub fn with_armor(&self, armor: Vec<ArmorPiece>) -> Self {
        Self {
            armor,
            ..self.clone()
        }
    }

    /// Copy with the whole health section replaced.
    pub fn with_health(&self, health: Health) -> Self {
        Self {
            health,
            ..self.clone()
        }
    }

    /// Copy with new damage, keeping the rest of the health section.
    pub fn with_damage(&self, damage: Damage) -> Self {
        let mut next = self.clone();
        next.health.damage = damage;
        next
    }

    /// Copy with a different roll selected.
    pub fn with_dice_pool(&self, dice_pool: DicePoolConfig) -> Self {
        Self {
            dice_pool,
            ..self.clone()
        }
    }

    /// All six static values.
    pub fn static_values(&self, rules: &Ruleset) -> StaticValues {
        static_values(self, rules)
    }

    /// Health levels after the Ox-Body bonus for this character's type.
    pub fn health_levels(&self) -> HealthLevels {
        total_health_levels(&self.health.baseline, self.exalt_type, self.health.ox_body)
    }

    /// Current wound penalty from recorded damage.
    pub fn wound_penalty(&self) -> WoundPenalty {
        crate::health::wound_penalty(&self.health_levels(), &self.health.damage)
    }

    /// Anima level under the configured table.
    pub fn anima_level(&self, rules: &Ruleset) -> AnimaLevel {
        anima_level(self.essence.anima, rules.anima_table)
    }

    /// Anima effects active at the current anima.
    pub fn anima_effects(&self) -> Vec<&'static str> {
        active_anima_effects(self.essence.anima)
    }

    /// Assemble the configured dice pool.
    pub fn dice_pool(&self) -> DicePoolResult {
        let config = &self.dice_pool;
        assemble_dice_pool(
            self.attributes.total(config.attribute),
            self.abilities.total(config.ability),
            config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exalt_type_parse() {
        assert_eq!("lunar".parse::<ExaltType>().unwrap(), ExaltType::Lunar);
        assert_eq!(
            "Dragon-Blooded".parse::<ExaltType>().unwrap(),
            ExaltType::DragonBlooded
        );
        assert_eq!(
            "fae".parse::<ExaltType>(),
            Err(SheetError::UnknownExaltType("fae".to_string()))
        );
    }

    #[test]
    fn test_exalt_type_aliases() {
        let parsed: ExaltType = serde_json::from_str("\"dragon-blooded\"").unwrap();
        assert_eq!(parsed, ExaltType::DragonBlooded);
        let parsed: ExaltType = serde_json::from_str("\"dragonBlooded\"").unwrap();
        assert_eq!(parsed, ExaltType::DragonBlooded);
    }

    #[test]
    fn test_essence_readouts() {
        let essence = Essence {
            motes: 10,
            commitments: 3,
            spent: 4,
            ..Essence::default()
        };
        assert_eq!(essence.available_motes(), 3);
        assert_eq!(essence.uncommitted_motes(), 7);
    }

    #[test]
    fn test_with_helpers_leave_original_untouched() {
        let original = Character::new("Swan");
        let edited = original
            .with_attribute(Attribute::Force, StatBlock::with_base(3))
            .with_damage(Damage {
                lethal: 2,
                ..Damage::default()
            });

        assert_eq!(original.attributes.force, StatBlock::default());
        assert_eq!(original.health.damage, Damage::default());
        assert_eq!(edited.attributes.force.base, 3);
        assert_eq!(edited.health.damage.lethal, 2);
        assert_eq!(edited.name, "Swan");
    }

    #[test]
    fn test_with_health_feeds_health_levels() {
        let lunar = Character::new("Swan")
            .with_exalt_type(ExaltType::Lunar)
            .with_health(Health {
                ox_body: 3,
                ..Health::default()
            });
        assert_eq!(lunar.health_levels(), HealthLevels::new(4, 8, 8, 1));
        assert_eq!(lunar.wound_penalty(), WoundPenalty::Dice(0));
    }

    #[test]
    fn test_new_character_id() {
        let character = Character::new("Harmonious Jade");
        assert_eq!(character.id, "harmoniousjade");
        assert_eq!(character.exalt_type, ExaltType::Solar);
    }

    #[test]
    fn test_armor_json_type_field() {
        let armor: ArmorPiece =
            serde_json::from_str(r#"{ "name": "Breastplate", "type": "heavy", "soak": "3" }"#)
                .unwrap();
        assert_eq!(armor.armor_class, ArmorClass::Heavy);
        assert_eq!(armor.soak, 3);
        assert!(armor.tags.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Character::from_json("42"),
            Err(SheetError::InvalidCharacter(_))
        ));
        assert!(Character::from_json("{ \"name\": ").is_err());
    }
}
