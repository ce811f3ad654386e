//! Numeric helpers shared by the stat formulas.
//!
//! Sheet values are plain `i32`s. Every out-of-range input is coerced
//! into range rather than rejected, because the sheet is edited live and
//! transient values (an empty number field, a pasted "3.5") must never
//! stop a recalculation.

use log::debug;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Lowest manual adjustment a static value modifier may apply.
pub const MODIFIER_MIN: i32 = -5;

/// Highest manual adjustment a static value modifier may apply.
pub const MODIFIER_MAX: i32 = 5;

/// Highest Ox-Body rank that grants health levels.
pub const OX_BODY_MAX_RANK: i32 = 5;

/// Top of the anima gauge.
pub const ANIMA_MAX: i32 = 10;

/// Clamp a raw static value modifier into `[-5, 5]`.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::numeric::clamp_modifier;
///
/// assert_eq!(clamp_modifier(3), 3);
/// assert_eq!(clamp_modifier(12), 5);
/// assert_eq!(clamp_modifier(-40), -5);
/// ```
pub fn clamp_modifier(raw: i32) -> i32 {
    coerce("modifier", raw, MODIFIER_MIN, MODIFIER_MAX)
}

/// Clamp an Ox-Body rank into `[0, 5]`.
pub fn clamp_ox_body_rank(raw: i32) -> i32 {
    coerce("ox-body rank", raw, 0, OX_BODY_MAX_RANK)
}

/// Clamp an anima value into `[0, 10]`.
pub fn clamp_anima(raw: i32) -> i32 {
    coerce("anima", raw, 0, ANIMA_MAX)
}

/// Coerce a damage counter to a non-negative value.
pub fn non_negative(raw: i32) -> i32 {
    coerce("damage", raw, 0, i32::MAX)
}

fn coerce(what: &str, raw: i32, min: i32, max: i32) -> i32 {
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        debug!("{} {} outside [{}, {}], using {}", what, raw, min, max, clamped);
    }
    clamped
}

/// Halve a value, rounding towards positive infinity.
///
/// `5 → 3`, `4 → 2`, `-1 → 0`, `-3 → -1`.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::numeric::ceil_half;
///
/// assert_eq!(ceil_half(5), 3);
/// assert_eq!(ceil_half(-3), -1);
/// ```
pub fn ceil_half(value: i32) -> i32 {
    (value as i64 + 1).div_euclid(2) as i32
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn from_float(value: f64) -> i32 {
    if value.is_finite() {
        // `as` saturates at the i32 bounds
        value.trunc() as i32
    } else {
        0
    }
}

/// Deserialize an `i32` leniently.
///
/// Integers are taken as is (saturating at the `i32` bounds), floats are
/// truncated, numeric strings are parsed. `NaN`, infinities, `null`,
/// booleans and non-numeric strings all become `0`.
///
/// Meant for `#[serde(deserialize_with = "...")]` on sheet fields.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Field {
///     #[serde(deserialize_with = "essence_sheet::numeric::lenient_i32")]
///     value: i32,
/// }
///
/// let field: Field = serde_json::from_str(r#"{ "value": "3" }"#).unwrap();
/// assert_eq!(field.value, 3);
/// let field: Field = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
/// assert_eq!(field.value, 0);
/// ```
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI32)
}

/// Deserialize a flag leniently.
///
/// Booleans are taken as is. `"true"` and `"false"` strings are parsed
/// (ignoring case), numbers are true when non-zero. `null` and anything
/// else is `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientBool)
}

/// Deserialize a field, treating an explicit `null` like a missing one.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct LenientI32;

impl<'de> Visitor<'de> for LenientI32 {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        Ok(saturate(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        Ok(saturate(v.min(i64::MAX as u64) as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        Ok(from_float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        let trimmed = v.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Ok(saturate(int));
        }
        Ok(trimmed.parse::<f64>().map(from_float).unwrap_or(0))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientI32)
    }
}

struct LenientBool;

impl<'de> Visitor<'de> for LenientBool {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
        Ok(v.is_finite() && v != 0.0)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        Ok(v.trim().eq_ignore_ascii_case("true"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientBool)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<bool, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(false)
    }

    fn visit_map<A>(self, mut map: A) -> Result<bool, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(false)
    }
}
