//! Resolved static values with their breakdown.
//!
//! A [`ResolvedStat`] is the result of one static value formula: the final
//! number plus the terms that fed it and the value after every adjustment.
//! The sheet shows the breakdown as a tooltip; numeric call sites read
//! `value` only. Both come from the same calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six static values.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StaticValue {
    Defense,
    Evasion,
    Parry,
    Resolve,
    Soak,
    Hardness,
}

impl StaticValue {
    /// All six, in sheet order.
    pub const ALL: [StaticValue; 6] = [
        StaticValue::Defense,
        StaticValue::Evasion,
        StaticValue::Parry,
        StaticValue::Resolve,
        StaticValue::Soak,
        StaticValue::Hardness,
    ];

    /// Display name, as shown on the sheet.
    pub fn name(self) -> &'static str {
        match self {
            StaticValue::Defense => "Defense",
            StaticValue::Evasion => "Evasion",
            StaticValue::Parry => "Parry",
            StaticValue::Resolve => "Resolve",
            StaticValue::Soak => "Soak",
            StaticValue::Hardness => "Hardness",
        }
    }
}

impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A static value with full breakdown information.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{ResolvedStat, StaticValue};
///
/// let mut soak = ResolvedStat::new(StaticValue::Soak);
/// soak.add_source("Base", 1);
/// soak.add_source("Armor", 3);
/// soak.add_adjustment("Modifier -1", 3);
///
/// assert_eq!(soak.value, 3);
/// assert_eq!(soak.sources.len(), 2);
/// assert_eq!(soak.adjustments.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStat {
    pub stat: StaticValue,

    /// The final value.
    pub value: i32,

    /// Contributing terms as `(description, amount)`, summed in order.
    pub sources: Vec<(String, i32)>,

    /// Steps applied after the sources as `(description, value_after)`,
    /// in the order they were applied.
    pub adjustments: Vec<(String, i32)>,
}

impl ResolvedStat {
    /// Start an empty breakdown at zero.
    pub fn new(stat: StaticValue) -> Self {
        Self {
            stat,
            value: 0,
            sources: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    /// Add a term to the running value.
    pub fn add_source(&mut self, description: impl Into<String>, amount: i32) {
        self.value = self.value.saturating_add(amount);
        self.sources.push((description.into(), amount));
    }

    /// Record a step that replaced the running value with `value_after`.
    pub fn add_adjustment(&mut self, description: impl Into<String>, value_after: i32) {
        self.value = value_after;
        self.adjustments.push((description.into(), value_after));
    }
}

impl fmt::Display for ResolvedStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stat, self.value)
    }
}
