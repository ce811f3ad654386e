//! Rule options for stat calculation.
//!
//! Published sheets disagree on two tables: where the anima tiers break,
//! and whether Integrity 5 grants a further Resolve bonus. A [`Ruleset`]
//! picks one variant of each and is passed to every calculation that
//! depends on them. The engine does not interpret anything else.

use serde::{Deserialize, Serialize};

/// Anima tier breakpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimaTable {
    /// ≤2 Dim, ≤4 Glowing, ≤6 Burning, ≤9 Bonfire, 10 Iconic.
    #[default]
    FiveTier,
    /// ≤4 Dim, ≤6 Burning, ≤9 Bonfire, 10 Iconic. Glowing is never reached.
    FourTier,
}

/// Resolve bonus schedule by Integrity total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolveTable {
    /// +1 at Integrity 1, +2 more at 3.
    Standard,
    /// As `Standard`, plus +3 more at Integrity 5.
    #[default]
    Extended,
}

/// Rule options for a calculation.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{AnimaTable, ResolveTable, Ruleset};
///
/// let rules = Ruleset::new();
/// assert_eq!(rules.anima_table, AnimaTable::FiveTier);
/// assert_eq!(rules.resolve_table, ResolveTable::Extended);
///
/// let legacy = Ruleset::new()
///     .with_anima_table(AnimaTable::FourTier)
///     .with_resolve_table(ResolveTable::Standard);
/// assert_eq!(legacy.anima_table, AnimaTable::FourTier);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ruleset {
    pub anima_table: AnimaTable,
    pub resolve_table: ResolveTable,
}

impl Ruleset {
    /// The default rule options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different anima table.
    pub fn with_anima_table(mut self, table: AnimaTable) -> Self {
        self.anima_table = table;
        self
    }

    /// Use a different Resolve table.
    pub fn with_resolve_table(mut self, table: ResolveTable) -> Self {
        self.resolve_table = table;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_from_json() {
        let rules: Ruleset = serde_json::from_str(r#"{ "animaTable": "fourTier" }"#).unwrap();
        assert_eq!(rules.anima_table, AnimaTable::FourTier);
        assert_eq!(rules.resolve_table, ResolveTable::Extended);
    }

    #[test]
    fn test_empty_ruleset_is_default() {
        let rules: Ruleset = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, Ruleset::new());
    }
}
