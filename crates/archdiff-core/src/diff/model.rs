//! Level diff output types and the comparison views each level builds.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Literal difference text for a level with no divergence
pub const NO_DIFFERENCES: &str = "No differences";

/// The four comparison levels, in report column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Services,
    Components,
    Attributes,
    Configurations,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Services,
        Level::Components,
        Level::Attributes,
        Level::Configurations,
    ];

    /// Display label ("Services", "Components", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Level::Services => "Services",
            Level::Components => "Components",
            Level::Attributes => "Attributes",
            Level::Configurations => "Configurations",
        }
    }
}

/// Verdict and difference summary for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDiff {
    pub same: bool,
    pub differences: String,
}

impl LevelDiff {
    /// `same = true`, text `"No differences"`
    pub fn identical() -> Self {
        Self {
            same: true,
            differences: NO_DIFFERENCES.to_string(),
        }
    }

    /// `same = false`; entries are joined with `"; "`, or fall back to
    /// `"No differences"` when none were produced.
    pub fn different(entries: Vec<String>) -> Self {
        let differences = if entries.is_empty() {
            NO_DIFFERENCES.to_string()
        } else {
            entries.join("; ")
        };
        Self {
            same: false,
            differences,
        }
    }
}

/// All four level verdicts for one architecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    pub services: LevelDiff,
    pub components: LevelDiff,
    pub attributes: LevelDiff,
    pub configurations: LevelDiff,
}

impl LevelReport {
    pub fn level(&self, level: Level) -> &LevelDiff {
        match level {
            Level::Services => &self.services,
            Level::Components => &self.components,
            Level::Attributes => &self.attributes,
            Level::Configurations => &self.configurations,
        }
    }
}

/// Configuration view of one component, compared as a whole
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ComponentConfiguration<'a> {
    pub instances: i64,
    pub sort: &'a [Value],
    pub attributes: BTreeMap<&'a str, AttributeConfiguration<'a>>,
}

/// Configuration view of one attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AttributeConfiguration<'a> {
    pub values: Option<&'a Value>,
    pub constraint: Option<&'a Value>,
    pub unit: Option<&'a Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_without_entries_keeps_literal_text() {
        let diff = LevelDiff::different(Vec::new());
        assert!(!diff.same);
        assert_eq!(diff.differences, NO_DIFFERENCES);
    }

    #[test]
    fn test_different_joins_entries() {
        let diff = LevelDiff::different(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(diff.differences, "a; b");
    }

    #[test]
    fn test_levels_in_column_order() {
        let labels: Vec<_> = Level::ALL.iter().map(Level::label).collect();
        assert_eq!(
            labels,
            vec!["Services", "Components", "Attributes", "Configurations"]
        );
    }
}
