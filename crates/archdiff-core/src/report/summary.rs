//! Summary statistics: how many architectures are the same at each level.

use crate::diff::model::Level;
use crate::model::ComparisonRow;
use std::fmt;

/// Same-count for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: Level,
    pub same_count: usize,
    pub total: usize,
}

impl LevelSummary {
    /// Share of rows that are the same at this level, `0.0` for no rows
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.same_count as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Same: {}/{} ({:.1}%)",
            self.level.label(),
            self.same_count,
            self.total,
            self.percentage()
        )
    }
}

/// Aggregate over a whole report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    pub identical: usize,
    pub levels: Vec<LevelSummary>,
}

impl ReportSummary {
    pub fn level(&self, level: Level) -> Option<&LevelSummary> {
        self.levels.iter().find(|s| s.level == level)
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Architectures: {}", self.total)?;
        for level in &self.levels {
            writeln!(f, "{}", level)?;
        }
        write!(f, "Identical at every level: {}/{}", self.identical, self.total)
    }
}

/// Count same-flags per level.
pub fn summarize(rows: &[ComparisonRow]) -> ReportSummary {
    let total = rows.len();
    let levels = Level::ALL
        .iter()
        .map(|&level| LevelSummary {
            level,
            same_count: rows.iter().filter(|row| row.same(level)).count(),
            total,
        })
        .collect();

    ReportSummary {
        total,
        identical: rows.iter().filter(|row| row.is_identical()).count(),
        levels,
    }
}
