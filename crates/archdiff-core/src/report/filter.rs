//! Row filters: difference filter, identifier search and row limit.

use crate::diff::model::Level;
use crate::errors::ArchDiffError;
use crate::model::ComparisonRow;
use std::str::FromStr;

/// Which rows to keep, by their same-flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFilter {
    #[default]
    All,
    /// Same at all four levels
    OnlyIdentical,
    /// Different at one level or more
    OnlyDifferent,
    ServicesDifferent,
    ComponentsDifferent,
    AttributesDifferent,
    ConfigurationsDifferent,
}

impl RowFilter {
    pub fn matches(&self, row: &ComparisonRow) -> bool {
        match self {
            RowFilter::All => true,
            RowFilter::OnlyIdentical => row.is_identical(),
            RowFilter::OnlyDifferent => !row.is_identical(),
            RowFilter::ServicesDifferent => !row.same(Level::Services),
            RowFilter::ComponentsDifferent => !row.same(Level::Components),
            RowFilter::AttributesDifferent => !row.same(Level::Attributes),
            RowFilter::ConfigurationsDifferent => !row.same(Level::Configurations),
        }
    }
}

impl FromStr for RowFilter {
    type Err = ArchDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(RowFilter::All),
            "identical" => Ok(RowFilter::OnlyIdentical),
            "different" => Ok(RowFilter::OnlyDifferent),
            "services" => Ok(RowFilter::ServicesDifferent),
            "components" => Ok(RowFilter::ComponentsDifferent),
            "attributes" => Ok(RowFilter::AttributesDifferent),
            "configurations" => Ok(RowFilter::ConfigurationsDifferent),
            _ => Err(ArchDiffError::UnknownFilter {
                name: s.to_string(),
            }),
        }
    }
}

/// Difference filter plus case-insensitive id search plus row limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    pub filter: RowFilter,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

/// Rows kept by a query, with the size of the unfiltered report
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRows<'a> {
    pub rows: Vec<&'a ComparisonRow>,
    pub total: usize,
}

impl FilteredRows<'_> {
    pub fn showing_label(&self) -> String {
        format!("Showing {} of {} architectures", self.rows.len(), self.total)
    }
}

impl RowQuery {
    /// Apply filter, then search, then limit.
    pub fn apply<'a>(&self, rows: &'a [ComparisonRow]) -> FilteredRows<'a> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let kept = rows
            .iter()
            .filter(|row| self.filter.matches(row))
            .filter(|row| match &needle {
                Some(needle) => row.architecture_id.to_lowercase().contains(needle),
                None => true,
            })
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        FilteredRows {
            rows: kept,
            total: rows.len(),
        }
    }
}
