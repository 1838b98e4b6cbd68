//! The flat per-architecture comparison row.

use crate::diff::model::{Level, LevelDiff};
use crate::model::Side;
use serde::{Deserialize, Serialize};

/// One row of the tabular comparison.
///
/// Serialized field names are the report's column headers; the four
/// `*_same` flags serialize as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Architecture")]
    pub architecture_id: String,
    #[serde(rename = "Services_Same", with = "flag")]
    pub services_same: bool,
    #[serde(rename = "Components_Same", with = "flag")]
    pub components_same: bool,
    #[serde(rename = "Attributes_Same", with = "flag")]
    pub attributes_same: bool,
    #[serde(rename = "Configurations_Same", with = "flag")]
    pub configurations_same: bool,
    #[serde(rename = "Services_Differences")]
    pub services_differences: String,
    #[serde(rename = "Components_Differences")]
    pub components_differences: String,
    #[serde(rename = "Attributes_Differences")]
    pub attributes_differences: String,
    #[serde(rename = "Configurations_Differences")]
    pub configurations_differences: String,
    #[serde(rename = "Reasoning_Description")]
    pub reasoning_description: String,
}

impl ComparisonRow {
    /// Row for an architecture that exists in only one of the two sets.
    pub fn only_in(architecture_id: impl Into<String>, side: Side) -> Self {
        let differences = format!("Architecture only in {}", side.label());
        Self {
            architecture_id: architecture_id.into(),
            services_same: false,
            components_same: false,
            attributes_same: false,
            configurations_same: false,
            services_differences: differences.clone(),
            components_differences: differences.clone(),
            attributes_differences: differences.clone(),
            configurations_differences: differences,
            reasoning_description: format!("Architecture exists only in {} dataset", side.label()),
        }
    }

    /// Assemble a row from the four level verdicts.
    pub fn from_levels(
        architecture_id: impl Into<String>,
        services: LevelDiff,
        components: LevelDiff,
        attributes: LevelDiff,
        configurations: LevelDiff,
        reasoning_description: String,
    ) -> Self {
        Self {
            architecture_id: architecture_id.into(),
            services_same: services.same,
            components_same: components.same,
            attributes_same: attributes.same,
            configurations_same: configurations.same,
            services_differences: services.differences,
            components_differences: components.differences,
            attributes_differences: attributes.differences,
            configurations_differences: configurations.differences,
            reasoning_description,
        }
    }

    pub fn same(&self, level: Level) -> bool {
        match level {
            Level::Services => self.services_same,
            Level::Components => self.components_same,
            Level::Attributes => self.attributes_same,
            Level::Configurations => self.configurations_same,
        }
    }

    pub fn differences(&self, level: Level) -> &str {
        match level {
            Level::Services => &self.services_differences,
            Level::Components => &self.components_differences,
            Level::Attributes => &self.attributes_differences,
            Level::Configurations => &self.configurations_differences,
        }
    }

    /// All four levels report no divergence
    pub fn is_identical(&self) -> bool {
        Level::ALL.iter().all(|level| self.same(*level))
    }
}

/// `bool` <-> `0`/`1` column encoding
mod flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::custom(format!(
                "expected 0 or 1 for a same-flag, got {other}"
            ))),
        }
    }
}
