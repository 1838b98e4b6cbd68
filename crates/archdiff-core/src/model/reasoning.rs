//! Reasoning records: free-text justification attached to a service.

use crate::model::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level reasoning document: `{ "reasoning_objects": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningSet {
    #[serde(deserialize_with = "lenient::records")]
    pub reasoning_objects: Vec<ReasoningRecord>,
}

/// Rationale fields for one service.
///
/// Text fields default to the empty string and `alternatives_considered` to
/// an empty list; an empty field means "no rationale recorded". Alternatives
/// are kept as raw JSON because producers emit both strings and objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub service_codename: Option<String>,
    #[serde(deserialize_with = "lenient::prose")]
    pub service_understanding: String,
    #[serde(deserialize_with = "lenient::prose")]
    pub attribute_selection_rationale: String,
    #[serde(deserialize_with = "lenient::prose")]
    pub critical_attributes_reasoning: String,
    #[serde(deserialize_with = "lenient::values")]
    pub alternatives_considered: Vec<Value>,
}

impl ReasoningRecord {
    /// The first listed alternative as text. Non-string alternatives are
    /// rendered as compact JSON.
    pub fn first_alternative_text(&self) -> Option<String> {
        self.alternatives_considered.first().map(|alt| match alt {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Read-only lookup from service codename to its reasoning record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReasoningLookup {
    records: BTreeMap<String, ReasoningRecord>,
}

impl ReasoningLookup {
    /// Index a reasoning set by service codename.
    ///
    /// Records without a codename are skipped; a repeated codename keeps the
    /// later record.
    pub fn from_set(set: ReasoningSet) -> Self {
        let mut records = BTreeMap::new();
        for record in set.reasoning_objects {
            match record.service_codename.as_deref() {
                Some(name) if !name.is_empty() => {
                    records.insert(name.to_string(), record);
                }
                _ => {
                    tracing::debug!(
                        component = module_path!(),
                        "skipping reasoning record without service_codename"
                    );
                }
            }
        }
        Self { records }
    }

    pub fn get(&self, service_codename: &str) -> Option<&ReasoningRecord> {
        self.records.get(service_codename)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
