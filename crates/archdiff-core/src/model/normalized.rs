//! Canonical in-memory tree built from one raw architecture.
//!
//! Collections are `BTreeMap`s so every traversal (and therefore every
//! difference text) is in lexicographic key order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Separator between service codename and component key in flattened keys
pub const FLAT_KEY_SEPARATOR: &str = "::";

/// Normalized architecture: service codename -> service entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedArchitecture {
    pub services: BTreeMap<String, ServiceEntry>,
}

impl NormalizedArchitecture {
    /// An architecture with no services (the state of an absent document)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn has_service(&self, service_codename: &str) -> bool {
        self.services.contains_key(service_codename)
    }

    /// Every component across all services, keyed `"{service}::{component_key}"`.
    pub fn flattened_components(&self) -> BTreeMap<String, &ComponentEntry> {
        self.services
            .iter()
            .flat_map(|(service_name, service)| {
                service.components.iter().map(move |(comp_key, comp)| {
                    (flat_component_key(service_name, comp_key), comp)
                })
            })
            .collect()
    }
}

/// Build the cross-service component key `"{service}::{component_key}"`.
pub fn flat_component_key(service_codename: &str, component_key: &str) -> String {
    format!("{service_codename}{FLAT_KEY_SEPARATOR}{component_key}")
}

/// Build the per-service composite key `"{component_id}_{codename}"`.
pub fn composite_component_key(component_id: &str, service_component_codename: &str) -> String {
    format!("{component_id}_{service_component_codename}")
}

/// A logical service and its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub service_codename: String,
    pub select_attributes: Vec<Value>,
    /// Keyed by [`composite_component_key`]
    pub components: BTreeMap<String, ComponentEntry>,
}

impl ServiceEntry {
    pub fn new(service_codename: impl Into<String>, select_attributes: Vec<Value>) -> Self {
        Self {
            service_codename: service_codename.into(),
            select_attributes,
            components: BTreeMap::new(),
        }
    }
}

/// A configurable unit within a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub component_id: String,
    pub service_component_codename: String,
    pub attributes_search_space: Vec<Attribute>,
    pub number_of_instances: i64,
    pub service_component_sort: Vec<Value>,
}

/// A named configurable property of a component
///
/// `None` in any of the value fields means the source had no value (absent
/// or `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub attribute_codename: String,
    pub attribute_values: Option<Value>,
    pub attribute_constraint_expr: Option<Value>,
    pub attribute_unit: Option<Value>,
}

impl Attribute {
    /// Values, constraint expression and unit all equal
    pub fn configuration_eq(&self, other: &Attribute) -> bool {
        self.attribute_values == other.attribute_values
            && self.attribute_constraint_expr == other.attribute_constraint_expr
            && self.attribute_unit == other.attribute_unit
    }

    /// Only the codename is compared
    pub fn existence_eq(&self, other: &Attribute) -> bool {
        self.attribute_codename == other.attribute_codename
    }
}
