//! Shared fixtures for archdiff-core integration tests.
//!
//! Fixtures are built as JSON (the wire shape) and parsed through the same
//! serde types the loader uses.

use archdiff_core::model::{ArchitectureSet, RawArchitecture, ReasoningSet};
use archdiff_core::{normalize, NormalizedArchitecture};
use serde_json::{json, Value};

/// An attribute search space entry
#[allow(dead_code)]
pub fn attribute(name: &str, values: Value, constraint: Value, unit: Value) -> Value {
    json!({
        "attribute_codename": name,
        "attribute_values": values,
        "attribute_constraint_expr": constraint,
        "attribute_unit": unit
    })
}

/// An attribute with only values set
#[allow(dead_code)]
pub fn simple_attribute(name: &str, values: Value) -> Value {
    attribute(name, values, Value::Null, Value::Null)
}

/// A service component search space entry
#[allow(dead_code)]
pub fn service_component(codename: &str, attrs: Vec<Value>, instances: i64, sort: Value) -> Value {
    json!({
        "service_component_codename": codename,
        "attributes_search_space": attrs,
        "number_of_instances": instances,
        "service_component_sort": sort
    })
}

/// A component wrapping one service search space
#[allow(dead_code)]
pub fn component(component_id: &str, service: &str, service_components: Vec<Value>) -> Value {
    json!({
        "component_id": component_id,
        "service_search_space": {
            "service_codename": service,
            "service_select_attributes": [],
            "service_components_search_spaces": service_components
        }
    })
}

/// An architecture with the given components
#[allow(dead_code)]
pub fn architecture(id: &str, components: Vec<Value>) -> Value {
    json!({
        "architecture_id": id,
        "components_search_space": components
    })
}

#[allow(dead_code)]
pub fn architecture_set(architectures: Vec<Value>) -> ArchitectureSet {
    serde_json::from_value(json!({ "architectures": architectures })).unwrap()
}

#[allow(dead_code)]
pub fn raw(architecture: Value) -> RawArchitecture {
    serde_json::from_value(architecture).unwrap()
}

#[allow(dead_code)]
pub fn normalized(architecture: Value) -> NormalizedArchitecture {
    normalize(Some(&raw(architecture)))
}

#[allow(dead_code)]
pub fn reasoning_set(records: Vec<Value>) -> ReasoningSet {
    serde_json::from_value(json!({ "reasoning_objects": records })).unwrap()
}

/// A reasoning record for one service
#[allow(dead_code)]
pub fn reasoning(
    service: &str,
    understanding: &str,
    selection: &str,
    critical: &str,
    alternatives: Vec<Value>,
) -> Value {
    json!({
        "service_codename": service,
        "service_understanding": understanding,
        "attribute_selection_rationale": selection,
        "critical_attributes_reasoning": critical,
        "alternatives_considered": alternatives
    })
}

/// A database service with one primary component and two attributes
#[allow(dead_code)]
pub fn database_architecture(id: &str, storage_values: Value, instances: i64) -> Value {
    architecture(
        id,
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![
                    attribute("storage", storage_values, json!("x > 10"), json!("GB")),
                    simple_attribute("engine", json!(["postgres"])),
                ],
                instances,
                json!(["cost"]),
            )],
        )],
    )
}
