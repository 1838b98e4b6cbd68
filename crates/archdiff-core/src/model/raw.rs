//! Wire shapes of the architecture set documents.
//!
//! Every field is optional: an absent, `null` or oddly typed field reads as
//! its empty value. No schema validation happens here; unknown fields are
//! ignored.

use crate::model::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level architecture set document: `{ "architectures": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureSet {
    #[serde(deserialize_with = "lenient::records")]
    pub architectures: Vec<RawArchitecture>,
}

impl ArchitectureSet {
    pub fn is_empty(&self) -> bool {
        self.architectures.is_empty()
    }
}

/// One candidate architecture as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawArchitecture {
    #[serde(deserialize_with = "lenient::text")]
    pub architecture_id: Option<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub components_search_space: Vec<RawComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    #[serde(deserialize_with = "lenient::text")]
    pub component_id: Option<String>,
    #[serde(deserialize_with = "lenient::record")]
    pub service_search_space: RawServiceSearchSpace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawServiceSearchSpace {
    #[serde(deserialize_with = "lenient::text")]
    pub service_codename: Option<String>,
    #[serde(deserialize_with = "lenient::values")]
    pub service_select_attributes: Vec<Value>,
    #[serde(deserialize_with = "lenient::records")]
    pub service_components_search_spaces: Vec<RawServiceComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawServiceComponent {
    #[serde(deserialize_with = "lenient::text")]
    pub service_component_codename: Option<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub attributes_search_space: Vec<RawAttribute>,
    #[serde(deserialize_with = "lenient::count")]
    pub number_of_instances: Option<i64>,
    #[serde(deserialize_with = "lenient::values")]
    pub service_component_sort: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAttribute {
    #[serde(deserialize_with = "lenient::text")]
    pub attribute_codename: Option<String>,
    pub attribute_values: Option<Value>,
    pub attribute_constraint_expr: Option<Value>,
    pub attribute_unit: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let set: ArchitectureSet =
            serde_json::from_value(json!({"architectures": [{"architecture_id": "a1"}]}))
                .unwrap();
        assert_eq!(set.architectures.len(), 1);
        assert!(set.architectures[0].components_search_space.is_empty());
    }

    #[test]
    fn test_null_collections_read_as_empty() {
        let component: RawComponent = serde_json::from_value(json!({
            "component_id": "c1",
            "service_search_space": {
                "service_codename": "db",
                "service_components_search_spaces": null,
                "service_select_attributes": null
            }
        }))
        .unwrap();
        assert!(component
            .service_search_space
            .service_components_search_spaces
            .is_empty());

        let empty: RawComponent =
            serde_json::from_value(json!({"service_search_space": null})).unwrap();
        assert_eq!(empty.service_search_space, RawServiceSearchSpace::default());
    }

    #[test]
    fn test_null_attribute_value_equals_absent() {
        let with_null: RawAttribute = serde_json::from_value(json!({
            "attribute_codename": "size",
            "attribute_values": null
        }))
        .unwrap();
        let absent: RawAttribute =
            serde_json::from_value(json!({"attribute_codename": "size"})).unwrap();
        assert_eq!(with_null, absent);
    }

    #[test]
    fn test_odd_scalar_types_are_coerced_per_field() {
        let set: ArchitectureSet = serde_json::from_value(json!({"architectures": [
            {"architecture_id": 42, "components_search_space": [{
                "component_id": 7,
                "service_search_space": {"service_codename": "db",
                    "service_components_search_spaces": [{
                        "service_component_codename": "primary",
                        "number_of_instances": 2.0,
                        "attributes_search_space": [{"attribute_codename": 5}]
                    }]}
            }]},
            {"architecture_id": "a2"}
        ]}))
        .unwrap();

        assert_eq!(set.architectures.len(), 2);
        let arch = &set.architectures[0];
        assert_eq!(arch.architecture_id.as_deref(), Some("42"));
        let component = &arch.components_search_space[0];
        assert_eq!(component.component_id.as_deref(), Some("7"));
        let service_component = &component.service_search_space.service_components_search_spaces[0];
        assert_eq!(service_component.number_of_instances, Some(2));
        assert_eq!(
            service_component.attributes_search_space[0].attribute_codename.as_deref(),
            Some("5")
        );
    }

    #[test]
    fn test_unreadable_component_is_skipped_not_fatal() {
        let arch: RawArchitecture = serde_json::from_value(json!({
            "architecture_id": "a1",
            "components_search_space": ["junk", {"component_id": "c1"}]
        }))
        .unwrap();
        assert_eq!(arch.components_search_space.len(), 1);
        assert_eq!(arch.components_search_space[0].component_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_empty_document_is_empty_set() {
        let set: ArchitectureSet = serde_json::from_value(json!({})).unwrap();
        assert!(set.is_empty());
    }
}
