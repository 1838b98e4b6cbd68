//! Structure normalizer.
//!
//! Turns one raw architecture into a [`NormalizedArchitecture`]. An absent
//! architecture is a valid state and normalizes to an empty structure.

use crate::model::normalized::composite_component_key;
use crate::model::{
    Attribute, ComponentEntry, NormalizedArchitecture, RawArchitecture, RawAttribute,
    RawServiceComponent, ServiceEntry,
};

/// Service codename used when the source has none
pub const UNKNOWN_SERVICE: &str = "Unknown";
/// Service component codename used when the source has none
pub const UNKNOWN_COMPONENT: &str = "Unknown";
/// Attribute codename used when the source has none
pub const UNKNOWN_ATTRIBUTE: &str = "unknown";
/// Instance count used when the source has none
pub const DEFAULT_INSTANCES: i64 = 1;

/// Normalize a raw architecture.
///
/// Components are visited in document order. A service entry is created the
/// first time its codename is seen and is never dropped afterwards. Repeated
/// composite component keys within a service overwrite the earlier entry, so
/// the last occurrence wins.
pub fn normalize(document: Option<&RawArchitecture>) -> NormalizedArchitecture {
    let Some(document) = document else {
        return NormalizedArchitecture::empty();
    };

    let mut normalized = NormalizedArchitecture::empty();

    for component in &document.components_search_space {
        let component_id = component.component_id.clone().unwrap_or_default();
        let space = &component.service_search_space;
        let service_codename = space
            .service_codename
            .clone()
            .unwrap_or_else(|| UNKNOWN_SERVICE.to_string());

        let service = normalized
            .services
            .entry(service_codename.clone())
            .or_insert_with(|| {
                ServiceEntry::new(service_codename, space.service_select_attributes.clone())
            });

        for service_component in &space.service_components_search_spaces {
            let entry = component_entry(&component_id, service_component);
            let key = composite_component_key(&component_id, &entry.service_component_codename);
            service.components.insert(key, entry);
        }
    }

    normalized
}

fn component_entry(component_id: &str, raw: &RawServiceComponent) -> ComponentEntry {
    ComponentEntry {
        component_id: component_id.to_string(),
        service_component_codename: raw
            .service_component_codename
            .clone()
            .unwrap_or_else(|| UNKNOWN_COMPONENT.to_string()),
        attributes_search_space: raw.attributes_search_space.iter().map(attribute).collect(),
        number_of_instances: raw.number_of_instances.unwrap_or(DEFAULT_INSTANCES),
        service_component_sort: raw.service_component_sort.clone(),
    }
}

fn attribute(raw: &RawAttribute) -> Attribute {
    Attribute {
        attribute_codename: raw
            .attribute_codename
            .clone()
            .unwrap_or_else(|| UNKNOWN_ATTRIBUTE.to_string()),
        attribute_values: raw.attribute_values.clone(),
        attribute_constraint_expr: raw.attribute_constraint_expr.clone(),
        attribute_unit: raw.attribute_unit.clone(),
    }
}
