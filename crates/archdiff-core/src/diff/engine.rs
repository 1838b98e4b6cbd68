//! Level differencers.
//!
//! Each function takes the two normalized architectures (baseline first)
//! and returns a [`LevelDiff`]. [`compare_levels`] runs all four.

use crate::diff::model::{
    AttributeConfiguration, ComponentConfiguration, LevelDiff, LevelReport,
};
use crate::model::NormalizedArchitecture;
use std::collections::{BTreeMap, BTreeSet};

/// Run all four level differencers.
pub fn compare_levels(
    baseline: &NormalizedArchitecture,
    enhanced: &NormalizedArchitecture,
) -> LevelReport {
    LevelReport {
        services: compare_services(baseline, enhanced),
        components: compare_components(baseline, enhanced),
        attributes: compare_attributes(baseline, enhanced),
        configurations: compare_configurations(baseline, enhanced),
    }
}

/// Compare the sets of service codenames.
pub fn compare_services(
    baseline: &NormalizedArchitecture,
    enhanced: &NormalizedArchitecture,
) -> LevelDiff {
    let baseline_keys: BTreeSet<&str> = baseline.services.keys().map(String::as_str).collect();
    let enhanced_keys: BTreeSet<&str> = enhanced.services.keys().map(String::as_str).collect();
    key_set_diff(&baseline_keys, &enhanced_keys)
}

/// Compare the sets of `"{service}::{component_key}"` keys.
///
/// Component contents are ignored here; they are covered by the attributes
/// and configurations levels.
pub fn compare_components(
    baseline: &NormalizedArchitecture,
    enhanced: &NormalizedArchitecture,
) -> LevelDiff {
    let baseline_keys: BTreeSet<String> = baseline.flattened_components().into_keys().collect();
    let enhanced_keys: BTreeSet<String> = enhanced.flattened_components().into_keys().collect();
    key_set_diff(&as_strs(&baseline_keys), &as_strs(&enhanced_keys))
}

/// Compare attribute codenames per component (existence only).
///
/// A component present on one side only compares as an empty attribute set
/// on the other.
pub fn compare_attributes(
    baseline: &NormalizedArchitecture,
    enhanced: &NormalizedArchitecture,
) -> LevelDiff {
    let baseline_attrs = attribute_names(baseline);
    let enhanced_attrs = attribute_names(enhanced);

    if baseline_attrs == enhanced_attrs {
        return LevelDiff::identical();
    }

    let empty = BTreeSet::new();
    let mut entries = Vec::new();
    for comp_key in union_keys(&baseline_attrs, &enhanced_attrs) {
        let baseline_names = baseline_attrs.get(comp_key).unwrap_or(&empty);
        let enhanced_names = enhanced_attrs.get(comp_key).unwrap_or(&empty);
        if baseline_names == enhanced_names {
            continue;
        }

        let baseline_only: Vec<&str> = baseline_names.difference(enhanced_names).copied().collect();
        let enhanced_only: Vec<&str> = enhanced_names.difference(baseline_names).copied().collect();

        let mut comp_diffs = Vec::new();
        if !baseline_only.is_empty() {
            comp_diffs.push(format!("baseline only: {}", baseline_only.join(", ")));
        }
        if !enhanced_only.is_empty() {
            comp_diffs.push(format!("enhanced only: {}", enhanced_only.join(", ")));
        }
        entries.push(format!("{} ({})", comp_key, comp_diffs.join("; ")));
    }

    if entries.is_empty() {
        LevelDiff::identical()
    } else {
        LevelDiff::different(entries)
    }
}

/// Compare instances, sort and per-attribute values/constraint/unit.
///
/// A component key present on one side only is a configuration difference.
/// A differing component contributes text only if at least one checked field
/// differs.
pub fn compare_configurations(
    baseline: &NormalizedArchitecture,
    enhanced: &NormalizedArchitecture,
) -> LevelDiff {
    let baseline_configs = configurations(baseline);
    let enhanced_configs = configurations(enhanced);

    if baseline_configs == enhanced_configs {
        return LevelDiff::identical();
    }

    let empty = BTreeMap::new();
    let mut entries = Vec::new();
    for comp_key in union_keys(&baseline_configs, &enhanced_configs) {
        let b = baseline_configs.get(comp_key);
        let e = enhanced_configs.get(comp_key);
        if b == e {
            continue;
        }

        let mut comp_diffs = Vec::new();

        let (b_instances, e_instances) = (b.map(|c| c.instances), e.map(|c| c.instances));
        if b_instances != e_instances {
            comp_diffs.push(format!(
                "instances: {} vs {}",
                render_instances(b_instances),
                render_instances(e_instances)
            ));
        }

        if b.map(|c| c.sort) != e.map(|c| c.sort) {
            comp_diffs.push("sort configuration differs".to_string());
        }

        let b_attrs = b.map(|c| &c.attributes).unwrap_or(&empty);
        let e_attrs = e.map(|c| &c.attributes).unwrap_or(&empty);
        for attr_name in union_keys(b_attrs, e_attrs) {
            let fields = differing_fields(b_attrs.get(attr_name), e_attrs.get(attr_name));
            if !fields.is_empty() {
                comp_diffs.push(format!("{}: {}", attr_name, fields.join(", ")));
            }
        }

        if !comp_diffs.is_empty() {
            entries.push(format!("{} ({})", comp_key, comp_diffs.join("; ")));
        }
    }

    LevelDiff::different(entries)
}

/// Set difference text shared by the services and components levels.
fn key_set_diff(baseline: &BTreeSet<&str>, enhanced: &BTreeSet<&str>) -> LevelDiff {
    if baseline == enhanced {
        return LevelDiff::identical();
    }

    let baseline_only: Vec<&str> = baseline.difference(enhanced).copied().collect();
    let enhanced_only: Vec<&str> = enhanced.difference(baseline).copied().collect();

    let mut entries = Vec::new();
    if !baseline_only.is_empty() {
        entries.push(format!("Baseline only: {}", baseline_only.join(", ")));
    }
    if !enhanced_only.is_empty() {
        entries.push(format!("Enhanced only: {}", enhanced_only.join(", ")));
    }
    LevelDiff::different(entries)
}

fn as_strs(keys: &BTreeSet<String>) -> BTreeSet<&str> {
    keys.iter().map(String::as_str).collect()
}

/// Sorted union of two maps' keys
fn union_keys<'m, K: Ord, V>(a: &'m BTreeMap<K, V>, b: &'m BTreeMap<K, V>) -> BTreeSet<&'m K> {
    a.keys().chain(b.keys()).collect()
}

/// Flat component key -> set of attribute codenames
fn attribute_names(arch: &NormalizedArchitecture) -> BTreeMap<String, BTreeSet<&str>> {
    arch.flattened_components()
        .into_iter()
        .map(|(key, comp)| {
            let names = comp
                .attributes_search_space
                .iter()
                .map(|attr| attr.attribute_codename.as_str())
                .collect();
            (key, names)
        })
        .collect()
}

/// Flat component key -> configuration view. Repeated attribute codenames
/// within one component keep the last occurrence.
fn configurations(arch: &NormalizedArchitecture) -> BTreeMap<String, ComponentConfiguration<'_>> {
    arch.flattened_components()
        .into_iter()
        .map(|(key, comp)| {
            let attributes = comp
                .attributes_search_space
                .iter()
                .map(|attr| {
                    (
                        attr.attribute_codename.as_str(),
                        AttributeConfiguration {
                            values: attr.attribute_values.as_ref(),
                            constraint: attr.attribute_constraint_expr.as_ref(),
                            unit: attr.attribute_unit.as_ref(),
                        },
                    )
                })
                .collect();
            let config = ComponentConfiguration {
                instances: comp.number_of_instances,
                sort: comp.service_component_sort.as_slice(),
                attributes,
            };
            (key, config)
        })
        .collect()
}

/// Names of the mismatching fields, always in the order values, constraint, unit.
fn differing_fields(
    baseline: Option<&AttributeConfiguration<'_>>,
    enhanced: Option<&AttributeConfiguration<'_>>,
) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if baseline.and_then(|a| a.values) != enhanced.and_then(|a| a.values) {
        fields.push("values");
    }
    if baseline.and_then(|a| a.constraint) != enhanced.and_then(|a| a.constraint) {
        fields.push("constraint");
    }
    if baseline.and_then(|a| a.unit) != enhanced.and_then(|a| a.unit) {
        fields.push("unit");
    }
    fields
}

fn render_instances(instances: Option<i64>) -> String {
    match instances {
        Some(n) => n.to_string(),
        None => "absent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use serde_json::{json, Value};

    fn arch(value: Value) -> NormalizedArchitecture {
        normalize(Some(&serde_json::from_value(value).unwrap()))
    }

    fn single_component(attrs: Value, instances: i64, sort: Value) -> NormalizedArchitecture {
        arch(json!({
            "components_search_space": [{
                "component_id": "c1",
                "service_search_space": {
                    "service_codename": "db",
                    "service_components_search_spaces": [{
                        "service_component_codename": "primary",
                        "attributes_search_space": attrs,
                        "number_of_instances": instances,
                        "service_component_sort": sort
                    }]
                }
            }]
        }))
    }

    #[test]
    fn test_key_set_diff_lists_both_sides_sorted() {
        let baseline: BTreeSet<&str> = ["b", "a", "shared"].into_iter().collect();
        let enhanced: BTreeSet<&str> = ["shared", "d", "c"].into_iter().collect();
        let diff = key_set_diff(&baseline, &enhanced);
        assert!(!diff.same);
        assert_eq!(diff.differences, "Baseline only: a, b; Enhanced only: c, d");
    }

    #[test]
    fn test_instances_render_absent_side() {
        let baseline = single_component(json!([]), 2, json!([]));
        let enhanced = NormalizedArchitecture::empty();
        let diff = compare_configurations(&baseline, &enhanced);
        assert!(!diff.same);
        assert_eq!(
            diff.differences,
            "db::c1_primary (instances: 2 vs absent; sort configuration differs)"
        );
    }

    #[test]
    fn test_sort_difference_has_no_detail() {
        let baseline = single_component(json!([]), 1, json!(["cost"]));
        let enhanced = single_component(json!([]), 1, json!(["latency"]));
        let diff = compare_configurations(&baseline, &enhanced);
        assert_eq!(diff.differences, "db::c1_primary (sort configuration differs)");
    }

    #[test]
    fn test_attribute_with_no_fields_vs_absent_emits_no_text() {
        let baseline = single_component(json!([{"attribute_codename": "tier"}]), 1, json!([]));
        let enhanced = single_component(json!([]), 1, json!([]));
        let diff = compare_configurations(&baseline, &enhanced);
        assert!(!diff.same);
        assert_eq!(diff.differences, "No differences");
    }

    #[test]
    fn test_component_without_attributes_on_one_side_is_attribute_same() {
        let baseline = single_component(json!([]), 1, json!([]));
        let enhanced = NormalizedArchitecture::empty();
        assert!(compare_attributes(&baseline, &enhanced).same);
        assert!(!compare_components(&baseline, &enhanced).same);
    }
}
