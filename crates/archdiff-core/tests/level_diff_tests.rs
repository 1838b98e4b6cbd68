//! Level differencer tests: verdicts, difference text and the structural
//! properties every level must hold.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use archdiff_core::diff::engine::{
    compare_attributes, compare_components, compare_configurations, compare_levels,
    compare_services,
};
use archdiff_core::{Level, NormalizedArchitecture};
use common::*;
use proptest::prelude::*;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Reflexivity and key-set behavior
// ---------------------------------------------------------------------------

#[test]
fn test_self_comparison_is_same_at_every_level() {
    let arch = normalized(database_architecture("a1", json!([10, 20]), 2));
    let report = compare_levels(&arch, &arch);
    for level in Level::ALL {
        let diff = report.level(level);
        assert!(diff.same, "{:?} should be same", level);
        assert_eq!(diff.differences, "No differences");
    }
}

#[test]
fn test_empty_architectures_are_same() {
    let empty = NormalizedArchitecture::empty();
    let report = compare_levels(&empty, &empty);
    assert!(Level::ALL.iter().all(|l| report.level(*l).same));
}

#[test]
fn test_value_change_keeps_services_and_components_same() {
    let baseline = normalized(database_architecture("a1", json!([10, 20]), 1));
    let enhanced = normalized(database_architecture("a1", json!([10, 40]), 1));

    let report = compare_levels(&baseline, &enhanced);
    assert!(report.services.same);
    assert!(report.components.same);
    assert!(report.attributes.same);
    assert!(!report.configurations.same);
    assert_eq!(
        report.configurations.differences,
        "database::c1_primary (storage: values)"
    );
}

#[test]
fn test_services_text_lists_each_side() {
    let baseline = normalized(architecture(
        "a1",
        vec![
            component("c1", "database", vec![]),
            component("c2", "cache", vec![]),
            component("c3", "auth", vec![]),
        ],
    ));
    let enhanced = normalized(architecture(
        "a1",
        vec![
            component("c1", "database", vec![]),
            component("c4", "queue", vec![]),
        ],
    ));

    let diff = compare_services(&baseline, &enhanced);
    assert!(!diff.same);
    assert_eq!(diff.differences, "Baseline only: auth, cache; Enhanced only: queue");
}

#[test]
fn test_components_keyed_by_service_and_composite_key() {
    let baseline = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component("primary", vec![], 1, json!([]))],
        )],
    ));
    let enhanced = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![
                service_component("primary", vec![], 5, json!(["latency"])),
                service_component("replica", vec![], 1, json!([])),
            ],
        )],
    ));

    let diff = compare_components(&baseline, &enhanced);
    assert!(!diff.same);
    assert_eq!(diff.differences, "Enhanced only: database::c1_replica");
}

// ---------------------------------------------------------------------------
// Attributes level
// ---------------------------------------------------------------------------

#[test]
fn test_attribute_names_reported_per_component() {
    let baseline = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![
                    simple_attribute("b_attr", json!(1)),
                    simple_attribute("a_attr", json!(1)),
                    simple_attribute("shared", json!(1)),
                ],
                1,
                json!([]),
            )],
        )],
    ));
    let enhanced = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![
                    simple_attribute("shared", json!(2)),
                    simple_attribute("c_attr", json!(1)),
                ],
                1,
                json!([]),
            )],
        )],
    ));

    let diff = compare_attributes(&baseline, &enhanced);
    assert!(!diff.same);
    assert_eq!(
        diff.differences,
        "database::c1_primary (baseline only: a_attr, b_attr; enhanced only: c_attr)"
    );
}

#[test]
fn test_attribute_only_on_one_side_omits_empty_side() {
    let baseline = normalized(database_architecture("a1", json!([1]), 1));
    let enhanced = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![simple_attribute("engine", json!(["postgres"]))],
                1,
                json!(["cost"]),
            )],
        )],
    ));

    let diff = compare_attributes(&baseline, &enhanced);
    assert_eq!(diff.differences, "database::c1_primary (baseline only: storage)");
}

// ---------------------------------------------------------------------------
// Configurations level
// ---------------------------------------------------------------------------

#[test]
fn test_configuration_fields_listed_in_fixed_order() {
    let baseline = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![attribute("storage", json!([10]), json!("x > 1"), json!("GB"))],
                1,
                json!([]),
            )],
        )],
    ));
    let enhanced = normalized(architecture(
        "a1",
        vec![component(
            "c1",
            "database",
            vec![service_component(
                "primary",
                vec![attribute("storage", json!([20]), json!("x > 2"), json!("TB"))],
                1,
                json!([]),
            )],
        )],
    ));

    let diff = compare_configurations(&baseline, &enhanced);
    assert_eq!(
        diff.differences,
        "database::c1_primary (storage: values, constraint, unit)"
    );
}

#[test]
fn test_configuration_reports_instances_sort_and_attributes_together() {
    let baseline = normalized(database_architecture("a1", json!([10]), 1));
    let mut enhanced_value = database_architecture("a1", json!([10]), 3);
    enhanced_value["components_search_space"][0]["service_search_space"]
        ["service_components_search_spaces"][0]["service_component_sort"] = json!(["latency"]);
    enhanced_value["components_search_space"][0]["service_search_space"]
        ["service_components_search_spaces"][0]["attributes_search_space"][1]
        ["attribute_unit"] = json!("version");
    let enhanced = normalized(enhanced_value);

    let diff = compare_configurations(&baseline, &enhanced);
    assert!(!diff.same);
    assert_eq!(
        diff.differences,
        "database::c1_primary (instances: 1 vs 3; sort configuration differs; engine: unit)"
    );
}

#[test]
fn test_configuration_entries_sorted_by_component_key() {
    let build = |instances: i64| {
        normalized(architecture(
            "a1",
            vec![
                component(
                    "c2",
                    "web",
                    vec![service_component("frontend", vec![], instances, json!([]))],
                ),
                component(
                    "c1",
                    "api",
                    vec![service_component("gateway", vec![], instances, json!([]))],
                ),
            ],
        ))
    };

    let diff = compare_configurations(&build(1), &build(2));
    assert_eq!(
        diff.differences,
        "api::c1_gateway (instances: 1 vs 2); web::c2_frontend (instances: 1 vs 2)"
    );
}

// ---------------------------------------------------------------------------
// Normalizer ordering
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_composite_key_last_occurrence_wins() {
    let arch = normalized(architecture(
        "a1",
        vec![
            component(
                "c1",
                "database",
                vec![service_component(
                    "primary",
                    vec![simple_attribute("first", json!(1))],
                    1,
                    json!(["cost"]),
                )],
            ),
            component(
                "c1",
                "database",
                vec![service_component(
                    "primary",
                    vec![simple_attribute("second", json!(2))],
                    4,
                    json!(["latency"]),
                )],
            ),
        ],
    ));

    let service = &arch.services["database"];
    assert_eq!(service.components.len(), 1);
    let entry = &service.components["c1_primary"];
    assert_eq!(entry.number_of_instances, 4);
    assert_eq!(entry.service_component_sort, vec![json!("latency")]);
    assert_eq!(entry.attributes_search_space[0].attribute_codename, "second");
}

#[test]
fn test_component_order_does_not_change_normalized_map() {
    let a = component(
        "c1",
        "database",
        vec![service_component("primary", vec![], 1, json!([]))],
    );
    let b = component(
        "c2",
        "cache",
        vec![service_component("node", vec![], 2, json!([]))],
    );

    let forward = normalized(architecture("x", vec![a.clone(), b.clone()]));
    let reverse = normalized(architecture("x", vec![b, a]));
    assert_eq!(forward, reverse);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_attribute() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["size", "tier", "region"]),
        0i64..3,
        prop::option::of(prop::sample::select(vec!["GB", "TB"])),
    )
        .prop_map(|(name, v, unit)| {
            attribute(
                name,
                json!([v]),
                Value::Null,
                unit.map(Value::from).unwrap_or(Value::Null),
            )
        })
}

fn arb_component() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["c1", "c2"]),
        prop::sample::select(vec!["database", "cache", "queue"]),
        prop::sample::select(vec!["primary", "replica"]),
        prop::collection::vec(arb_attribute(), 0..3),
        1i64..3,
    )
        .prop_map(|(id, service, codename, attrs, instances)| {
            component(
                id,
                service,
                vec![service_component(codename, attrs, instances, json!([]))],
            )
        })
}

fn arb_architecture() -> impl Strategy<Value = NormalizedArchitecture> {
    prop::collection::vec(arb_component(), 0..5)
        .prop_map(|components| normalized(architecture("prop", components)))
}

proptest! {
    #[test]
    fn prop_every_level_is_reflexive(arch in arb_architecture()) {
        let report = compare_levels(&arch, &arch);
        for level in Level::ALL {
            prop_assert!(report.level(level).same);
            prop_assert_eq!(report.level(level).differences.as_str(), "No differences");
        }
    }

    #[test]
    fn prop_same_flags_are_symmetric(a in arb_architecture(), b in arb_architecture()) {
        let forward = compare_levels(&a, &b);
        let backward = compare_levels(&b, &a);
        for level in Level::ALL {
            prop_assert_eq!(forward.level(level).same, backward.level(level).same);
        }
    }

    #[test]
    fn prop_same_verdict_means_no_differences_text(a in arb_architecture(), b in arb_architecture()) {
        let report = compare_levels(&a, &b);
        for level in Level::ALL {
            let diff = report.level(level);
            if diff.same {
                prop_assert_eq!(diff.differences.as_str(), "No differences");
            }
            prop_assert!(!diff.differences.is_empty());
        }
    }
}
