//! Comparison orchestrator.
//!
//! [`ArchitectureComparator`] owns both architecture sets and both reasoning
//! lookups. They are built once in [`ArchitectureComparator::new`] and only
//! read afterwards, so each row is an independent pure computation.
//!
//! ## Logging Ownership
//!
//! `compare_all` owns the lifecycle events (`log_op_start!` / `log_op_end!`);
//! per-architecture progress is logged at `debug`.

use crate::diff::engine::compare_levels;
use crate::model::{
    ArchitectureSet, ComparisonRow, NormalizedArchitecture, RawArchitecture, ReasoningLookup,
    ReasoningRecord, ReasoningSet, Side,
};
use crate::normalize::normalize;
use crate::rationale::extract_key_insight;
use crate::{log_op_end, log_op_start};
use std::collections::{BTreeMap, BTreeSet};

/// Reasoning text used when no insight could be extracted for any service
pub const NO_REASONING_INSIGHTS: &str = "No specific reasoning insights available";

/// Number of common services consulted when no rationale differences exist
const FALLBACK_SERVICE_LIMIT: usize = 2;

/// Compares a baseline and an enhanced architecture set.
#[derive(Debug, Clone)]
pub struct ArchitectureComparator {
    baseline: BTreeMap<String, RawArchitecture>,
    enhanced: BTreeMap<String, RawArchitecture>,
    baseline_reasoning: ReasoningLookup,
    enhanced_reasoning: ReasoningLookup,
}

impl ArchitectureComparator {
    /// Index both architecture sets by id and build both reasoning lookups.
    pub fn new(
        baseline: ArchitectureSet,
        enhanced: ArchitectureSet,
        baseline_reasoning: ReasoningSet,
        enhanced_reasoning: ReasoningSet,
    ) -> Self {
        Self {
            baseline: index_architectures(baseline, Side::Baseline),
            enhanced: index_architectures(enhanced, Side::Enhanced),
            baseline_reasoning: ReasoningLookup::from_set(baseline_reasoning),
            enhanced_reasoning: ReasoningLookup::from_set(enhanced_reasoning),
        }
    }

    /// Sorted union of architecture ids from both sets
    pub fn architecture_ids(&self) -> Vec<&str> {
        self.baseline
            .keys()
            .chain(self.enhanced.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// One row per architecture id, sorted by id.
    pub fn compare_all(&self) -> Vec<ComparisonRow> {
        let ids = self.architecture_ids();
        log_op_start!(
            "compare_all",
            baseline_len = self.baseline.len() as u64,
            enhanced_len = self.enhanced.len() as u64
        );
        let start = std::time::Instant::now();

        let rows: Vec<ComparisonRow> = ids
            .into_iter()
            .map(|id| {
                tracing::debug!(
                    component = module_path!(),
                    architecture_id = id,
                    "processing architecture"
                );
                self.compare_pair(id, self.baseline.get(id), self.enhanced.get(id))
            })
            .collect();

        log_op_end!(
            "compare_all",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_len = rows.len() as u64
        );
        rows
    }

    /// Row for one architecture id, or `None` if neither set contains it.
    pub fn compare_one(&self, architecture_id: &str) -> Option<ComparisonRow> {
        let baseline = self.baseline.get(architecture_id);
        let enhanced = self.enhanced.get(architecture_id);
        if baseline.is_none() && enhanced.is_none() {
            return None;
        }
        Some(self.compare_pair(architecture_id, baseline, enhanced))
    }

    fn compare_pair(
        &self,
        architecture_id: &str,
        baseline: Option<&RawArchitecture>,
        enhanced: Option<&RawArchitecture>,
    ) -> ComparisonRow {
        match (baseline, enhanced) {
            (None, _) => ComparisonRow::only_in(architecture_id, Side::Enhanced),
            (_, None) => ComparisonRow::only_in(architecture_id, Side::Baseline),
            (Some(baseline), Some(enhanced)) => {
                let baseline = normalize(Some(baseline));
                let enhanced = normalize(Some(enhanced));
                let levels = compare_levels(&baseline, &enhanced);
                let reasoning = self.reasoning_description(&baseline, &enhanced);
                ComparisonRow::from_levels(
                    architecture_id,
                    levels.services,
                    levels.components,
                    levels.attributes,
                    levels.configurations,
                    reasoning,
                )
            }
        }
    }

    /// Assemble the reasoning description for one pair of architectures.
    ///
    /// Services are visited in sorted order. Shared services report the
    /// enhanced rationale for each rationale field that changed; one-sided
    /// services report why they exist. If that yields nothing, the first two
    /// shared services' configuration rationale is used instead.
    pub fn reasoning_description(
        &self,
        baseline: &NormalizedArchitecture,
        enhanced: &NormalizedArchitecture,
    ) -> String {
        let all_services: BTreeSet<&str> = baseline
            .services
            .keys()
            .chain(enhanced.services.keys())
            .map(String::as_str)
            .collect();

        let mut descriptions = Vec::new();
        for service in &all_services {
            let in_baseline = baseline.has_service(service);
            let in_enhanced = enhanced.has_service(service);
            let baseline_record = self.record(Side::Baseline, service);
            let enhanced_record = self.record(Side::Enhanced, service);

            match (in_baseline, in_enhanced) {
                (true, true) => {
                    let insights = changed_rationale(&baseline_record, &enhanced_record);
                    if !insights.is_empty() {
                        descriptions.push(format!("{}: {}", service, insights.join("; ")));
                    }
                }
                (false, true) => {
                    let purpose =
                        extract_key_insight(&enhanced_record.service_understanding, "Service purpose");
                    if !purpose.is_empty() {
                        descriptions.push(format!("{} (Enhanced only): {}", service, purpose));
                    }
                    let selection = extract_key_insight(
                        &enhanced_record.attribute_selection_rationale,
                        "Selection rationale",
                    );
                    if !selection.is_empty() {
                        descriptions.push(format!("{} selection reasoning: {}", service, selection));
                    }
                }
                (true, false) => {
                    let purpose =
                        extract_key_insight(&baseline_record.service_understanding, "Service purpose");
                    if !purpose.is_empty() {
                        descriptions.push(format!("{} (Baseline only): {}", service, purpose));
                    }
                }
                (false, false) => {}
            }
        }

        if descriptions.is_empty() {
            descriptions = self.common_service_rationale(&all_services, baseline, enhanced);
        }

        if descriptions.is_empty() {
            NO_REASONING_INSIGHTS.to_string()
        } else {
            descriptions.join("; ")
        }
    }

    /// Configuration rationale for up to two shared services, preferring the
    /// enhanced record.
    fn common_service_rationale(
        &self,
        all_services: &BTreeSet<&str>,
        baseline: &NormalizedArchitecture,
        enhanced: &NormalizedArchitecture,
    ) -> Vec<String> {
        let mut descriptions = Vec::new();
        let common = all_services
            .iter()
            .filter(|s| baseline.has_service(s) && enhanced.has_service(s))
            .take(FALLBACK_SERVICE_LIMIT);

        for service in common {
            let Some(record) = self
                .enhanced_reasoning
                .get(service)
                .or_else(|| self.baseline_reasoning.get(service))
            else {
                continue;
            };

            let insight = if !record.attribute_selection_rationale.is_empty() {
                extract_key_insight(&record.attribute_selection_rationale, "Configuration rationale")
            } else if !record.critical_attributes_reasoning.is_empty() {
                extract_key_insight(&record.critical_attributes_reasoning, "Critical reasoning")
            } else {
                String::new()
            };

            if !insight.is_empty() {
                descriptions.push(format!("{}: {}", service, insight));
            }
        }
        descriptions
    }

    /// Reasoning record for a service, or an empty record when none exists.
    fn record(&self, side: Side, service: &str) -> ReasoningRecord {
        let lookup = match side {
            Side::Baseline => &self.baseline_reasoning,
            Side::Enhanced => &self.enhanced_reasoning,
        };
        lookup.get(service).cloned().unwrap_or_default()
    }
}

/// Labeled insights for each rationale field that changed between sides and
/// is non-empty on the enhanced side.
fn changed_rationale(baseline: &ReasoningRecord, enhanced: &ReasoningRecord) -> Vec<String> {
    let mut insights = Vec::new();

    if baseline.attribute_selection_rationale != enhanced.attribute_selection_rationale {
        let insight =
            extract_key_insight(&enhanced.attribute_selection_rationale, "Enhanced reasoning");
        if !insight.is_empty() {
            insights.push(format!("Attribute selection: {}", insight));
        }
    }

    if baseline.critical_attributes_reasoning != enhanced.critical_attributes_reasoning {
        let insight =
            extract_key_insight(&enhanced.critical_attributes_reasoning, "Critical attributes");
        if !insight.is_empty() {
            insights.push(format!("Critical attributes: {}", insight));
        }
    }

    if baseline.alternatives_considered != enhanced.alternatives_considered {
        if let Some(alternative) = enhanced.first_alternative_text() {
            let insight = extract_key_insight(&alternative, "Alternative considered");
            if !insight.is_empty() {
                insights.push(format!("Design choice: {}", insight));
            }
        }
    }

    insights
}

/// Index architectures by id. Entries without an id are skipped; a repeated
/// id keeps the later architecture.
fn index_architectures(set: ArchitectureSet, side: Side) -> BTreeMap<String, RawArchitecture> {
    let mut indexed = BTreeMap::new();
    for architecture in set.architectures {
        let Some(id) = architecture.architecture_id.clone() else {
            tracing::warn!(
                component = module_path!(),
                side = side.label(),
                "skipping architecture without architecture_id"
            );
            continue;
        };
        if indexed.insert(id.clone(), architecture).is_some() {
            tracing::debug!(
                component = module_path!(),
                side = side.label(),
                architecture_id = %id,
                "duplicate architecture_id; keeping the later entry"
            );
        }
    }
    indexed
}
