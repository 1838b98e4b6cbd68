//! JSON document loader
//!
//! Reads architecture sets and reasoning sets from disk. The strict loaders
//! return an `ExError`; the `*_or_empty` loaders log that error and hand back
//! an empty document so a comparison can still run.

use crate::errors::{document_malformed, document_unreadable, Result};
use archdiff_core::model::{ArchitectureSet, ReasoningSet};
use archdiff_core::{log_op_end, log_op_error, log_op_start, ArchitectureComparator};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse one JSON document
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let start = std::time::Instant::now();
    log_op_start!("load_document", path = %path.display());

    let parsed = fs::read_to_string(path)
        .map_err(|e| document_unreadable(path, e))
        .and_then(|content| {
            serde_json::from_str::<T>(&content).map_err(|e| document_malformed(path, e))
        });

    match parsed {
        Ok(document) => {
            log_op_end!(
                "load_document",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            Ok(document)
        }
        Err(err) => {
            log_op_error!(
                "load_document",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            Err(err)
        }
    }
}

/// Load an architecture set (`{"architectures": [...]}`)
pub fn load_architecture_set(path: &Path) -> Result<ArchitectureSet> {
    load_json(path)
}

/// Load a reasoning set (`{"reasoning_objects": [...]}`)
pub fn load_reasoning_set(path: &Path) -> Result<ReasoningSet> {
    load_json(path)
}

/// Load an architecture set, or an empty one if the file cannot be loaded
pub fn load_architecture_set_or_empty(path: &Path) -> ArchitectureSet {
    load_architecture_set(path).unwrap_or_else(|_| {
        tracing::warn!(
            component = module_path!(),
            path = %path.display(),
            "using empty architecture set"
        );
        ArchitectureSet::default()
    })
}

/// Load a reasoning set, or an empty one if the file cannot be loaded
pub fn load_reasoning_set_or_empty(path: &Path) -> ReasoningSet {
    load_reasoning_set(path).unwrap_or_else(|_| {
        tracing::warn!(
            component = module_path!(),
            path = %path.display(),
            "using empty reasoning set"
        );
        ReasoningSet::default()
    })
}

/// Locations of the four comparison inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub baseline: PathBuf,
    pub enhanced: PathBuf,
    pub baseline_reasoning: PathBuf,
    pub enhanced_reasoning: PathBuf,
}

/// The four loaded comparison inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonInputs {
    pub baseline: ArchitectureSet,
    pub enhanced: ArchitectureSet,
    pub baseline_reasoning: ReasoningSet,
    pub enhanced_reasoning: ReasoningSet,
}

impl ComparisonInputs {
    pub fn into_comparator(self) -> ArchitectureComparator {
        ArchitectureComparator::new(
            self.baseline,
            self.enhanced,
            self.baseline_reasoning,
            self.enhanced_reasoning,
        )
    }
}

/// Load all four inputs. Missing or malformed files become empty documents.
pub fn load_inputs(paths: &InputPaths) -> ComparisonInputs {
    let inputs = ComparisonInputs {
        baseline: load_architecture_set_or_empty(&paths.baseline),
        enhanced: load_architecture_set_or_empty(&paths.enhanced),
        baseline_reasoning: load_reasoning_set_or_empty(&paths.baseline_reasoning),
        enhanced_reasoning: load_reasoning_set_or_empty(&paths.enhanced_reasoning),
    };
    tracing::info!(
        component = module_path!(),
        baseline_len = inputs.baseline.architectures.len() as u64,
        enhanced_len = inputs.enhanced.architectures.len() as u64,
        baseline_reasoning_len = inputs.baseline_reasoning.reasoning_objects.len() as u64,
        enhanced_reasoning_len = inputs.enhanced_reasoning.reasoning_objects.len() as u64,
        "loaded comparison inputs"
    );
    inputs
}
