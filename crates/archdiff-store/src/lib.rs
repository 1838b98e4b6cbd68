//! ArchDiff Store - document loading and report persistence
//!
//! Provides:
//! - JSON loaders for architecture sets and reasoning sets, in a strict
//!   variant returning `ExError` and a never-failing variant that logs the
//!   failure and falls back to an empty document
//! - CSV export and import of comparison rows

pub mod errors;
pub mod export;
pub mod loader;

// Re-export key types
pub use errors::Result;
pub use export::{read_rows, write_rows, COLUMNS};
pub use loader::{
    load_architecture_set, load_architecture_set_or_empty, load_inputs, load_json,
    load_reasoning_set, load_reasoning_set_or_empty, ComparisonInputs, InputPaths,
};
