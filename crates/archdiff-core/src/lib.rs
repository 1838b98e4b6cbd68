//! ArchDiff Core - structural diff of baseline vs enhanced architecture sets
//!
//! This crate provides:
//! - The raw and normalized architecture models and reasoning records
//! - The structure normalizer
//! - Four independent level differencers (services, components, attributes,
//!   configurations)
//! - The rationale extractor for free-text reasoning
//! - The comparison orchestrator producing one row per architecture
//! - Display-only report aggregates (summary, filters, detail view)
//! - The error and logging facilities shared by the other crates

pub mod compare;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod rationale;
pub mod report;

// Re-export commonly used types
pub use compare::ArchitectureComparator;
pub use diff::{Level, LevelDiff, LevelReport};
pub use errors::{ArchDiffError, ExError, ExErrorKind};
pub use model::{ArchitectureSet, ComparisonRow, NormalizedArchitecture, ReasoningSet, Side};
pub use normalize::normalize;
pub use rationale::extract_key_insight;
