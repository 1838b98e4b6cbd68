//! Four-level structural diff engine.
//!
//! Compares two normalized architectures at four independent levels:
//!
//! - **services**: do the same service codenames exist
//! - **components**: do the same `"{service}::{component_key}"` keys exist
//! - **attributes**: do the same attribute codenames exist per component
//! - **configurations**: do instances, sort and attribute values/constraint/unit match
//!
//! ## Entry point
//!
//! ```ignore
//! use archdiff_core::diff::engine::compare_levels;
//!
//! let report = compare_levels(&baseline, &enhanced);
//! assert!(report.services.same);
//! ```
//!
//! ## Guarantees
//!
//! - **Reflexive**: an architecture compared with itself is `same` at every level
//!   with the text `"No differences"`.
//! - **Symmetric verdicts**: swapping sides never changes a `same` flag; only the
//!   baseline/enhanced labels in the text swap.
//! - **Deterministic text**: names and keys are listed in lexicographic order.
//! - The attributes and configurations levels overlap and are reported as
//!   separate columns.

pub mod engine;
pub mod model;

pub use engine::{
    compare_attributes, compare_components, compare_configurations, compare_levels,
    compare_services,
};
pub use model::{Level, LevelDiff, LevelReport};
