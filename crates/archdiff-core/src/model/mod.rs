//! Data model for architecture comparison
//!
//! - [`raw`]: wire shapes of the architecture set documents
//! - [`normalized`]: the canonical service -> component -> attribute tree
//! - [`reasoning`]: free-text reasoning records and the per-side lookup
//! - [`row`]: the flat per-architecture comparison row

pub(crate) mod lenient;
pub mod normalized;
pub mod raw;
pub mod reasoning;
pub mod row;

pub use normalized::{Attribute, ComponentEntry, NormalizedArchitecture, ServiceEntry};
pub use raw::{
    ArchitectureSet, RawArchitecture, RawAttribute, RawComponent, RawServiceComponent,
    RawServiceSearchSpace,
};
pub use reasoning::{ReasoningLookup, ReasoningRecord, ReasoningSet};
pub use row::ComparisonRow;

/// Which of the two architecture sets a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Baseline,
    Enhanced,
}

impl Side {
    /// Lowercase label used in report text ("baseline" / "enhanced")
    pub fn label(&self) -> &'static str {
        match self {
            Side::Baseline => "baseline",
            Side::Enhanced => "enhanced",
        }
    }
}
