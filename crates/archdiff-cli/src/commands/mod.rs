pub mod compare;
pub mod show;
pub mod summary;

/// Default location of the exported report
pub const DEFAULT_REPORT: &str = "comparison_output/tabular_architecture_comparison.csv";
