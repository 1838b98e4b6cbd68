//! Display-only aggregates over computed comparison rows.
//!
//! Nothing here feeds back into the diff; these helpers only summarize,
//! filter and render rows for the command-line front end.

pub mod detail;
pub mod filter;
pub mod summary;

pub use detail::{render_detail, render_row_line};
pub use filter::{FilteredRows, RowFilter, RowQuery};
pub use summary::{summarize, LevelSummary, ReportSummary};
