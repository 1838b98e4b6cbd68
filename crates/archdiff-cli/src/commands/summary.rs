//! Summary command
//!
//! Usage: archdiff summary [--input <FILE>] [--filter <FILTER>] [--search <TEXT>] [--limit <N>]

use super::DEFAULT_REPORT;
use archdiff_core::errors::ExError;
use archdiff_core::report::{render_row_line, summarize, RowFilter, RowQuery};
use archdiff_store::read_rows;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Exported report (CSV)
    #[arg(short, long, default_value = DEFAULT_REPORT)]
    pub input: PathBuf,

    /// Row filter: all, identical, different, services, components,
    /// attributes, configurations
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Case-insensitive architecture id search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum number of rows to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Execute summary command
pub fn execute(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filter: RowFilter = args.filter.parse().map_err(ExError::from)?;
    let rows = read_rows(&args.input)?;

    println!("{}", summarize(&rows));
    println!();

    let query = RowQuery {
        filter,
        search: args.search,
        limit: args.limit,
    };
    let filtered = query.apply(&rows);
    println!("{}", filtered.showing_label());
    for row in &filtered.rows {
        println!("{}", render_row_line(row));
    }

    Ok(())
}
