//! Compare command
//!
//! Usage: archdiff compare [--baseline <FILE>] [--enhanced <FILE>]
//!        [--baseline-reasoning <FILE>] [--enhanced-reasoning <FILE>] [--output <FILE>]

use super::DEFAULT_REPORT;
use archdiff_core::report::summarize;
use archdiff_store::{load_inputs, write_rows, InputPaths};
use clap::Args;
use std::path::PathBuf;

const DEFAULT_BASELINE: &str =
    "comparison_output/baseline_db_architectures_set_search_space_output.json";
const DEFAULT_ENHANCED: &str =
    "comparison_output/enhanced_db_architectures_set_search_space_output.json";
const DEFAULT_BASELINE_REASONING: &str =
    "comparison_output/baseline_db_architectures_set_search_space_reasoning_output.json";
const DEFAULT_ENHANCED_REASONING: &str =
    "comparison_output/enhanced_db_architectures_set_search_space_reasoning_output.json";

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Baseline architecture set (JSON)
    #[arg(long, default_value = DEFAULT_BASELINE)]
    pub baseline: PathBuf,

    /// Enhanced architecture set (JSON)
    #[arg(long, default_value = DEFAULT_ENHANCED)]
    pub enhanced: PathBuf,

    /// Baseline reasoning set (JSON)
    #[arg(long, default_value = DEFAULT_BASELINE_REASONING)]
    pub baseline_reasoning: PathBuf,

    /// Enhanced reasoning set (JSON)
    #[arg(long, default_value = DEFAULT_ENHANCED_REASONING)]
    pub enhanced_reasoning: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_REPORT)]
    pub output: PathBuf,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = load_inputs(&InputPaths {
        baseline: args.baseline,
        enhanced: args.enhanced,
        baseline_reasoning: args.baseline_reasoning,
        enhanced_reasoning: args.enhanced_reasoning,
    });

    let rows = inputs.into_comparator().compare_all();
    write_rows(&args.output, &rows)?;

    println!("Tabular comparison saved to {}", args.output.display());
    println!();
    println!("{}", summarize(&rows));

    Ok(())
}
