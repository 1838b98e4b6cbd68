//! Show command
//!
//! Usage: archdiff show <ARCHITECTURE_ID> [--input <FILE>]

use super::DEFAULT_REPORT;
use archdiff_core::errors::{ArchDiffError, ExError};
use archdiff_core::log_op_error;
use archdiff_core::report::render_detail;
use archdiff_store::read_rows;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Architecture ID to show
    pub architecture_id: String,

    /// Exported report (CSV)
    #[arg(short, long, default_value = DEFAULT_REPORT)]
    pub input: PathBuf,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = std::time::Instant::now();
    let rows = read_rows(&args.input)?;

    let Some(row) = rows
        .iter()
        .find(|row| row.architecture_id == args.architecture_id)
    else {
        let err: ExError = ArchDiffError::ArchitectureNotFound {
            architecture_id: args.architecture_id,
        }
        .into();
        log_op_error!(
            "show_architecture",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err.into());
    };

    print!("{}", render_detail(row));
    Ok(())
}
