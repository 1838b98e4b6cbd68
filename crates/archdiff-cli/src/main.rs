//! ArchDiff CLI
//!
//! Command-line interface for comparing baseline and enhanced architecture sets

use archdiff_core::errors::ExError;
use archdiff_core::logging_facility::{init, Profile};
use archdiff_core_types::RunId;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "archdiff")]
#[command(about = "ArchDiff - Baseline vs enhanced architecture comparison", long_about = None)]
struct Cli {
    /// Log output format (filter with RUST_LOG)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Dev)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable logs
    Dev,
    /// JSON structured logs
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare both architecture sets and export the tabular report
    Compare(commands::compare::CompareArgs),
    /// Summarize and filter an exported report
    Summary(commands::summary::SummaryArgs),
    /// Show the detail view of one architecture in an exported report
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let run_id = RunId::new();
    let span = tracing::info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Summary(args) => commands::summary::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        match e.downcast::<ExError>() {
            Ok(ex_err) => eprintln!("Error: {}", (*ex_err).with_run_id(run_id)),
            Err(other) => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
