//! CSV persistence of comparison rows
//!
//! One record per row with the fixed [`COLUMNS`] header. Same-flags are
//! written as `0`/`1`. The header is written even for an empty report.

use crate::errors::{export_failed, import_failed, io_error, Result};
use archdiff_core::model::ComparisonRow;
use archdiff_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::Path;

/// Report column headers, in output order
pub const COLUMNS: [&str; 10] = [
    "Architecture",
    "Services_Same",
    "Components_Same",
    "Attributes_Same",
    "Configurations_Same",
    "Services_Differences",
    "Components_Differences",
    "Attributes_Differences",
    "Configurations_Differences",
    "Reasoning_Description",
];

/// Write rows to `path`, creating the parent directory if needed
pub fn write_rows(path: &Path, rows: &[ComparisonRow]) -> Result<()> {
    let start = std::time::Instant::now();
    log_op_start!("export_rows", path = %path.display(), rows_len = rows.len() as u64);

    let result = write_csv(path, rows);

    match &result {
        Ok(()) => log_op_end!(
            "export_rows",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_len = rows.len() as u64
        ),
        Err(err) => log_op_error!(
            "export_rows",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        ),
    }
    result
}

fn write_csv(path: &Path, rows: &[ComparisonRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", parent, e))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| export_failed(path, e))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| export_failed(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| export_failed(path, e))?;
    }
    writer.flush().map_err(|e| export_failed(path, e))?;
    Ok(())
}

/// Read rows previously written by [`write_rows`]
pub fn read_rows(path: &Path) -> Result<Vec<ComparisonRow>> {
    let start = std::time::Instant::now();
    log_op_start!("read_rows", path = %path.display());

    let result = read_csv(path);

    match &result {
        Ok(rows) => log_op_end!(
            "read_rows",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_len = rows.len() as u64
        ),
        Err(err) => log_op_error!(
            "read_rows",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        ),
    }
    result
}

fn read_csv(path: &Path) -> Result<Vec<ComparisonRow>> {
    let file = fs::File::open(path).map_err(|e| io_error("read_rows", path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| import_failed(path, e))?;
    if headers.iter().ne(COLUMNS.iter().copied()) {
        return Err(import_failed(
            path,
            format!("unexpected header: {}", headers.iter().collect::<Vec<_>>().join(",")),
        ));
    }

    reader
        .deserialize::<ComparisonRow>()
        .map(|record| record.map_err(|e| import_failed(path, e)))
        .collect()
}
