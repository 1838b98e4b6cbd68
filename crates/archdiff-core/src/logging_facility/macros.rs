//! Operation lifecycle macros
//!
//! Every fallible or long-running step (`compare_all`, `load_document`,
//! `export_rows`, `read_rows`, `show_architecture`) brackets itself with a
//! `start` event and exactly one `end` or `end_error` event. Field keys come
//! from `archdiff_core_types::schema`, so call sites need that crate as a
//! dependency.

/// Emit the `start` event of an operation, with optional extra fields.
///
/// ```
/// # use archdiff_core::log_op_start;
/// log_op_start!("load_document", path = "baseline.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = archdiff_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Emit the `end` event of an operation. `duration_ms` is required.
///
/// ```
/// # use archdiff_core::log_op_end;
/// log_op_end!("compare_all", duration_ms = 4u64, rows_len = 12u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = archdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Emit the `end_error` event of an operation.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind, stable code and message are logged as `err.kind`, `err.code`
/// and `err.message`.
///
/// ```
/// # use archdiff_core::{log_op_error, ArchDiffError};
/// let err = ArchDiffError::ArchitectureNotFound { architecture_id: "arch-9".to_string() };
/// log_op_error!("show_architecture", err, duration_ms = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = archdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.message = ex_err.message(),
            $($($field)*)?
        )
    }};
}
