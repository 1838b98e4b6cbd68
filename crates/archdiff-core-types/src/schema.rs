//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Entity identifiers
pub const FIELD_ARCHITECTURE_ID: &str = "architecture_id";
pub const FIELD_SERVICE_CODENAME: &str = "service_codename";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_ROWS_LEN: &str = "rows_len";
pub const FIELD_BASELINE_LEN: &str = "baseline_len";
pub const FIELD_ENHANCED_LEN: &str = "enhanced_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
