//! Structured logging for ArchDiff
//!
//! One subscriber per process, installed by [`init`] with a [`Profile`]:
//! human-readable on stderr while developing, JSON lines in production.
//! `RUST_LOG` replaces the profile's default `archdiff=...` filter.
//!
//! Operation boundaries go through the `log_op_*` macros so every
//! `compare_all`, `load_document`, `export_rows` and `read_rows` event carries
//! the same `component` / `op` / `event` / `duration_ms` keys. Tests install
//! [`init_test_capture`] instead and assert on the recorded events.
//!
//! ```rust
//! use archdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
