//! `restock-report` — command-line caller of the forecasting engine.
//!
//! Loads an inventory snapshot from JSON, runs the requested report and prints the
//! result as JSON. Storage stays outside: the snapshot file is whatever the
//! surrounding application exported.

pub mod config;
pub mod report;
pub mod snapshot;

pub use config::{planning_config_from_env, TARGET_WEEKS_ENV, WEEKS_THRESHOLD_ENV};
pub use report::{render, ReportError, ReportKind};
pub use snapshot::{load_snapshot, InventorySnapshot};
