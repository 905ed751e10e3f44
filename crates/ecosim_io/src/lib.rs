//! # Ecosim IO
//!
//! Reporting layer for ecosim runs.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The `Day,Population` CSV series
//! - JSON-lines logs of full day reports

/// Error types and result aliases for I/O operations
pub mod error;
/// Day-by-day report sinks
pub mod history;

pub use error::{IoError, Result};
pub use history::{PopulationRecorder, ReportLogger, ReportSink};
