//! # reason-logging
//!
//! Logging bridge for `reason-error` failure values.
//!
//! Turns a [`Reason`] or [`Error`] into an [`ErrorReport`] and routes it
//! through a [`Reporter`]: either to a registered handler or to the `log`
//! facade, after filtering by severity.
//!
//! ```
//! use reason_logging::{Error, LogLevel, ReportExt, Reporter, ReporterConfig};
//!
//! let reporter = Reporter::new(ReporterConfig { min_level: LogLevel::Warn, ..Default::default() });
//!
//! let mut error = Error::new(101, "a fail reason");
//! error.wrap("polling board");
//! assert!(error.report_to(&reporter, LogLevel::Error));
//! assert!(!error.report_to(&reporter, LogLevel::Debug));
//! ```

// reason-logging
// Module: Failure Reporting
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)] // Rule 2
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Binary std/no_std choice
extern crate alloc;

// Reexports for convenience
pub use reason_error::{Error, Reason};

/// Severity levels for reported failures.
///
/// Levels range from Trace (lowest severity) to Critical (highest
/// severity) and map onto the `log` facade levels.
pub mod level;

/// Owned report records.
pub mod report;

/// Report dispatch to handlers or the `log` facade.
pub mod reporter;

// Reexport types
pub use level::{LogLevel, ParseLogLevelError};
pub use report::ErrorReport;
pub use reporter::{ReportExt, ReportHandler, Reporter, ReporterConfig};
