//! Dispatch of failure reports.
//!
//! A [`Reporter`] filters reports by severity and hands them either to a
//! registered handler or, when none is registered, to the `log` facade.

use alloc::boxed::Box;

use reason_error::{
    Error,
    Reason,
};

use crate::{
    level::LogLevel,
    report::ErrorReport,
};

/// Function type for handling reports
pub type ReportHandler = Box<dyn Fn(&ErrorReport) + Send + Sync>;

/// Reporter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Reports below this level are dropped
    pub min_level: LogLevel,
    /// `log` target used when forwarding to the facade
    pub target: &'static str,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self { min_level: LogLevel::Info, target: "reason_error" }
    }
}

/// Routes failure reports to a handler or the `log` facade
pub struct Reporter {
    config: ReporterConfig,
    handler: Option<ReportHandler>,
}

impl Reporter {
    /// Create a reporter forwarding to the `log` facade
    #[must_use]
    pub const fn new(config: ReporterConfig) -> Self {
        Self { config, handler: None }
    }

    /// Current settings
    #[must_use]
    pub const fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Register a handler, replacing any previous one
    pub fn register_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ErrorReport) + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Remove the handler, going back to the `log` facade
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    /// Check if a handler is registered
    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether a report at `level` would be emitted
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.min_level
    }

    /// Emit a report. Returns `false` when it was filtered out.
    pub fn report(&self, report: &ErrorReport) -> bool {
        if !self.enabled(report.level) {
            return false;
        }

        match &self.handler {
            Some(handler) => handler(report),
            None => log::log!(target: self.config.target, report.level.to_log_level(), "{report}"),
        }
        true
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReporterConfig::default())
    }
}

impl core::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reporter")
            .field("config", &self.config)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

/// Extension trait for reporting failure values directly
pub trait ReportExt {
    /// Build a report at `level` and pass it to `reporter`
    fn report_to(&self, reporter: &Reporter, level: LogLevel) -> bool;
}

impl ReportExt for Reason {
    fn report_to(&self, reporter: &Reporter, level: LogLevel) -> bool {
        // Skip the copy when the report would be dropped anyway.
        reporter.enabled(level) && reporter.report(&ErrorReport::from_reason(level, self))
    }
}

impl ReportExt for Error {
    fn report_to(&self, reporter: &Reporter, level: LogLevel) -> bool {
        reporter.enabled(level) && reporter.report(&ErrorReport::from_error(level, self))
    }
}
