// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Reports forwarded to the `log` facade.

use std::sync::Mutex;

use log::{
    Level,
    LevelFilter,
    Log,
    Metadata,
    Record,
};
use reason_logging::{
    Error,
    ErrorReport,
    LogLevel,
    Reason,
    ReportExt,
    Reporter,
    ReporterConfig,
};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

#[test]
fn test_reports_reach_log_facade() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let reporter = Reporter::new(ReporterConfig { min_level: LogLevel::Debug, target: "board" });

    let mut error = Error::new(1001, "rand was odd w/ val 7");
    error.wrap("foo failed");
    assert!(error.report_to(&reporter, LogLevel::Critical));

    let reason = Reason::new("cache miss").extended("refetching");
    assert!(reason.report_to(&reporter, LogLevel::Debug));

    // Below the configured minimum: never reaches the facade.
    assert!(!reason.report_to(&reporter, LogLevel::Trace));

    let report = ErrorReport::from_error(LogLevel::Warn, &error).with_origin("poller");
    assert!(reporter.report(&report));

    let records = LOGGER.records.lock().unwrap();
    assert_eq!(
        *records,
        vec![
            (
                Level::Error,
                "board".to_string(),
                "[critical] foo failed: rand was odd w/ val 7 (code 1001)".to_string()
            ),
            (Level::Debug, "board".to_string(), "[debug] cache miss: refetching".to_string()),
            (
                Level::Warn,
                "board".to_string(),
                "[warn] foo failed: rand was odd w/ val 7 (code 1001) @poller".to_string()
            ),
        ]
    );
}
