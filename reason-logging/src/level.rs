//! Severity levels for reported failures.

use core::{
    fmt,
    str::FromStr,
};

/// Severity attached to a reported failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed tracing of failure paths
    Trace,
    /// Failures useful while developing
    Debug,
    /// Expected failures worth noting
    Info,
    /// Failures that were worked around
    Warn,
    /// Failures that aborted an operation
    Error,
    /// Failures that leave the program unable to continue
    Critical,
}

/// Error returned when a string does not name a [`LogLevel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError {
    /// Static error message
    pub message: &'static str,
}

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid log level: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("err") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("critical") || s.eq_ignore_ascii_case("fatal") {
            Ok(Self::Critical)
        } else {
            Err(ParseLogLevelError { message: "expected trace, debug, info, warn, error or critical" })
        }
    }
}

impl LogLevel {
    /// Parse a level, falling back to `Info` for unknown names
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Info)
    }

    /// Lowercase name of the level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// The `log` facade level used when forwarding.
    ///
    /// `log` has no level above `Error`, so `Critical` maps onto it.
    #[must_use]
    pub const fn to_log_level(self) -> log::Level {
        match self {
            Self::Trace => log::Level::Trace,
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Critical => log::Level::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Trace,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
