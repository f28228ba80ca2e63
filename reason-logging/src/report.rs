//! Owned report records built from failure values.

use alloc::string::String;
use core::fmt;

use reason_error::{
    Error,
    Reason,
};

use crate::level::LogLevel;

/// A failure ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Severity
    pub level: LogLevel,
    /// Error code, when the failure carried one
    pub code: Option<i32>,
    /// Description text
    pub message: String,
    /// Where the failure was observed (component, module, request id...)
    pub origin: Option<String>,
}

impl ErrorReport {
    /// Build a report from a bare reason
    #[must_use]
    pub fn from_reason(level: LogLevel, reason: &Reason) -> Self {
        Self { level, code: None, message: String::from(reason.as_str()), origin: None }
    }

    /// Build a report from a coded error
    #[must_use]
    pub fn from_error(level: LogLevel, error: &Error) -> Self {
        Self {
            level,
            code: Some(error.code),
            message: String::from(error.desc.as_str()),
            origin: None,
        }
    }

    /// Attach the place the failure was observed
    #[must_use]
    pub fn with_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl From<Error> for ErrorReport {
    fn from(error: Error) -> Self {
        let (code, desc) = error.into_parts();
        Self { level: LogLevel::Error, code: Some(code), message: desc.into_string(), origin: None }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)?;
        if let Some(code) = self.code {
            write!(f, " (code {code})")?;
        }
        if let Some(origin) = &self.origin {
            write!(f, " @{origin}")?;
        }
        Ok(())
    }
}
