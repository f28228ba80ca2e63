// reason-error
// Module: Coded Errors
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! A numeric code paired with a [`Reason`].
//!
//! The code is owned by the caller: this library never interprets or
//! validates it, and `0` is as good a code as any other.

use alloc::{
    format,
    string::String,
};
use core::fmt;

use crate::{
    fragment::Fragment,
    reasons::Reason,
};

/// A failure identified by a caller-defined code plus a description.
///
/// ```
/// use reason_error::Error;
///
/// let mut error = Error::new(10, "some fail reason");
/// error.wrap("more context").extend("more info");
/// assert_eq!(error.code, 10);
/// assert_eq!(error.desc, "more context: some fail reason: more info");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// Caller-defined error code
    pub code: i32,
    /// Human-readable description
    pub desc: Reason,
}

impl Error {
    /// Create a new error from a code and any description fragment.
    #[must_use]
    pub fn new<F: Fragment>(code: i32, desc: F) -> Self {
        Self {
            code,
            desc: Reason::new(desc),
        }
    }

    /// The error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The error description.
    #[must_use]
    pub const fn desc(&self) -> &Reason {
        &self.desc
    }

    /// Prepend context to the description. The code is left untouched.
    pub fn wrap<F: Fragment>(&mut self, context: F) -> &mut Self {
        self.desc.wrap(context);
        self
    }

    /// Append detail to the description. The code is left untouched.
    pub fn extend<F: Fragment>(&mut self, info: F) -> &mut Self {
        self.desc.extend(info);
        self
    }

    /// Consuming form of [`wrap`](Self::wrap).
    #[must_use]
    pub fn wrapped<F: Fragment>(mut self, context: F) -> Self {
        self.desc.wrap(context);
        self
    }

    /// Consuming form of [`extend`](Self::extend).
    #[must_use]
    pub fn extended<F: Fragment>(mut self, info: F) -> Self {
        self.desc.extend(info);
        self
    }

    /// One-line diagnostic rendering:
    /// `error { code: <code>, desc: "<description>" }`.
    ///
    /// Quotes and control characters inside the description are written
    /// as-is, so the output is not guaranteed to be unambiguous.
    #[must_use]
    pub fn debug_string(&self) -> String {
        format!("{self:?}")
    }

    /// Split the error into its code and description.
    #[must_use]
    pub fn into_parts(self) -> (i32, Reason) {
        (self.code, self.desc)
    }
}

impl From<Error> for Reason {
    fn from(error: Error) -> Self {
        error.desc
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {{ code: {}, desc: \"{}\" }}", self.code, self.desc)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.desc, self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
