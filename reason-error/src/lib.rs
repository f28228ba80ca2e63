// reason-error
// Module: Contextual Failure Values
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contextual failure values.
//!
//! This library provides two small value types for describing failures:
//!
//! - [`Reason`]: an owned, human-readable description of what went wrong.
//! - [`Error`]: a caller-defined integer code paired with a [`Reason`].
//!
//! Both are built from heterogeneous pieces (anything implementing
//! [`Fragment`]) and support two composition operations used while a
//! failure travels up a call chain:
//!
//! - `wrap` prepends context ("what I was trying to do"),
//! - `extend` appends detail ("what else is relevant").
//!
//! Both insert the `": "` separator and mutate the value in place.
//!
//! # Usage
//!
//! ```
//! use reason_error::{coded_error, reason, Error, Reason};
//!
//! let mut why = reason!("board returned ", 11, " bytes");
//! why.wrap("failed to read sensor").extend("expected 16");
//! assert_eq!(why, "failed to read sensor: board returned 11 bytes: expected 16");
//!
//! let mut err = coded_error!(101, "rand was odd w/ val ", 7);
//! err.wrap("foo failed");
//! assert_eq!(err.code, 101);
//! assert_eq!(
//!     err.debug_string(),
//!     r#"error { code: 101, desc: "foo failed: rand was odd w/ val 7" }"#
//! );
//! ```
//!
//! Absence of a failure is never encoded in these types: return an
//! `Option<Error>` or a `Result<T, Error>` instead.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Binary std/no_std choice
extern crate alloc;

/// Append-printable pieces used to build descriptions
pub mod fragment;
/// The human-readable failure description
pub mod reasons;
/// Coded error values
pub mod errors;

// Construction macros
#[macro_use]
pub mod macros;

pub mod prelude;

pub use errors::Error;
pub use fragment::{Displayed, Fragment};
pub use reasons::{Reason, SEPARATOR};

/// Items used by the exported macros; not public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}
