// reason-error
// Module: Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for reason-error
//!
//! Re-exports the types, traits and macros needed to build and compose
//! failure values, for both std and `no_std` + `alloc` users.

pub use alloc::{
    borrow::Cow,
    string::{
        String,
        ToString,
    },
};
pub use core::fmt::{
    self,
    Debug,
    Display,
};

pub use crate::{
    coded_error,
    reason,
    Displayed,
    Error,
    Fragment,
    Reason,
    SEPARATOR,
};
