// reason-error
// Module: Reasons
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The human-readable failure description.

use alloc::{
    borrow::Cow,
    string::String,
};
use core::{
    borrow::Borrow,
    fmt,
};

use crate::fragment::Fragment;

/// Separator inserted by [`Reason::wrap`] and [`Reason::extend`].
pub const SEPARATOR: &str = ": ";

/// A human-readable failure description.
///
/// A `Reason` always owns its text. There is no empty "no reason" state:
/// absence of a failure belongs in the caller's `Option` or `Result`.
///
/// [`wrap`](Self::wrap) and [`extend`](Self::extend) mutate the reason in
/// place and return `&mut Self` so calls can be chained. They do not create
/// a new value.
///
/// ```
/// use reason_error::Reason;
///
/// let mut reason = Reason::new("a fail reason");
/// reason.wrap("more context").extend(("attempt ", 3));
/// assert_eq!(reason, "more context: a fail reason: attempt 3");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reason {
    text: String,
}

impl Reason {
    /// Create a reason from any fragment.
    ///
    /// A `String` or `Reason` argument is moved in without copying its
    /// buffer. Tuples concatenate their elements left-to-right.
    #[must_use]
    pub fn new<F: Fragment>(parts: F) -> Self {
        Self {
            text: parts.into_string(),
        }
    }

    /// Prepend context: the text becomes `context + ": " + text`.
    pub fn wrap<F: Fragment>(&mut self, context: F) -> &mut Self {
        let mut text =
            String::with_capacity(context.size_hint() + SEPARATOR.len() + self.text.len());
        context.append_to(&mut text);
        text.push_str(SEPARATOR);
        text.push_str(&self.text);
        self.text = text;
        self
    }

    /// Append detail: the text becomes `text + ": " + info`.
    pub fn extend<F: Fragment>(&mut self, info: F) -> &mut Self {
        self.text.reserve(SEPARATOR.len() + info.size_hint());
        self.text.push_str(SEPARATOR);
        info.append_to(&mut self.text);
        self
    }

    /// Consuming form of [`wrap`](Self::wrap).
    #[must_use]
    pub fn wrapped<F: Fragment>(mut self, context: F) -> Self {
        self.wrap(context);
        self
    }

    /// Consuming form of [`extend`](Self::extend).
    #[must_use]
    pub fn extended<F: Fragment>(mut self, info: F) -> Self {
        self.extend(info);
        self
    }

    /// The description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the reason was built from empty text.
    ///
    /// Empty reasons are accepted but carry no information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Give up the reason and return its buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Fragment for Reason {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(&self.text);
    }

    fn size_hint(&self) -> usize {
        self.text.len()
    }

    fn into_string(self) -> String {
        self.text
    }
}

impl From<&str> for Reason {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Reason {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&String> for Reason {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<Cow<'_, str>> for Reason {
    fn from(text: Cow<'_, str>) -> Self {
        Self::new(text)
    }
}

impl From<&Reason> for Reason {
    fn from(other: &Reason) -> Self {
        other.clone()
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.text
    }
}

impl AsRef<str> for Reason {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Borrow<str> for Reason {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Reason {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Reason {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Reason {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl PartialEq<Reason> for str {
    fn eq(&self, other: &Reason) -> bool {
        self == other.text
    }
}

impl PartialEq<Reason> for &str {
    fn eq(&self, other: &Reason) -> bool {
        *self == other.text
    }
}

impl PartialEq<Reason> for String {
    fn eq(&self, other: &Reason) -> bool {
        *self == other.text
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reason").field(&self.text).finish()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Reason {}
