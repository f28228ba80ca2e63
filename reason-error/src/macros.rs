// reason-error
// Module: Construction Macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for building descriptions from any number of pieces.
//!
//! Tuples cover up to twelve pieces; these macros have no such limit.

/// Build a [`Reason`](crate::Reason) by concatenating fragments.
///
/// A single argument goes straight to [`Reason::new`](crate::Reason::new),
/// so an owned `String` or `Reason` keeps its buffer. With two or more
/// arguments each piece is only borrowed and stays usable afterwards.
///
/// # Examples
///
/// ```
/// use reason_error::reason;
///
/// assert_eq!(reason!("val=", 100, "!"), "val=100!");
/// assert_eq!(reason!(String::from("as is")), "as is");
/// ```
#[macro_export]
macro_rules! reason {
    ($part:expr $(,)?) => {
        $crate::Reason::new($part)
    };
    ($($part:expr),+ $(,)?) => {{
        let mut text = $crate::__private::String::new();
        $( $crate::Fragment::append_to(&$part, &mut text); )+
        $crate::Reason::new(text)
    }};
}

/// Build an [`Error`](crate::Error) from a code and description fragments.
///
/// # Examples
///
/// ```
/// use reason_error::coded_error;
///
/// let error = coded_error!(101, "val w/ ", 100, " more");
/// assert_eq!(error.code, 101);
/// assert_eq!(error.desc, "val w/ 100 more");
/// ```
#[macro_export]
macro_rules! coded_error {
    ($code:expr, $($part:expr),+ $(,)?) => {
        $crate::Error::new($code, $crate::reason!($($part),+))
    };
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reason;

    #[test]
    fn test_reason_macro_matches_tuple() {
        let from_macro = reason!("ap0, ", String::from("ap1, "), Reason::new("ap2, "), 100);
        let from_tuple = Reason::new(("ap0, ", String::from("ap1, "), Reason::new("ap2, "), 100));
        assert_eq!(from_macro, from_tuple);
        assert_eq!(from_macro, "ap0, ap1, ap2, 100");
    }

    #[test]
    fn test_reason_macro_beyond_tuple_arity() {
        let reason = reason!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14);
        assert_eq!(reason, "1234567891011121314");
    }

    #[test]
    fn test_reason_macro_does_not_consume_borrowed_pieces() {
        let inner = Reason::new("inner");
        let outer = reason!("<", inner, ">");
        assert_eq!(outer, "<inner>");
        assert_eq!(inner, "inner");

        let owned = String::from("kept");
        let joined = reason!(owned, "!");
        assert_eq!(joined, "kept!");
        assert_eq!(owned, "kept");
    }

    #[test]
    fn test_coded_error_macro() {
        let error = coded_error!(101, "some fail reason w/ val ", 100, " plus more info");
        assert_eq!(error.code, 101);
        assert_eq!(error.desc, "some fail reason w/ val 100 plus more info");

        let single = coded_error!(3, "single");
        assert_eq!(single.desc, "single");
    }
}
