// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Integration tests for coded errors.

use reason_error::{coded_error, Displayed, Error, Reason};

#[test]
fn test_error_constructors() {
    // literal
    let e0 = Error::new(101, "a fail reason");
    assert_eq!(e0.code, 101);
    assert_eq!(e0.desc, "a fail reason");

    let rs = Reason::new("some fail reason");

    // copy from reason
    let e1 = Error::new(101, &rs);
    assert_eq!(e1.code, 101);
    assert_eq!(e1.desc, "some fail reason");

    // move from reason
    let e2 = Error::new(101, rs);
    assert_eq!(e2.code, 101);
    assert_eq!(e2.desc, "some fail reason");

    // copy of another error
    let e3 = e2.clone();
    assert_eq!(e3, e2);
    assert_eq!(e3.desc, "some fail reason");

    // move of another error
    let e4 = e2;
    assert_eq!(e4.code, 101);
    assert_eq!(e4.desc, "some fail reason");

    let ss = String::from("another fail reason");

    // copy from String
    let e5 = Error::new(202, &ss);
    assert_eq!(e5.code, 202);
    assert_eq!(e5.desc, "another fail reason");

    // move from String
    let e6 = Error::new(202, ss);
    assert_eq!(e6.code, 202);
    assert_eq!(e6.desc, "another fail reason");

    // variadic
    let e7 = coded_error!(101, "some fail reason w/ val ", 100, " plus more info");
    assert_eq!(e7.code, 101);
    assert_eq!(e7.desc, "some fail reason w/ val 100 plus more info");

    let e8 = Error::new(101, ("val w/ ", 100, " more"));
    assert_eq!(e8.desc, "val w/ 100 more");
}

#[test]
fn test_error_assignment() {
    let source = Error::new(101, "a fail reason");
    let mut target = Error::new(0, "");
    assert_eq!(target.code, 0);

    target.clone_from(&source);
    assert_eq!(target.code, 101);
    assert_eq!(target.desc, "a fail reason");

    let moved = Error::new(101, "a fail reason");
    let mut target = Error::new(0, "");
    assert!(target.desc.is_empty());
    target = moved;
    assert_eq!(target.code, 101);
    assert_eq!(target.desc, "a fail reason");
}

#[test]
fn test_error_wrap_and_extend_delegate() {
    let mut error = Error::new(42, "x");
    error.wrap("y").extend("z");

    let mut expected = Reason::new("x");
    expected.wrap("y").extend("z");

    assert_eq!(error.code, 42);
    assert_eq!(error.desc, expected);
    assert_eq!(error.desc, "y: x: z");
}

#[test]
fn test_error_debug_string() {
    let error = Error::new(101, "a fail reason");
    assert_eq!(error.debug_string(), r#"error { code: 101, desc: "a fail reason" }"#);
    assert_eq!(format!("{error:?}"), error.debug_string());
}

#[test]
fn test_error_through_option_chain() {
    fn read_board(fail: bool) -> Option<Error> {
        fail.then(|| coded_error!(1001, "failed to get number ", 11, " from board"))
    }

    fn poll(fail: bool) -> Option<Error> {
        read_board(fail).map(|e| e.wrapped("poll failed"))
    }

    assert!(poll(false).is_none());

    let error = poll(true).unwrap();
    assert_eq!(error.code, 1001);
    assert_eq!(error.desc, "poll failed: failed to get number 11 from board");
}

#[test]
fn test_error_through_result_chain() {
    fn parse(input: &str) -> Result<u32, Error> {
        input
            .parse::<u32>()
            .map_err(|e| coded_error!(7, "not a number: ", Displayed(e)))
    }

    fn load(input: &str) -> Result<u32, Error> {
        parse(input).map_err(|e| e.wrapped(("loading '", input, "'")))
    }

    assert_eq!(load("12").unwrap(), 12);

    let error = load("1x").unwrap_err();
    assert_eq!(error.code, 7);
    assert_eq!(error.desc, "loading '1x': not a number: invalid digit found in string");
}

#[test]
fn test_error_converts_into_anyhow() {
    let error = Error::new(9, "boom").wrapped("outer");
    let any: anyhow::Error = error.into();
    assert_eq!(any.to_string(), "outer: boom (code 9)");
    assert_eq!(any.downcast_ref::<Error>().map(Error::code), Some(9));
}

#[test]
fn test_error_into_reason() {
    let reason: Reason = Error::new(3, "only the text").into();
    assert_eq!(reason, "only the text");
}
