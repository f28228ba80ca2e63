//! Example showing a failure travelling up a call chain.
//!
//! Each layer returns `Option<Error>` or `Result<_, Error>` and adds its own
//! context on the way up.
//!
//! Run with: `cargo run -p reason-error --example propagation`

use std::time::{
    SystemTime,
    UNIX_EPOCH,
};

use reason_error::{
    coded_error,
    Error,
};

const ODD_VALUE: i32 = 1001;
const BOARD_READ: i32 = 2;

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.as_nanos() as u64)
}

fn next_value(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    *state >> 33
}

fn foo_may_fail(state: &mut u64) -> Option<Error> {
    let val = next_value(state);
    (val % 2 == 1).then(|| coded_error!(ODD_VALUE, "rand was odd w/ val ", val))
}

fn bar_may_fail(state: &mut u64) -> Option<Error> {
    let mut error = foo_may_fail(state)?;
    error.wrap("foo failed");
    Some(error)
}

fn read_board(register: u8) -> Result<u32, Error> {
    Err(coded_error!(BOARD_READ, "failed to get number ", register, " from board"))
}

fn main() -> anyhow::Result<()> {
    println!("Option propagation");
    println!("------------------");

    let mut state = seed();
    for _ in 0..10 {
        match bar_may_fail(&mut state) {
            Some(error) => println!("{}", error.debug_string()),
            None => println!("no error"),
        }
    }
    println!();

    println!("Result propagation");
    println!("------------------");

    let reading =
        read_board(11).map_err(|e| e.wrapped("there was a problem").extended("retry later"));
    if let Err(error) = &reading {
        println!("code: {}", error.code);
        println!("desc: {}", error.desc);
        println!("debug: {error:?}");

        // Errors convert into `anyhow::Error` like any other std error.
        let any = anyhow::Error::from(error.clone()).context("sensor poll");
        println!("anyhow: {any:#}");
    }

    let value = reading.unwrap_or_default();
    println!("read {value}");
    Ok(())
}
