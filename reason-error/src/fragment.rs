// reason-error
// Module: Description Fragments
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Append-printable pieces.
//!
//! A [`Fragment`] knows how to print itself onto the end of a growable text
//! buffer. Descriptions are assembled by appending fragments left-to-right
//! with no separator, so a tuple such as `("val=", 100, "!")` yields
//! `"val=100!"`.
//!
//! Owned text (`String`, [`Reason`](crate::Reason), `Cow::Owned`) hands over
//! its buffer from [`Fragment::into_string`] instead of being printed again.

use alloc::{
    borrow::Cow,
    string::String,
};
use core::fmt::{
    self,
    Write,
};

/// A value that can be printed into a failure description.
pub trait Fragment {
    /// Append the printed form of `self` to `buf`.
    fn append_to(&self, buf: &mut String);

    /// Number of bytes `append_to` is expected to write.
    ///
    /// Only used to pre-size buffers; `0` means "unknown".
    fn size_hint(&self) -> usize {
        0
    }

    /// Convert into an owned string, reusing an existing buffer when `Self`
    /// already owns one.
    fn into_string(self) -> String
    where
        Self: Sized,
    {
        let mut buf = String::with_capacity(self.size_hint());
        self.append_to(&mut buf);
        buf
    }
}

impl Fragment for str {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }

    fn size_hint(&self) -> usize {
        self.len()
    }
}

impl Fragment for String {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }

    fn size_hint(&self) -> usize {
        self.len()
    }

    fn into_string(self) -> String {
        self
    }
}

impl Fragment for Cow<'_, str> {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }

    fn size_hint(&self) -> usize {
        self.len()
    }

    fn into_string(self) -> String {
        self.into_owned()
    }
}

impl Fragment for char {
    fn append_to(&self, buf: &mut String) {
        buf.push(*self);
    }

    fn size_hint(&self) -> usize {
        self.len_utf8()
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn append_to(&self, buf: &mut String) {
        (**self).append_to(buf);
    }

    fn size_hint(&self) -> usize {
        (**self).size_hint()
    }
}

/// Print `value` onto the end of `buf`.
fn write_display(buf: &mut String, value: &(impl fmt::Display + ?Sized)) {
    // Writing into a `String` cannot fail.
    let _ = write!(buf, "{value}");
}

impl Fragment for fmt::Arguments<'_> {
    fn append_to(&self, buf: &mut String) {
        write_display(buf, self);
    }

    fn size_hint(&self) -> usize {
        self.as_str().map_or(0, str::len)
    }
}

impl Fragment for dyn fmt::Display + '_ {
    fn append_to(&self, buf: &mut String) {
        write_display(buf, self);
    }
}

macro_rules! display_fragment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fragment for $ty {
                fn append_to(&self, buf: &mut String) {
                    write_display(buf, self);
                }
            }
        )*
    };
}

display_fragment!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Adapter printing any [`fmt::Display`] value as a fragment.
///
/// ```
/// use reason_error::{reason, Displayed};
///
/// let addr = std::net::Ipv4Addr::LOCALHOST;
/// assert_eq!(reason!("no route to ", Displayed(addr)), "no route to 127.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Fragment for Displayed<T> {
    fn append_to(&self, buf: &mut String) {
        write_display(buf, &self.0);
    }
}

macro_rules! tuple_fragment {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Fragment),+> Fragment for ($($ty,)+) {
            fn append_to(&self, buf: &mut String) {
                let ($($var,)+) = self;
                $( $var.append_to(buf); )+
            }

            fn size_hint(&self) -> usize {
                let ($($var,)+) = self;
                let mut total = 0;
                $( total += $var.size_hint(); )+
                total
            }
        }
    };
}

tuple_fragment!(A a);
tuple_fragment!(A a, B b);
tuple_fragment!(A a, B b, C c);
tuple_fragment!(A a, B b, C c, D d);
tuple_fragment!(A a, B b, C c, D d, E e);
tuple_fragment!(A a, B b, C c, D d, E e, F f);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g, H h);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
tuple_fragment!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
