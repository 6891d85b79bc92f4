//!
//! `tallymock` is the bookkeeping engine behind hand-written test doubles.
//!
//! A mock is an ordinary struct that owns a [Mock] and implements [AsMock].
//! Each mocked method reports its own signature and its arguments to the engine,
//! which turns them into a [Fingerprint] and then either counts the call, verifies
//! the number of earlier calls, or records a stubbed behaviour for it:
//!
//! ```rust
//! use tallymock::*;
//!
//! #[derive(Default)]
//! struct ClockMock {
//!     mock: Mock,
//! }
//!
//! impl AsMock for ClockMock {
//!     fn as_mock(&self) -> &Mock {
//!         &self.mock
//!     }
//! }
//!
//! impl ClockMock {
//!     fn now(&self, zone: &str) -> u64 {
//!         self.mock.notify_returning(signature!(), &[&zone]).unwrap_or(0)
//!     }
//! }
//!
//! let clock = ClockMock::default();
//!
//! stub_return(&clock, 1_700_000_000_u64).now("UTC");
//! assert_eq!(1_700_000_000, clock.now("UTC"));
//! assert_eq!(0, clock.now("CET"));
//!
//! verify(&clock, exactly(1)).now("UTC");
//! verify(&clock, never()).now("PST");
//! ```
//!
//! # Argument equality
//! Two calls are the same call when their signatures are equal and all their
//! arguments describe themselves identically through [Describe]:
//!
//! * Plain values (numbers, strings, `#[derive(Describe)]` structs and enums) are compared by contents.
//! * [Rc](alloc::Rc), [Arc](alloc::Arc) and [ByAddress] are compared by identity.
//! * Sequences and tuples are compared in order.
//! * Sets and maps are compared regardless of insertion order.
//!
//! # Verification failures
//! A failing [verify] is reported to the mock's [Asserter]. The default [PanicAsserter]
//! panics with a message pointing at the line where `verify` was written.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Re-export of the `alloc` types used by tallymock, for `no_std` users and generated code.
#[doc(hidden)]
pub mod alloc {
    extern crate alloc;

    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    pub use alloc::format;
    pub use alloc::rc::Rc;
    pub use alloc::string::{String, ToString};
    pub use alloc::sync::Arc;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

mod api;
mod assert;
mod debug;
mod describe;
mod error;
mod fingerprint;
mod frequency;
mod library;
mod mock;
mod register;
mod value;

pub use api::{stub_return, stub_throw, verify};
pub use assert::{Asserter, Failure, PanicAsserter, RecordingAsserter};
pub use debug::CallSite;
pub use describe::{ByAddress, Describe, Field, Semantics, Shape};
pub use error::MockError;
pub use fingerprint::{Fingerprint, FingerprintEngine};
pub use frequency::{at_least, at_most, exactly, less_than, more_than, never, Frequency};
pub use library::{Library, RegisterId};
pub use mock::{AsMock, Instruction, InstructionKind, Mock};
pub use value::Behavior;

///
/// Derive [Describe] for a struct or an enum, giving it value semantics.
///
/// The generated description renders the type's fields in declaration order,
/// so two instances with equal fields produce the same [Fingerprint].
/// Every type parameter is required to implement [Describe].
///
/// ```rust
/// use tallymock::*;
///
/// #[derive(Describe)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Describe)]
/// enum Shape2D {
///     Dot,
///     Line(Point, Point),
/// }
/// ```
pub use tallymock_macros::Describe;

///
/// Expands to the path of the enclosing function, e.g. `my_crate::ClockMock::now`.
///
/// This is the conventional signature string passed to the `notify` family of [Mock] methods.
/// Generic parameters of the enclosing function are not part of the path; the
/// argument type names in the [Fingerprint] keep generic instantiations apart.
#[macro_export]
macro_rules! signature {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__f);
        match name.strip_suffix("::__f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}
