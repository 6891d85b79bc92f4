use spin::Mutex;

use crate::alloc::{Arc, String, ToString, Vec};
use crate::debug::CallSite;

///
/// Receives the outcome of every verification.
///
/// This is the seam to the test framework. A failing verification is reported with
/// `condition == false`, a human readable message and the location of the `verify` call.
///
pub trait Asserter: Send + Sync {
    /// Assert that `condition` holds.
    fn assert(&self, condition: bool, message: &str, location: CallSite);
}

/// The default [Asserter], which panics on failure like `assert!` does.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicAsserter;

impl Asserter for PanicAsserter {
    fn assert(&self, condition: bool, message: &str, location: CallSite) {
        if !condition {
            panic!("{message} at {location}");
        }
    }
}

/// One failed assertion captured by a [RecordingAsserter].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
    /// The assertion message.
    pub message: String,
    /// Where the verification was written.
    pub location: CallSite,
}

///
/// An [Asserter] that collects failures instead of panicking.
///
/// Clones share the same list of failures, so one handle can be given to a
/// [Mock](crate::Mock) while another is kept for inspection.
#[derive(Clone, Default)]
pub struct RecordingAsserter {
    failures: Arc<Mutex<Vec<Failure>>>,
}

impl RecordingAsserter {
    /// Create an asserter with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures recorded so far, oldest first.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    /// Remove and return all recorded failures.
    pub fn take_failures(&self) -> Vec<Failure> {
        core::mem::take(&mut *self.failures.lock())
    }
}

impl Asserter for RecordingAsserter {
    fn assert(&self, condition: bool, message: &str, location: CallSite) {
        if !condition {
            self.failures.lock().push(Failure {
                message: message.to_string(),
                location,
            });
        }
    }
}
