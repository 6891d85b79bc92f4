use spin::Mutex;

use crate::alloc::{Box, ToString};
use crate::assert::{Asserter, PanicAsserter};
use crate::debug::CallSite;
use crate::describe::Describe;
use crate::error::MockError;
use crate::fingerprint::{Fingerprint, FingerprintEngine};
use crate::frequency::Frequency;
use crate::library::{Library, RegisterId};
use crate::value::Behavior;

/// What the next call on a [Mock] is used for.
#[derive(Debug)]
pub enum Instruction {
    /// Count the call. This is the default.
    Count,
    /// Check the number of earlier identical calls.
    Verify(Frequency, CallSite),
    /// Record a return value for the call.
    Return(Behavior),
    /// Record an error for the call.
    Throw(Behavior),
}

impl Instruction {
    /// Verify the next call, reporting failures at the caller's location.
    #[track_caller]
    pub fn verify(frequency: Frequency) -> Self {
        Self::Verify(frequency, CallSite::caller())
    }

    /// Make the next call's signature and arguments return `value` from now on.
    pub fn returning<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Return(Behavior::new(value))
    }

    /// Make the next call's signature and arguments fail with `error` from now on.
    pub fn throwing<E: Send + Sync + 'static>(error: E) -> Self {
        Self::Throw(Behavior::new(error))
    }

    /// The kind of this instruction.
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::Count => InstructionKind::Count,
            Self::Verify(..) => InstructionKind::Verify,
            Self::Return(_) => InstructionKind::Return,
            Self::Throw(_) => InstructionKind::Throw,
        }
    }
}

/// The kind of an [Instruction], without its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstructionKind {
    /// See [Instruction::Count].
    Count,
    /// See [Instruction::Verify].
    Verify,
    /// See [Instruction::Return].
    Return,
    /// See [Instruction::Throw].
    Throw,
}

struct State {
    library: Library,
    instruction: Instruction,
}

///
/// The call ledger of one mock object.
///
/// A mock type owns a `Mock` and forwards every mocked method to one of the `notify` methods,
/// passing the method's signature and all of its arguments. What happens to a notified call
/// depends on the pending [Instruction], which is consumed by that call and reset to
/// [Instruction::Count] afterwards:
///
/// | Pending instruction | Effect on the notified call                 |
/// |---------------------|---------------------------------------------|
/// | `Count`             | counted, stubbed behaviour is surfaced      |
/// | `Verify`            | earlier identical calls are checked         |
/// | `Return`            | the return value is recorded                |
/// | `Throw`             | the error is recorded                       |
///
/// Only counted calls surface stubbed behaviours.
///
/// A `Mock` is meant to be driven from one thread between a directive and the call it targets.
pub struct Mock {
    state: Mutex<State>,
    engine: FingerprintEngine,
    asserter: Box<dyn Asserter>,
}

impl Mock {
    /// Create a mock that panics on failed verifications.
    pub fn new() -> Self {
        Self::with_asserter(PanicAsserter)
    }

    /// Create a mock that reports verifications to the given [Asserter].
    pub fn with_asserter(asserter: impl Asserter + 'static) -> Self {
        Self {
            state: Mutex::new(State {
                library: Library::new(),
                instruction: Instruction::Count,
            }),
            engine: FingerprintEngine::new(),
            asserter: Box::new(asserter),
        }
    }

    /// Replace the pending instruction.
    pub fn force(&self, instruction: Instruction) {
        let replaced = core::mem::replace(&mut self.state.lock().instruction, instruction);
        // The lock is released, dropping a stubbed value may call back into this mock.
        drop(replaced);
    }

    /// The kind of the pending instruction.
    pub fn pending(&self) -> InstructionKind {
        self.state.lock().instruction.kind()
    }

    /// The fingerprint this mock computes for a call.
    pub fn fingerprint(&self, signature: &str, args: &[&dyn Describe]) -> Fingerprint {
        self.engine.fingerprint(signature, args)
    }

    /// The number of counted calls with this fingerprint.
    pub fn count(&self, fingerprint: &Fingerprint) -> usize {
        self.state
            .lock()
            .library
            .get_count(fingerprint, RegisterId::Calls)
    }

    /// Notify a call of a method that neither returns a value nor fails.
    pub fn notify(&self, signature: &str, args: &[&dyn Describe]) {
        self.dispatch(signature, args);
    }

    /// Notify a call of a method returning a value.
    ///
    /// Returns the stubbed value if the call was counted and a value of type `T` was stubbed for it.
    pub fn notify_returning<T: Clone + 'static>(
        &self,
        signature: &str,
        args: &[&dyn Describe],
    ) -> Option<T> {
        let (counted, fingerprint) = self.dispatch(signature, args);
        if !counted {
            return None;
        }

        self.stubbed(&fingerprint, RegisterId::Returns)
    }

    /// Notify a call of a method that may fail.
    ///
    /// Fails with the stubbed error if the call was counted and an error of type `E` was stubbed for it.
    pub fn notify_failable<E: Clone + 'static>(
        &self,
        signature: &str,
        args: &[&dyn Describe],
    ) -> Result<(), E> {
        let (counted, fingerprint) = self.dispatch(signature, args);
        if !counted {
            return Ok(());
        }

        match self.stubbed(&fingerprint, RegisterId::Throws) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Notify a call of a method that returns a value and may fail.
    ///
    /// A stubbed error takes precedence over a stubbed return value.
    pub fn notify_returning_failable<T: Clone + 'static, E: Clone + 'static>(
        &self,
        signature: &str,
        args: &[&dyn Describe],
    ) -> Result<Option<T>, E> {
        let (counted, fingerprint) = self.dispatch(signature, args);
        if !counted {
            return Ok(None);
        }

        if let Some(error) = self.stubbed(&fingerprint, RegisterId::Throws) {
            return Err(error);
        }

        Ok(self.stubbed(&fingerprint, RegisterId::Returns))
    }

    fn stubbed<T: Clone + 'static>(&self, fingerprint: &Fingerprint, register: RegisterId) -> Option<T> {
        let state = self.state.lock();
        let behavior = state.library.get_value(fingerprint, register)?;
        let value = behavior.downcast_cloned::<T>();

        if value.is_none() {
            tracing::debug!(
                %fingerprint,
                ?register,
                stored = behavior.type_name(),
                expected = core::any::type_name::<T>(),
                "stubbed behavior has another type"
            );
        }

        value
    }

    /// Apply the pending instruction to a call and reset it.
    /// Returns whether the call was counted, along with its fingerprint.
    fn dispatch(&self, signature: &str, args: &[&dyn Describe]) -> (bool, Fingerprint) {
        let fingerprint = self.engine.fingerprint(signature, args);

        let outcome = {
            let mut state = self.state.lock();
            let instruction = core::mem::replace(&mut state.instruction, Instruction::Count);

            tracing::trace!(signature, %fingerprint, instruction = ?instruction.kind(), "call notified");

            match instruction {
                Instruction::Count => {
                    state.library.increase(&fingerprint, RegisterId::Calls);
                    Outcome::Counted
                }
                Instruction::Verify(frequency, location) => {
                    let observed = state.library.get_count(&fingerprint, RegisterId::Calls);
                    Outcome::Verify(frequency, location, observed)
                }
                Instruction::Return(value) => {
                    tracing::debug!(signature, %fingerprint, ?value, "return value recorded");
                    Outcome::Recorded(state.library.set_value(value, &fingerprint, RegisterId::Returns))
                }
                Instruction::Throw(error) => {
                    tracing::debug!(signature, %fingerprint, ?error, "error recorded");
                    Outcome::Recorded(state.library.set_value(error, &fingerprint, RegisterId::Throws))
                }
            }
        };

        // The lock is released here. An asserter may panic and a replaced
        // behavior may call back into this mock when dropped.
        match outcome {
            Outcome::Counted => (true, fingerprint),
            Outcome::Recorded(replaced) => {
                drop(replaced);
                (false, fingerprint)
            }
            Outcome::Verify(frequency, location, observed) => {
                let error = MockError::FailedVerification {
                    signature: signature.to_string(),
                    observed,
                    frequency,
                };
                self.asserter
                    .assert(frequency.validate(observed), &error.to_string(), location);

                (false, fingerprint)
            }
        }
    }
}

/// What a notified call did to the state, acted upon once the lock is released.
enum Outcome {
    Counted,
    Verify(Frequency, CallSite, usize),
    Recorded(Option<Behavior>),
}

impl Default for Mock {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Mock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mock")
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

///
/// Implemented by mock types to expose the [Mock] they own.
///
/// This is what [verify](crate::verify), [stub_return](crate::stub_return) and
/// [stub_throw](crate::stub_throw) operate on.
///
pub trait AsMock {
    /// The owned mock.
    fn as_mock(&self) -> &Mock;
}

impl AsMock for Mock {
    fn as_mock(&self) -> &Mock {
        self
    }
}
