use crate::frequency::Frequency;
use crate::mock::{AsMock, Instruction};

///
/// Verify how often the next method called on `mock` has been called before.
///
/// The very next call on the returned reference is not counted. Its signature and arguments
/// identify the calls to check, and a mismatch is reported to the mock's [Asserter](crate::Asserter)
/// with the location of this `verify` call.
///
/// ```rust
/// # use tallymock::*;
/// # #[derive(Default)]
/// # struct Lamp { mock: Mock }
/// # impl AsMock for Lamp { fn as_mock(&self) -> &Mock { &self.mock } }
/// # impl Lamp { fn switch(&self, on: bool) { self.mock.notify(signature!(), &[&on]) } }
/// let lamp = Lamp::default();
/// lamp.switch(true);
///
/// verify(&lamp, exactly(1)).switch(true);
/// verify(&lamp, never()).switch(false);
/// ```
#[track_caller]
pub fn verify<M: AsMock + ?Sized>(mock: &M, frequency: Frequency) -> &M {
    mock.as_mock().force(Instruction::verify(frequency));
    mock
}

///
/// Make the next method called on `mock` return `value` whenever it is called
/// with the same arguments again.
///
/// The value is only surfaced by methods that return a value of the same type.
pub fn stub_return<M: AsMock + ?Sized, T: Send + Sync + 'static>(mock: &M, value: T) -> &M {
    mock.as_mock().force(Instruction::returning(value));
    mock
}

///
/// Make the next method called on `mock` fail with `error` whenever it is called
/// with the same arguments again.
///
/// The error is only surfaced by failable methods with the same error type.
pub fn stub_throw<M: AsMock + ?Sized, E: Send + Sync + 'static>(mock: &M, error: E) -> &M {
    mock.as_mock().force(Instruction::throwing(error));
    mock
}
