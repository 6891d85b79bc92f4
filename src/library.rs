use crate::fingerprint::Fingerprint;
use crate::register::{BehaviorRegister, CallRegister};
use crate::value::Behavior;

/// Addresses one of the registers of a [Library].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegisterId {
    /// Call counts.
    Calls,
    /// Stubbed return values.
    Returns,
    /// Stubbed errors.
    Throws,
}

///
/// The registers of one [Mock](crate::Mock).
///
/// Every register is addressed through a [RegisterId]. Count operations only affect
/// [RegisterId::Calls] and behaviour operations only affect [RegisterId::Returns] and
/// [RegisterId::Throws]. Using an operation on a register of the wrong kind does nothing.
///
#[derive(Default)]
pub struct Library {
    calls: CallRegister,
    returns: BehaviorRegister<Behavior>,
    throws: BehaviorRegister<Behavior>,
}

impl Library {
    /// Create a library with empty registers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The call count for `key`, or 0 if `register` does not count calls.
    pub fn get_count(&self, key: &Fingerprint, register: RegisterId) -> usize {
        match register {
            RegisterId::Calls => self.calls.count(key),
            RegisterId::Returns | RegisterId::Throws => {
                tracing::debug!(?register, "get_count on a behavior register");
                0
            }
        }
    }

    /// Increase the call count for `key` by one.
    pub fn increase(&mut self, key: &Fingerprint, register: RegisterId) {
        match register {
            RegisterId::Calls => self.calls.increase(key),
            RegisterId::Returns | RegisterId::Throws => {
                tracing::debug!(?register, "increase on a behavior register ignored");
            }
        }
    }

    /// The behaviour recorded for `key`, if any.
    pub fn get_value(&self, key: &Fingerprint, register: RegisterId) -> Option<&Behavior> {
        match register {
            RegisterId::Returns => self.returns.fetch(key),
            RegisterId::Throws => self.throws.fetch(key),
            RegisterId::Calls => {
                tracing::debug!(?register, "get_value on the call register");
                None
            }
        }
    }

    /// Record a behaviour for `key`, returning the one it replaces.
    ///
    /// On the call register nothing is recorded and `value` is handed back.
    pub fn set_value(
        &mut self,
        value: Behavior,
        key: &Fingerprint,
        register: RegisterId,
    ) -> Option<Behavior> {
        match register {
            RegisterId::Returns => self.returns.record(value, key),
            RegisterId::Throws => self.throws.record(value, key),
            RegisterId::Calls => {
                tracing::debug!(?register, "set_value on the call register ignored");
                Some(value)
            }
        }
    }
}
