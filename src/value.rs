use core::any::Any;

use crate::alloc::Box;

pub(crate) type AnyBox = Box<dyn Any + Send + Sync + 'static>;

///
/// A type-erased stubbed behaviour: a return value or an error.
///
/// Retrieval is by downcasting to the type the mocked method expects. A behaviour
/// recorded with another type is never surfaced, and the method falls back to its own default.
///
pub struct Behavior {
    value: AnyBox,
    type_name: &'static str,
}

impl Behavior {
    /// Erase the type of `value`.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// A clone of the stored value, if it is a `T`.
    pub fn downcast_cloned<T: Clone + 'static>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }

    /// Name of the stored type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl core::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Behavior<{}>", self.type_name)
    }
}
