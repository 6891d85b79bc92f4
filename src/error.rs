use crate::frequency::Frequency;

/// Errors produced by the engine itself.
///
/// Stubbed errors are never wrapped in this type; they reach the caller exactly as recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MockError {
    /// The number of recorded calls did not satisfy the verified [Frequency].
    FailedVerification {
        /// Signature of the verified method.
        signature: crate::alloc::String,
        /// Number of calls recorded before verification.
        observed: usize,
        /// The frequency that was expected.
        frequency: Frequency,
    },
}

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FailedVerification {
                signature,
                observed,
                frequency,
            } => write!(f, "{signature}: {observed} is not {frequency}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MockError {}
