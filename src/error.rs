use thiserror::Error;

/// Errors reported by the algorithms in this crate.
///
/// Every check happens at call entry, so an `Err` means no partial work was
/// done. All functions here are deterministic: retrying a failed call with
/// the same inputs yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input rejected at the boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A memory or recursion-depth requirement exceeds a module limit.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// A value does not fit in the bits reserved for it.
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

impl Error {
    /// Creates an [`Error::InvalidInput`] with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Creates an [`Error::ResourceExhaustion`] with the given message.
    pub fn resource_exhaustion(msg: impl Into<String>) -> Self {
        Error::ResourceExhaustion(msg.into())
    }

    /// Creates an [`Error::NumericOverflow`] with the given message.
    pub fn numeric_overflow(msg: impl Into<String>) -> Self {
        Error::NumericOverflow(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
