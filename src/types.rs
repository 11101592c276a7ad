//! Shared error and payload types.

use std::collections::TryReserveError;
use thiserror::Error;

/// Custom error types for judgewrap
#[derive(Error, Debug)]
pub enum WrapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Process error: {0}")]
    Process(String),
}

impl From<nix::errno::Errno> for WrapError {
    fn from(err: nix::errno::Errno) -> Self {
        WrapError::Process(err.to_string())
    }
}

/// Result type alias for judgewrap operations
pub type Result<T> = std::result::Result<T, WrapError>;

/// Panic payload marking memory exhaustion.
///
/// Candidates using fallible allocation report exhaustion by panicking with
/// this value (`std::panic::panic_any`), which the classifier maps to the
/// resource-exhaustion verdict. A raw [`TryReserveError`] payload is
/// classified identically; this type exists so candidates can attach the
/// requested size and so non-allocation code paths have a typed way to
/// signal exhaustion.
#[derive(Error, Debug)]
pub enum AllocFailure {
    #[error("allocation of {requested} bytes failed")]
    Exhausted { requested: usize },

    #[error("allocation failed: {0}")]
    Reserve(#[from] TryReserveError),
}

impl AllocFailure {
    pub fn exhausted(requested: usize) -> Self {
        AllocFailure::Exhausted { requested }
    }
}

/// Panic with an [`AllocFailure`] payload.
///
/// The supported raise path for candidates that detect allocation failure
/// themselves (for example after a failed `try_reserve`).
pub fn oom(requested: usize) -> ! {
    std::panic::panic_any(AllocFailure::exhausted(requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_failure_reports_requested_size() {
        let failure = AllocFailure::exhausted(1 << 30);
        assert_eq!(failure.to_string(), "allocation of 1073741824 bytes failed");
    }

    #[test]
    fn alloc_failure_converts_from_try_reserve() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let failure = AllocFailure::from(err);
        assert!(matches!(failure, AllocFailure::Reserve(_)));
    }

    #[test]
    fn wrap_error_converts_from_errno() {
        let err: WrapError = nix::errno::Errno::EPERM.into();
        assert!(matches!(err, WrapError::Process(_)));
    }
}
