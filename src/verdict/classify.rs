//! Payload classification.
//!
//! Maps an escaped panic payload to a verdict by dynamic type, never by
//! message text. Classification is a priority chain with the most specific
//! category first, and it is total: the final arm accepts any payload type,
//! so no escaped failure can bypass the verdict mechanism.

use std::any::Any;
use std::collections::TryReserveError;
use std::io;

use crate::types::AllocFailure;
use crate::verdict::signal::VerdictSignal;

/// Classify an escaped panic payload.
///
/// Allocation-failure payloads outrank everything else:
/// - [`AllocFailure`], the crate's typed exhaustion payload,
/// - [`TryReserveError`], panicked raw from a fallible allocation,
/// - [`io::Error`] of kind [`io::ErrorKind::OutOfMemory`].
///
/// Every other payload — panic message strings, error types, arbitrary
/// `panic_any` values such as integers — is a generic failure.
pub fn classify(payload: &(dyn Any + Send)) -> VerdictSignal {
    if payload.downcast_ref::<AllocFailure>().is_some() {
        return VerdictSignal::ResourceExhaustion;
    }
    if payload.downcast_ref::<TryReserveError>().is_some() {
        return VerdictSignal::ResourceExhaustion;
    }
    if let Some(err) = payload.downcast_ref::<io::Error>() {
        if err.kind() == io::ErrorKind::OutOfMemory {
            return VerdictSignal::ResourceExhaustion;
        }
    }
    VerdictSignal::GenericFailure
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, panic_any, AssertUnwindSafe};

    fn classify_escaped(f: impl FnOnce()) -> VerdictSignal {
        let payload = catch_unwind(AssertUnwindSafe(f)).unwrap_err();
        classify(payload.as_ref())
    }

    #[test]
    fn alloc_failure_payload_is_resource_exhaustion() {
        let verdict = classify_escaped(|| crate::types::oom(1 << 40));
        assert_eq!(verdict, VerdictSignal::ResourceExhaustion);
    }

    #[test]
    fn raw_try_reserve_error_is_resource_exhaustion() {
        let verdict = classify_escaped(|| {
            let mut v: Vec<u8> = Vec::new();
            if let Err(e) = v.try_reserve(usize::MAX) {
                panic_any(e);
            }
        });
        assert_eq!(verdict, VerdictSignal::ResourceExhaustion);
    }

    #[test]
    fn out_of_memory_io_error_is_resource_exhaustion() {
        let verdict = classify_escaped(|| {
            panic_any(io::Error::new(io::ErrorKind::OutOfMemory, "mmap failed"))
        });
        assert_eq!(verdict, VerdictSignal::ResourceExhaustion);
    }

    #[test]
    fn other_io_errors_are_generic() {
        let verdict = classify_escaped(|| {
            panic_any(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        });
        assert_eq!(verdict, VerdictSignal::GenericFailure);
    }

    #[test]
    fn panic_message_is_generic() {
        let verdict = classify_escaped(|| panic!("index out of bounds"));
        assert_eq!(verdict, VerdictSignal::GenericFailure);
    }

    #[test]
    fn divide_by_zero_panic_is_generic() {
        let verdict = classify_escaped(|| {
            let den = std::hint::black_box(0_i64);
            let _ = 1 / den;
        });
        assert_eq!(verdict, VerdictSignal::GenericFailure);
    }

    #[test]
    fn non_error_payload_hits_the_catch_all() {
        let verdict = classify_escaped(|| panic_any(42_i32));
        assert_eq!(verdict, VerdictSignal::GenericFailure);
    }

    #[test]
    fn oom_message_text_alone_does_not_classify() {
        // Classification is by type; a string that merely talks about memory
        // stays generic.
        let verdict = classify_escaped(|| panic!("memory allocation of 16 bytes failed"));
        assert_eq!(verdict, VerdictSignal::GenericFailure);
    }
}
