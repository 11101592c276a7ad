//! Degenerate script trap.
//!
//! The contrast case to the interceptors: a wrapper for non-native scripting
//! candidates that collapses the two-verdict model into a single
//! undifferentiated failure signal. Any error, any panic, anything — the
//! process kills itself with one fixed signal and the supervisor learns only
//! "it failed". Simpler and strictly less informative than classification;
//! kept for runtimes where payload inspection is not worth the trouble.

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use crate::types::Result;

/// The one signal the trap ever sends.
pub const TRAP_SIGNAL: Signal = Signal::SIGUSR2;

/// Run `wrapped` and trap every failure into [`TRAP_SIGNAL`].
///
/// Ok(code) exits with the wrapped logic's own status. An `Err` or an
/// escaping panic force-kills the own process with the fixed signal, no
/// classification, then falls back to a silent exit if the signal does not
/// terminate us.
pub fn run<F>(wrapped: F) -> !
where
    F: FnOnce() -> Result<i32>,
{
    panic::set_hook(Box::new(|_| {}));
    match panic::catch_unwind(AssertUnwindSafe(wrapped)) {
        Ok(Ok(code)) => process::exit(code),
        Ok(Err(_)) | Err(_) => {
            let _ = kill(Pid::this(), TRAP_SIGNAL);
            unsafe { libc::_exit(0) }
        }
    }
}
