//! Entry-point interceptor.
//!
//! The candidate's real entry function is exposed under its own name (for
//! example `fn solve() -> i32`) and [`run`] supplies the process entry point
//! around it: one-time stdio configuration, then the candidate inside a
//! catch-all boundary. Nothing the candidate does can escape the boundary
//! unclassified, and nothing the interceptor does is observable to a
//! candidate that returns normally.

use std::panic::{self, AssertUnwindSafe};
use std::process;

use crate::stdio;
use crate::verdict::classify::classify;
use crate::verdict::signal::{self, SignalProtocol};

/// Run `candidate` behind the catch-all boundary with the protocol resolved
/// from the environment.
pub fn run<F>(candidate: F) -> !
where
    F: FnOnce() -> i32,
{
    run_with(SignalProtocol::from_env(), candidate)
}

/// Run `candidate` behind the catch-all boundary under a fixed protocol.
///
/// Exactly one outcome per invocation: a normal return V flushes buffered
/// output and exits with status V; an escaped panic is classified and
/// delivered as a verdict signal, and control never reaches the exit path.
pub fn run_with<F>(protocol: SignalProtocol, candidate: F) -> !
where
    F: FnOnce() -> i32,
{
    stdio::configure();

    // The boundary itself must stay silent: the default hook would print a
    // panic message to stderr before the unwind reaches catch_unwind, and
    // the signal is the only permitted error surface.
    panic::set_hook(Box::new(|_| {}));

    match panic::catch_unwind(AssertUnwindSafe(candidate)) {
        Ok(code) => {
            let code = match stdio::flush() {
                Ok(()) => code,
                // Lost output means a wrong answer at best; surface it as a
                // nonzero exit rather than pretending the run was clean.
                Err(_) if code == 0 => 1,
                Err(_) => code,
            };
            process::exit(code)
        }
        Err(payload) => {
            let verdict = classify(payload.as_ref());
            signal::deliver(protocol.signal_for(verdict))
        }
    }
}

/// Supply `fn main()` around a relocated candidate entry function.
///
/// ```no_run
/// fn solve() -> i32 {
///     // candidate logic
///     0
/// }
///
/// judgewrap::judge_main!(solve);
/// ```
#[macro_export]
macro_rules! judge_main {
    ($entry:path) => {
        fn main() {
            $crate::intercept::entry::run($entry)
        }
    };
}
