//! Verdict signal identities and delivery.

use log::debug;
use nix::sys::signal::{self, Signal};

/// The two verdict categories the supervisor distinguishes.
///
/// There is no third category: anything that is not memory exhaustion is a
/// generic failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictSignal {
    /// Memory/allocation failure escaped the candidate.
    ResourceExhaustion,
    /// Any other escaped failure, including non-error panic payloads.
    GenericFailure,
}

/// Signal identities negotiated with the supervisor.
///
/// The defaults (`SIGUSR1` for resource exhaustion, `SIGUSR2` for generic
/// failure) are the identities of the original judge deployment. They are a
/// protocol parameter, not a design choice: a deployment may override them
/// via [`SignalProtocol::from_env`], but both ends must agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignalProtocol {
    pub resource_exhaustion: Signal,
    pub generic_failure: Signal,
}

impl Default for SignalProtocol {
    fn default() -> Self {
        Self {
            resource_exhaustion: Signal::SIGUSR1,
            generic_failure: Signal::SIGUSR2,
        }
    }
}

impl SignalProtocol {
    /// Resolve the protocol from the environment, falling back to defaults.
    ///
    /// `JUDGEWRAP_OOM_SIGNAL` and `JUDGEWRAP_FAIL_SIGNAL` take signal names
    /// (`SIGUSR1`, `SIGWINCH`, ...). Unparseable values keep the default for
    /// that slot rather than failing: by the time the protocol is consulted
    /// the candidate is already dying, and a bad override must still produce
    /// a terminating signal.
    pub fn from_env() -> Self {
        let mut protocol = Self::default();
        if let Some(sig) = signal_from_env("JUDGEWRAP_OOM_SIGNAL") {
            protocol.resource_exhaustion = sig;
        }
        if let Some(sig) = signal_from_env("JUDGEWRAP_FAIL_SIGNAL") {
            protocol.generic_failure = sig;
        }
        protocol
    }

    /// Concrete signal for a verdict under this protocol.
    pub fn signal_for(&self, verdict: VerdictSignal) -> Signal {
        match verdict {
            VerdictSignal::ResourceExhaustion => self.resource_exhaustion,
            VerdictSignal::GenericFailure => self.generic_failure,
        }
    }
}

fn signal_from_env(var: &str) -> Option<Signal> {
    let value = std::env::var(var).ok()?;
    match value.parse::<Signal>() {
        Ok(sig) => Some(sig),
        Err(_) => {
            debug!("ignoring unparseable {var}={value}");
            None
        }
    }
}

/// Raise `sig` against the own process and never return.
///
/// The default disposition of the verdict signals terminates the process, so
/// the `raise` normally does not come back. If the signal is blocked or
/// ignored in this process, fall through to an immediate silent exit with
/// status 0, which the supervisor treats as "no verdict signal" rather than
/// hanging or re-faulting. `_exit` skips atexit handlers and stdio flushing;
/// nothing may be emitted after the verdict.
pub fn deliver(sig: Signal) -> ! {
    let _ = signal::raise(sig);
    unsafe { libc::_exit(0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_protocol_uses_negotiated_identities() {
        let protocol = SignalProtocol::default();
        assert_eq!(protocol.resource_exhaustion, Signal::SIGUSR1);
        assert_eq!(protocol.generic_failure, Signal::SIGUSR2);
    }

    #[test]
    fn signal_for_maps_both_verdicts() {
        let protocol = SignalProtocol::default();
        assert_eq!(
            protocol.signal_for(VerdictSignal::ResourceExhaustion),
            Signal::SIGUSR1
        );
        assert_eq!(
            protocol.signal_for(VerdictSignal::GenericFailure),
            Signal::SIGUSR2
        );
    }

    #[test]
    fn custom_protocol_overrides_both_slots() {
        let protocol = SignalProtocol {
            resource_exhaustion: Signal::SIGWINCH,
            generic_failure: Signal::SIGURG,
        };
        assert_eq!(
            protocol.signal_for(VerdictSignal::ResourceExhaustion),
            Signal::SIGWINCH
        );
        assert_eq!(
            protocol.signal_for(VerdictSignal::GenericFailure),
            Signal::SIGURG
        );
    }
}
