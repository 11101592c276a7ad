//! Verdict classification and signal delivery.
//!
//! A panic payload escaping candidate logic is mapped to exactly one of two
//! verdict signals the supervisor observes. Classification is total: no
//! payload type can escape unclassified.

pub mod classify;
pub mod signal;

pub use classify::classify;
pub use signal::{SignalProtocol, VerdictSignal};
