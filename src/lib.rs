//! judgewrap: an exception-to-signal verdict shim for judged programs
//!
//! A grading supervisor that launches a candidate program needs to know *why*
//! the candidate died: did it exhaust memory, or did it crash some other way?
//! judgewrap is the thin layer inserted around the candidate's entry point
//! that answers this with process signaling. Any panic escaping the candidate
//! is intercepted at a single boundary, classified by the dynamic type of its
//! payload, and converted into exactly one verdict signal the supervisor can
//! observe; a candidate that returns normally keeps its own exit status.
//!
//! # Architecture
//!
//! ## Interception ([`intercept`])
//! - [`intercept::entry`]: entry-point interceptor — wraps the candidate's
//!   relocated entry function in a catch-all boundary ([`judge_main!`])
//! - [`intercept::terminate`]: termination-handler interceptor — a
//!   process-wide panic hook installed once before candidate logic runs
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::classify`]: payload classification, most-specific type first
//! - [`verdict::signal`]: verdict signal identities and delivery
//!
//! ## Candidate I/O ([`stdio`])
//! - One-time fast-stdio configuration, flushed only on normal return
//!
//! ## Degenerate trap ([`trap`])
//! - Single-signal kill-on-any-error wrapper for non-native scripting
//!   candidates; the contrast case with no classification
//!
//! # Verdict contract
//!
//! The wrapped process produces exactly one observable outcome per run:
//! either the candidate's own exit status, or one of two termination signals
//! (default `SIGUSR1` = resource exhaustion, `SIGUSR2` = generic failure),
//! never both and never neither. The signal identities are a negotiated
//! protocol with the supervisor; see [`verdict::signal::SignalProtocol`].
//!
//! Both interceptor variants require the default `panic = "unwind"` profile.

// Interception boundaries
pub mod intercept;

// Verdict classification and signal delivery
pub mod verdict;

// Candidate-facing fast stdio
pub mod stdio;

// Degenerate script trap (no classification)
pub mod trap;

// Shared error and payload types
pub mod types;

// CLI entrypoint wiring for the harness binary
pub mod cli;

// Re-export commonly used types for convenience
pub use types::{oom, AllocFailure, Result, WrapError};
pub use verdict::classify::classify;
pub use verdict::signal::{SignalProtocol, VerdictSignal};
