//! Interception boundaries.
//!
//! Two variants of the same guarantee: every panic escaping candidate logic
//! is classified and converted to exactly one verdict signal, and a normal
//! return keeps the candidate's own exit status.
//!
//! - [`entry`] wraps the candidate's relocated entry function in a catch-all
//!   boundary. Fully transparent to panics the candidate catches itself.
//! - [`terminate`] installs a process-wide panic hook once, before candidate
//!   logic runs, with no rename of the entry point.
//!
//! The two are interchangeable for candidates whose panics are always fatal;
//! a deployment needs only one. See [`terminate`] for the hook variant's
//! visibility caveat.

pub mod entry;
pub mod terminate;
