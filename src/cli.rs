//! Harness CLI.
//!
//! Drives a small population of candidate programs through the interceptors
//! so the signal contract can be observed from outside: the process-level
//! tests in `tests/` spawn this binary and assert on wait status. Also a
//! convenient target for pointing a real supervisor at.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::panic::{self, AssertUnwindSafe};
use std::process;

use crate::intercept::{entry, terminate};
use crate::stdio;
use crate::trap;
use crate::types::{AllocFailure, WrapError};
use crate::verdict::signal::SignalProtocol;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// Entry-point interceptor: catch-all boundary around the candidate
    Entry,
    /// Termination-handler interceptor: process-wide panic hook
    Hook,
    /// Degenerate script trap: fixed signal, no classification
    Trap,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interception variant to wrap the candidate with
    #[arg(long, value_enum, default_value = "entry")]
    mode: Mode,

    /// Install the termination handler twice (exactly-once check)
    #[arg(long, hide = true)]
    install_twice: bool,

    #[command(subcommand)]
    scenario: Scenario,
}

#[derive(Subcommand, Clone)]
enum Scenario {
    /// Run to completion and return an exit code
    Ok {
        #[arg(long, default_value_t = 0)]
        code: i32,
    },
    /// Reserve memory in an unbounded loop until allocation fails
    Oom,
    /// Divide by a runtime denominator
    Div {
        #[arg(long, default_value_t = 0)]
        den: i64,
    },
    /// Panic with a message string
    Panic {
        #[arg(long, default_value = "boom")]
        message: String,
    },
    /// Panic with a non-error payload (a plain integer)
    RawPayload,
    /// Panic and catch it internally, then return 0
    Caught,
    /// Hit a recoverable error, handle it, return 0
    HandledError,
    /// Write to stdout, flush, then panic
    WriteThenPanic,
    /// Fail with an error value (trap mode's failure path)
    Fail,
    /// Invoke the terminal path with no active failure
    TerminateEmpty,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.mode {
        Mode::Entry => entry::run(move || candidate(cli.scenario)),
        Mode::Hook => {
            if cli.install_twice {
                terminate::install();
                // Second install must be a no-op, protocol included.
                terminate::install_with(SignalProtocol {
                    resource_exhaustion: nix::sys::signal::Signal::SIGWINCH,
                    generic_failure: nix::sys::signal::Signal::SIGURG,
                });
            } else {
                terminate::install();
            }
            let code = candidate(cli.scenario);
            stdio::flush()?;
            process::exit(code)
        }
        Mode::Trap => trap::run(move || checked_candidate(cli.scenario)),
    }
}

/// Candidate logic for the interceptor modes; failure means panicking.
fn candidate(scenario: Scenario) -> i32 {
    match scenario {
        Scenario::Ok { code } => code,
        Scenario::Oom => grow_until_exhausted(),
        Scenario::Div { den } => {
            let den = std::hint::black_box(den);
            (100 / den) as i32
        }
        Scenario::Panic { message } => panic!("{message}"),
        Scenario::RawPayload => panic::panic_any(42_i32),
        Scenario::Caught => {
            let _ = panic::catch_unwind(AssertUnwindSafe(|| panic!("handled internally")));
            0
        }
        Scenario::HandledError => match "not a number".parse::<i64>() {
            Ok(_) => 2,
            Err(_) => 0,
        },
        Scenario::WriteThenPanic => {
            {
                use std::io::Write;
                let mut out = stdio::out();
                let _ = writeln!(out, "setup-ok={}", stdio::is_configured());
                let _ = out.flush();
            }
            panic!("after output")
        }
        Scenario::Fail => 1,
        Scenario::TerminateEmpty => {
            terminate::terminate_with(SignalProtocol::from_env(), None)
        }
    }
}

/// Candidate logic for trap mode; failure means `Err` or a panic.
fn checked_candidate(scenario: Scenario) -> crate::types::Result<i32> {
    match scenario {
        Scenario::Fail => Err(WrapError::Process("wrapped script failed".into())),
        other => Ok(candidate(other)),
    }
}

/// Keep reserving larger blocks until the allocator (or address space) gives
/// out, then panic with the typed exhaustion payload.
fn grow_until_exhausted() -> ! {
    let mut block: Vec<u8> = Vec::new();
    let mut want: usize = 1 << 30;
    loop {
        if let Err(err) = block.try_reserve(want) {
            panic::panic_any(AllocFailure::from(err));
        }
        want = want.saturating_mul(2);
    }
}
