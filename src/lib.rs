//! lisplike-tester: interactive runner for lisp-like interpreter test scripts
//!
//! # Overview
//!
//! Lists a directory of test scripts, prints what it found, then asks about
//! each script in turn. Approved scripts are passed to the interpreter as a
//! single argument; the interpreter shares the runner's console.
//!
//! ```text
//! Found 2 test scripts:
//! - t1.txt
//! - t2.txt
//! Beginning execution...
//! Do you want to run t1.txt ? (Y/n)
//! ```
//!
//! # Answers
//!
//! | Input | Effect |
//! |-------|--------|
//! | `n` or `N` | Stop the whole run |
//! | anything else | Run the script |

mod config;
mod error;
mod launch;
mod prompt;
mod runner;

pub use config::{RunConfig, DEFAULT_EXECUTABLE, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT_DIR};
pub use error::{RunError, ErrorKind, ABORT_MESSAGE};
pub use launch::{Launcher, ProcessLauncher};
pub use prompt::{Answer, Prompter};
pub use runner::{TestRunner, Entry};
