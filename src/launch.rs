//! Launching the program under test

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command as ProcessCommand, Stdio};

/// Runs the program under test against one script.
pub trait Launcher {
    /// Run `program arg` to completion.
    ///
    /// Returns the exit code, or `None` when the child was killed by a signal.
    fn launch(&mut self, program: &Path, arg: &OsStr) -> std::io::Result<Option<i32>>;
}

/// Spawns a real subprocess sharing the runner's console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, program: &Path, arg: &OsStr) -> std::io::Result<Option<i32>> {
        // One discrete argument, no shell: names with spaces or `;` stay intact.
        let status = ProcessCommand::new(program)
            .arg(arg)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }
}
