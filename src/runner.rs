//! Test runner
//!
//! Lists the script directory, shows what it found, then asks about each entry
//! in turn and hands approved ones to the program under test.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use crate::config::RunConfig;
use crate::error::RunError;
use crate::launch::{Launcher, ProcessLauncher};
use crate::prompt::{Answer, Prompter};

/// One name found in the script directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name as listed; this is what the program receives
    pub name: OsString,
    /// Full path inside the script directory
    pub path: PathBuf,
}

impl Entry {
    /// Name for console output
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// The test runner
pub struct TestRunner<L = ProcessLauncher> {
    config: RunConfig,
    launcher: L,
}

impl TestRunner {
    /// Create a runner that spawns real processes
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            launcher: ProcessLauncher,
        }
    }
}

impl<L: Launcher> TestRunner<L> {
    /// Create a runner with a custom launcher
    pub fn with_launcher(config: RunConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn launcher_mut(&mut self) -> &mut L {
        &mut self.launcher
    }

    /// List the script directory in filesystem order, applying the
    /// configured filter and extensions. Never sorted.
    pub fn discover(&self) -> Result<Vec<Entry>, RunError> {
        let dir = &self.config.script_dir;
        let read = std::fs::read_dir(dir).map_err(|e| RunError::directory(dir, &e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| RunError::directory(dir, &e))?;
            let name = entry.file_name();
            if !self.config.selects(&name.to_string_lossy()) {
                tracing::trace!(name = %name.to_string_lossy(), "entry filtered out");
                continue;
            }
            entries.push(Entry {
                name,
                path: entry.path(),
            });
        }

        tracing::debug!(dir = %dir.display(), count = entries.len(), "listed script directory");
        Ok(entries)
    }

    /// Count the entries a run would offer
    pub fn count_entries(&self) -> Result<usize, RunError> {
        Ok(self.discover()?.len())
    }

    /// Run interactively on the process console
    pub fn run(&mut self) -> Result<(), RunError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run with explicit input and output streams.
    ///
    /// Stops at the first declined entry with a `UserAbort` error; entries
    /// already run stay run.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), RunError> {
        let entries = self.discover()?;
        let mut prompter = Prompter::new(input, output).assume_yes(self.config.assume_yes);

        let out = prompter.output();
        writeln!(out, "Found {} test scripts:", entries.len())?;
        for entry in &entries {
            writeln!(out, "- {}", entry.display_name())?;
        }
        writeln!(out, "Beginning execution...")?;

        for (index, entry) in entries.iter().enumerate() {
            let name = entry.display_name();
            match prompter.ask(&name)? {
                Answer::Decline => {
                    tracing::info!(index, name = %name, "run declined by user");
                    return Err(RunError::user_abort());
                }
                Answer::Approve => self.invoke(entry),
            }
        }

        let out = prompter.output();
        writeln!(out, "All scripts have been ran")?;
        out.flush()?;
        Ok(())
    }

    /// Run the program on one entry. Failures are logged, never returned.
    fn invoke(&mut self, entry: &Entry) {
        let program = &self.config.executable;
        tracing::debug!(
            program = %program.display(),
            name = %entry.display_name(),
            path = %entry.path.display(),
            "invoking"
        );

        match self.launcher.launch(program, &entry.name) {
            Ok(Some(0)) => {}
            Ok(Some(code)) => {
                tracing::debug!(name = %entry.display_name(), code, "program exited non-zero");
            }
            Ok(None) => {
                tracing::debug!(name = %entry.display_name(), "program terminated by signal");
            }
            Err(e) => {
                tracing::warn!(
                    program = %program.display(),
                    name = %entry.display_name(),
                    error = %e,
                    "failed to execute program"
                );
            }
        }
    }
}
