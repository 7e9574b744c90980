//! Run configuration
//!
//! Built once at startup (flags, environment, defaults) and handed to the runner.

use std::path::PathBuf;

/// Default location of the interpreter under test
pub const DEFAULT_EXECUTABLE: &str = "./versione_0";
/// Default directory holding the test scripts
pub const DEFAULT_SCRIPT_DIR: &str = "pytesting/scripts";
/// Default output directory (reserved)
pub const DEFAULT_OUTPUT_DIR: &str = "pytesting/out";

/// Configuration for the test runner
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Program invoked once per approved script
    pub executable: PathBuf,
    /// Directory whose entries are offered to the user
    pub script_dir: PathBuf,
    /// Reserved for captured output. Nothing reads it yet.
    pub output_dir: PathBuf,
    /// Optional filter — only offer entries whose name contains this string
    pub filter: Option<String>,
    /// Name suffixes to keep; empty keeps every entry
    pub extensions: Vec<String>,
    /// Approve every prompt without reading input
    pub assume_yes: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            script_dir: PathBuf::from(DEFAULT_SCRIPT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filter: None,
            extensions: Vec::new(),
            assume_yes: false,
        }
    }
}

impl RunConfig {
    /// Start from defaults with the given executable and script directory
    pub fn new(executable: impl Into<PathBuf>, script_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            script_dir: script_dir.into(),
            ..Default::default()
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = exts;
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Whether an entry name passes the filter and extension selection
    pub fn selects(&self, name: &str) -> bool {
        if let Some(ref filter) = self.filter {
            if !name.contains(filter.as_str()) {
                return false;
            }
        }
        self.extensions.is_empty()
            || self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
