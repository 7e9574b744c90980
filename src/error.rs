//! Runner errors

use std::fmt;
use std::path::PathBuf;

/// Message shown when the user declines an entry.
pub const ABORT_MESSAGE: &str = "Process terminated by the user.";

/// The kind of runner error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Script directory is missing or cannot be listed
    DirectoryNotFound,
    /// The user answered `n` or `N` to a prompt
    UserAbort,
    /// Input ended before an answer was read
    InputClosed,
    /// Console IO error
    Io,
}

impl ErrorKind {
    /// Process exit code for this kind of failure
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::UserAbort => 1,
            ErrorKind::DirectoryNotFound | ErrorKind::InputClosed | ErrorKind::Io => 2,
        }
    }
}

/// A runner error, optionally tied to a path
#[derive(Debug)]
pub struct RunError {
    pub kind: ErrorKind,
    pub message: String,
    pub path: Option<PathBuf>,
}

impl RunError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn user_abort() -> Self {
        Self::new(ErrorKind::UserAbort, ABORT_MESSAGE)
    }

    pub fn input_closed() -> Self {
        Self::new(ErrorKind::InputClosed, "input closed before an answer was given")
    }

    pub fn directory(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::DirectoryNotFound, err.to_string()).with_path(path)
    }

    pub fn is_user_abort(&self) -> bool {
        self.kind == ErrorKind::UserAbort
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::DirectoryNotFound => {
                write!(f, "cannot list script directory")?;
                if let Some(ref path) = self.path {
                    write!(f, " {}", path.display())?;
                }
                write!(f, ": {}", self.message)
            }
            _ => {
                if let Some(ref path) = self.path {
                    write!(f, "{}: ", path.display())?;
                }
                write!(f, "{}", self.message)
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, e.to_string())
    }
}
