use std::fmt;

mod executor;
mod signal;

pub use executor::ProcessExecutor;
pub use signal::InterruptGuard;

#[derive(Debug)]
pub enum ProcessError {
    /// The executable vanished between resolution and spawn.
    CommandNotFound(String),
    PermissionDenied(String),
    /// The kernel refused to run the file (bad format, busy, argument list
    /// too long). Only this command fails.
    CannotExecute(String, std::io::Error),
    /// Spawn or wait failed for a reason the shell cannot recover from.
    Spawn(String, std::io::Error),
    Wait(String, std::io::Error),
    SignalError(String),
}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Spawn(..) | ProcessError::Wait(..))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(_) => write!(f, "not found"),
            ProcessError::PermissionDenied(_) => write!(f, "Permission denied"),
            ProcessError::CannotExecute(_, e) => write!(f, "cannot execute: {}", e),
            ProcessError::Spawn(cmd, e) => write!(f, "{}: cannot execute: {}", cmd, e),
            ProcessError::Wait(cmd, e) => write!(f, "{}: wait failed: {}", cmd, e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
