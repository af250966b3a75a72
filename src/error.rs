use crate::core::commands::CommandError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    ScriptNotFound(String),
    CommandError(CommandError),
    ProcessError(ProcessError),
    FlagError(String),
}

impl ShellError {
    /// Status the shell process should end with when this error escapes the main loop.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::ScriptNotFound(_) => 127,
            ShellError::FlagError(_) => 2,
            _ => 1,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::CommandError(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::ScriptNotFound(path) => write!(f, "Can't open {}", path),
            ShellError::CommandError(e) => write!(f, "{}", e),
            ShellError::ProcessError(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
