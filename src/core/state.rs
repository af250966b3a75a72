use std::fmt;

use super::config::AliasManager;
use super::env::EnvVarManager;
use crate::input::History;

/// Outcome of the most recently executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitStatus {
    code: i32,
    signal: Option<i32>,
}

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus {
        code: 0,
        signal: None,
    };

    /// Normal termination. Only the low eight bits survive, as with `wait(2)`.
    pub fn from_code(code: i32) -> Self {
        Self {
            code: code & 0xff,
            signal: None,
        }
    }

    pub fn from_signal(signal: i32) -> Self {
        Self {
            code: 128 + signal,
            signal: Some(signal),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn signal(&self) -> Option<i32> {
        self.signal
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Everything a running shell owns. Created once at startup and passed by
/// reference to every stage of line execution.
pub struct ShellState {
    pub env: EnvVarManager,
    pub aliases: AliasManager,
    pub history: History,
    status: ExitStatus,
    program_name: String,
    line_number: usize,
    exit_request: Option<i32>,
}

impl ShellState {
    pub fn new(program_name: impl Into<String>, env: EnvVarManager, history: History) -> Self {
        Self {
            env,
            aliases: AliasManager::new(),
            history,
            status: ExitStatus::SUCCESS,
            program_name: program_name.into(),
            line_number: 0,
            exit_request: None,
        }
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ExitStatus) {
        self.status = status;
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Called once per line read from any input source.
    pub fn advance_line(&mut self) {
        self.line_number += 1;
    }

    pub fn request_exit(&mut self, code: i32) {
        self.exit_request = Some(code);
    }

    pub fn exit_requested(&self) -> Option<i32> {
        self.exit_request
    }

    /// `PROGRAM: LINE: COMMAND: CAUSE`, the shape of every diagnostic.
    pub fn format_error(&self, command: &str, cause: &str) -> String {
        if command.is_empty() {
            format!("{}: {}: {}", self.program_name, self.line_number, cause)
        } else {
            format!(
                "{}: {}: {}: {}",
                self.program_name, self.line_number, command, cause
            )
        }
    }

    pub fn report_error(&self, command: &str, cause: &str) {
        eprintln!("{}", self.format_error(command, cause));
    }
}
