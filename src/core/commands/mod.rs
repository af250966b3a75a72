use std::collections::BTreeMap;
use std::io::{self, Write};

mod alias;
mod cd;
mod env;
mod exit;
mod help;
mod history;
mod setenv;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use setenv::{SetenvCommand, UnsetenvCommand};

use crate::core::env::EnvError;
use crate::core::state::{ExitStatus, ShellState};
use crate::path::{PathResolver, Resolution};
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    NotExecutable(String),
    InvalidArguments(String),
    DirectoryError(String),
    EnvError(EnvError),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    /// Exit status recorded when a command fails this way.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::NotFound(_) => 127,
            CommandError::NotExecutable(_) => 126,
            CommandError::InvalidArguments(_)
            | CommandError::DirectoryError(_)
            | CommandError::EnvError(_) => 2,
            CommandError::IoError(_) => 1,
            CommandError::ProcessError(e) => match e {
                ProcessError::CommandNotFound(_) => 127,
                ProcessError::PermissionDenied(_) | ProcessError::CannotExecute(..) => 126,
                _ => 1,
            },
        }
    }

    /// Errors after which the shell must not keep running.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::ProcessError(e) if e.is_fatal())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(_) => write!(f, "not found"),
            CommandError::NotExecutable(_) => write!(f, "Permission denied"),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::DirectoryError(msg) => write!(f, "{}", msg),
            CommandError::EnvError(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

/// A command that runs inside the shell process.
///
/// `args` excludes the command name. Regular output goes to `out`;
/// diagnostics are returned as errors or reported through `state`.
pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Env(EnvCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    Alias(AliasCommand),
    Help(HelpCommand),
    History(HistoryCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Env(cmd) => cmd.execute(args, state, out),
            CommandType::Setenv(cmd) => cmd.execute(args, state, out),
            CommandType::Unsetenv(cmd) => cmd.execute(args, state, out),
            CommandType::Alias(cmd) => cmd.execute(args, state, out),
            CommandType::Help(cmd) => cmd.execute(args, state, out),
            CommandType::History(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Runs one expanded command: builtins in-process, everything else through a
/// `PATH` lookup and a child process.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    resolver: PathResolver,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("setenv", CommandType::Setenv(SetenvCommand));
        commands.insert("unsetenv", CommandType::Unsetenv(UnsetenvCommand));
        commands.insert("alias", CommandType::Alias(AliasCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        commands.insert("history", CommandType::History(HistoryCommand));

        Self {
            commands,
            resolver: PathResolver::new(),
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(
        &self,
        argv: &[String],
        state: &mut ShellState,
    ) -> Result<ExitStatus, CommandError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_with_output(argv, state, &mut out)
    }

    /// Like [`CommandExecutor::execute`], with builtin output sent to `out`.
    pub fn execute_with_output(
        &self,
        argv: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExitStatus, CommandError> {
        let Some(name) = argv.first() else {
            return Ok(ExitStatus::SUCCESS);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            log::trace!("builtin {}", name);
            let code = cmd.execute(&argv[1..], state, out)?;
            out.flush()?;
            return Ok(ExitStatus::from_code(code));
        }

        match self.resolver.resolve(name, state.env.get("PATH")) {
            Resolution::Found(path) => {
                out.flush()?;
                Ok(self.process_executor.run(&path, argv, &state.env)?)
            }
            Resolution::NotExecutable(path) => {
                log::debug!("{} is not executable", path.display());
                Err(CommandError::NotExecutable(name.clone()))
            }
            Resolution::NotFound => Err(CommandError::NotFound(name.clone())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
