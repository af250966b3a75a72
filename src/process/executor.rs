use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::core::env::EnvVarManager;
use crate::core::state::ExitStatus;

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with `argv` (argv[0] is kept as the name the child sees)
    /// and an environment built only from `env`, then blocks until it ends.
    pub fn run(
        &self,
        program: &Path,
        argv: &[String],
        env: &EnvVarManager,
    ) -> Result<ExitStatus, ProcessError> {
        let name = argv.first().map(String::as_str).unwrap_or_default();

        let mut command = Command::new(program);
        command
            .arg0(name)
            .args(argv.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        let mut child = command.spawn().map_err(|e| spawn_error(name, e))?;
        log::debug!("spawned {} (pid {})", program.display(), child.id());

        let status = child
            .wait()
            .map_err(|e| ProcessError::Wait(name.to_string(), e))?;

        let status = match (status.code(), status.signal()) {
            (Some(code), _) => ExitStatus::from_code(code),
            (None, Some(signal)) => {
                log::debug!("{} terminated by signal {}", name, signal);
                ExitStatus::from_signal(signal)
            }
            (None, None) => ExitStatus::from_code(1),
        };
        Ok(status)
    }
}

fn spawn_error(name: &str, e: std::io::Error) -> ProcessError {
    match (e.kind(), e.raw_os_error()) {
        (std::io::ErrorKind::NotFound, _) => ProcessError::CommandNotFound(name.to_string()),
        (std::io::ErrorKind::PermissionDenied, _) => {
            ProcessError::PermissionDenied(name.to_string())
        }
        (_, Some(libc::ENOEXEC | libc::ETXTBSY | libc::E2BIG)) => {
            ProcessError::CannotExecute(name.to_string(), e)
        }
        _ => ProcessError::Spawn(name.to_string(), e),
    }
}
