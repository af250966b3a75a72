use std::env;
use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError};
use crate::core::state::ShellState;
use crate::path::PathExpander;

#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let previous = env::current_dir()
            .ok()
            .or_else(|| state.env.get("PWD").map(PathBuf::from));

        let (target, shown) = match args.first().map(String::as_str) {
            None => match state.env.get("HOME") {
                Some(home) => (PathBuf::from(home), home.to_string()),
                // No HOME: stay where we are.
                None => return Ok(0),
            },
            Some("-") => {
                let old = state.env.get("OLDPWD").ok_or_else(|| {
                    CommandError::DirectoryError("OLDPWD not set".to_string())
                })?;
                (PathBuf::from(old), old.to_string())
            }
            Some(dir) => {
                let home = state.env.get("HOME").map(PathBuf::from);
                (PathExpander::with_home(home).expand(dir), dir.to_string())
            }
        };

        env::set_current_dir(&target).map_err(|e| {
            log::debug!("chdir {}: {}", target.display(), e);
            CommandError::DirectoryError(format!("can't cd to {}", shown))
        })?;

        let current = env::current_dir().unwrap_or(target);
        if let Some(previous) = previous {
            state.env.set("OLDPWD", &previous.to_string_lossy())?;
        }
        state.env.set("PWD", &current.to_string_lossy())?;

        if args.first().map(String::as_str) == Some("-") {
            writeln!(out, "{}", current.display())?;
        }
        Ok(0)
    }
}
