use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::InvalidArguments(
                "usage: setenv NAME VALUE".to_string(),
            ));
        };

        state.env.set(name, value)?;
        Ok(0)
    }
}

#[derive(Clone)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "usage: unsetenv NAME...".to_string(),
            ));
        }

        for name in args {
            state.env.unset(name);
        }
        Ok(0)
    }
}
