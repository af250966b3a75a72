use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        for (key, value) in state.env.iter() {
            writeln!(out, "{}={}", key, value)?;
        }
        Ok(0)
    }
}
