use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

/// `exit [n]`. Leaves the decision to stop with the main loop, which saves
/// history before the process ends.
#[derive(Clone)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        let code = match args.first() {
            None => state.status().code(),
            Some(arg) => parse_exit_code(arg)
                .ok_or_else(|| CommandError::InvalidArguments(format!("Illegal number: {}", arg)))?,
        };

        state.request_exit(code);
        Ok(code)
    }
}

/// Non-negative decimal that fits an `i32`, reduced to eight bits.
fn parse_exit_code(arg: &str) -> Option<i32> {
    if arg.is_empty() || !arg.trim_start_matches('+').bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse::<i32>().ok().map(|n| n & 0xff)
}
