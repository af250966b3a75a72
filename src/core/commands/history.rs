use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        for (index, line) in state.history.iter().enumerate() {
            writeln!(out, "{}: {}", index, line)?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvVarManager;
    use crate::input::History;

    #[test]
    fn test_history_numbering_after_eviction() {
        let mut state = ShellState::new("shoal", EnvVarManager::new(), History::in_memory(2));
        state.history.add("ls");
        state.history.add("pwd");
        state.history.add("history");

        let mut out = Vec::new();
        HistoryCommand.execute(&[], &mut state, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0: pwd\n1: history\n");
    }
}
