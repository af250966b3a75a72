use super::chain::{Chain, ChainOperator};
use super::expand::expand_command;
use super::tokenizer::tokenize;
use crate::core::commands::CommandExecutor;
use crate::core::state::{ExitStatus, ShellState};
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError> {
        run_line(line, &mut self.state, &self.executor)
    }
}

/// Tokenizes, splits and runs one input line.
///
/// Only failures the shell cannot continue from come back as `Err`; every
/// other problem is reported on stderr and recorded as the exit status.
pub fn run_line(
    line: &str,
    state: &mut ShellState,
    executor: &CommandExecutor,
) -> Result<(), ShellError> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(());
    }

    match Chain::parse(tokens) {
        Ok(chain) => run_chain(chain, state, executor),
        Err(e) => {
            state.report_error("", &e.to_string());
            state.set_status(ExitStatus::from_code(e.status()));
            Ok(())
        }
    }
}

/// Runs each link whose preceding operator admits it. A skipped link leaves
/// the status alone, so later operators test the last command that ran.
pub fn run_chain(
    chain: Chain,
    state: &mut ShellState,
    executor: &CommandExecutor,
) -> Result<(), ShellError> {
    let mut gate = ChainOperator::None;

    for link in chain {
        if gate.allows_next(state.status().code()) {
            run_command(link.argv, state, executor)?;
            if state.exit_requested().is_some() {
                break;
            }
        } else {
            log::debug!("skipping `{}` after {}", link.argv.join(" "), gate.as_str());
        }
        gate = link.operator;
    }

    Ok(())
}

fn run_command(
    argv: Vec<String>,
    state: &mut ShellState,
    executor: &CommandExecutor,
) -> Result<(), ShellError> {
    let argv = expand_command(argv, state);
    let Some(name) = argv.first() else {
        state.set_status(ExitStatus::SUCCESS);
        return Ok(());
    };

    if name.is_empty() {
        state.report_error("", ": not found");
        state.set_status(ExitStatus::from_code(127));
        return Ok(());
    }

    match executor.execute(&argv, state) {
        Ok(status) => state.set_status(status),
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => {
            state.report_error(name, &e.to_string());
            state.set_status(ExitStatus::from_code(e.status()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvVarManager;
    use crate::input::History;

    fn setup() -> (CommandExecutor, ShellState) {
        let mut env = EnvVarManager::new();
        env.set("PATH", "/bin:/usr/bin").unwrap();
        (
            CommandExecutor::new(),
            ShellState::new("shoal", env, History::in_memory(16)),
        )
    }

    #[test]
    fn test_and_skips_after_failure() {
        let (executor, mut state) = setup();
        run_line("false && setenv RAN yes", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("RAN"), None);
        assert_eq!(state.status().code(), 1);
    }

    #[test]
    fn test_or_runs_after_failure() {
        let (executor, mut state) = setup();
        run_line("false || setenv RAN yes", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("RAN"), Some("yes"));
        assert!(state.status().success());
    }

    #[test]
    fn test_sequence_always_runs() {
        let (executor, mut state) = setup();
        run_line("false && setenv A 1 ; setenv B 2", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("A"), None);
        assert_eq!(state.env.get("B"), Some("2"));
        assert!(state.status().success());
    }

    #[test]
    fn test_skipped_link_keeps_last_status() {
        let (executor, mut state) = setup();
        run_line("true || setenv A 1 && setenv B 2", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("A"), None);
        assert_eq!(state.env.get("B"), Some("2"));
    }

    #[test]
    fn test_status_variable_between_lines() {
        let (executor, mut state) = setup();
        run_line("true ; false", &mut state, &executor).unwrap();
        run_line("setenv LAST $?", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("LAST"), Some("1"));
    }

    #[test]
    fn test_unset_variable_keeps_argument_slot() {
        let (executor, mut state) = setup();
        run_line("setenv FOO $NOPE", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("FOO"), Some(""));
        assert!(state.status().success());
    }

    #[test]
    fn test_empty_command_word() {
        let (executor, mut state) = setup();
        run_line("$NOPE arg", &mut state, &executor).unwrap();
        assert_eq!(state.status().code(), 127);
    }

    #[test]
    fn test_not_found_sets_127() {
        let (executor, mut state) = setup();
        run_line("nosuchcmd123", &mut state, &executor).unwrap();
        assert_eq!(state.status().code(), 127);
    }

    #[test]
    fn test_syntax_error_sets_2() {
        let (executor, mut state) = setup();
        run_line("&& true", &mut state, &executor).unwrap();
        assert_eq!(state.status().code(), 2);
    }

    #[test]
    fn test_exit_stops_chain() {
        let (executor, mut state) = setup();
        run_line("exit 3 ; setenv AFTER 1", &mut state, &executor).unwrap();
        assert_eq!(state.exit_requested(), Some(3));
        assert_eq!(state.env.get("AFTER"), None);
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let (executor, mut state) = setup();
        state.set_status(ExitStatus::from_code(4));
        run_line("   ", &mut state, &executor).unwrap();
        run_line("# nothing here", &mut state, &executor).unwrap();
        assert_eq!(state.status().code(), 4);
    }

    #[test]
    fn test_alias_runs_through_chain() {
        let (executor, mut state) = setup();
        run_line("alias mark=setenv MARK", &mut state, &executor).unwrap();
        run_line("mark on", &mut state, &executor).unwrap();
        assert_eq!(state.env.get("MARK"), Some("on"));
    }
}
