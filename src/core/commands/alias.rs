use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct AliasCommand;

enum AliasArg {
    Show(String),
    Define(String, String),
}

impl AliasCommand {
    /// Groups words into lookups and definitions. Words without `=` that
    /// follow a definition extend its value, so `alias ll=ls -l` defines
    /// `ll` as `ls -l`.
    fn parse_args(args: &[String]) -> Vec<AliasArg> {
        let mut parsed = Vec::new();

        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    parsed.push(AliasArg::Define(name.to_string(), value.to_string()))
                }
                None => match parsed.last_mut() {
                    Some(AliasArg::Define(_, value)) => {
                        value.push(' ');
                        value.push_str(arg);
                    }
                    _ => parsed.push(AliasArg::Show(arg.clone())),
                },
            }
        }

        parsed
    }
}

impl Command for AliasCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        if args.is_empty() {
            for (name, value) in state.aliases.iter() {
                writeln!(out, "{}='{}'", name, value)?;
            }
            return Ok(0);
        }

        let mut status = 0;
        for arg in Self::parse_args(args) {
            match arg {
                AliasArg::Define(name, value) => {
                    if name.is_empty() {
                        return Err(CommandError::InvalidArguments(
                            "usage: alias [NAME[=VALUE] ...]".to_string(),
                        ));
                    }
                    let value = value.trim().trim_matches(|c: char| c == '\'' || c == '"');
                    state.aliases.add(&name, value);
                }
                AliasArg::Show(name) => match state.aliases.get(&name) {
                    Some(value) => writeln!(out, "{}='{}'", name, value)?,
                    None => {
                        state.report_error("alias", &format!("{} not found", name));
                        status = 1;
                    }
                },
            }
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvVarManager;
    use crate::input::History;

    fn state() -> ShellState {
        ShellState::new("shoal", EnvVarManager::new(), History::in_memory(4))
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(state: &mut ShellState, list: &[&str]) -> (i32, String) {
        let mut out = Vec::new();
        let status = AliasCommand.execute(&args(list), state, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_alias_multi_word_value() {
        let mut state = state();
        run(&mut state, &["ll=ls", "-l"]);
        assert_eq!(state.aliases.get("ll"), Some("ls -l"));
    }

    #[test]
    fn test_alias_quoted_value() {
        let mut state = state();
        run(&mut state, &["ll='ls", "-la'"]);
        assert_eq!(state.aliases.get("ll"), Some("ls -la"));
    }

    #[test]
    fn test_alias_several_definitions() {
        let mut state = state();
        run(&mut state, &["a=echo", "one", "b=echo", "two"]);
        assert_eq!(state.aliases.get("a"), Some("echo one"));
        assert_eq!(state.aliases.get("b"), Some("echo two"));
    }

    #[test]
    fn test_alias_list_and_show() {
        let mut state = state();
        run(&mut state, &["gs=git", "status"]);
        run(&mut state, &["ll=ls", "-l"]);

        let (status, listed) = run(&mut state, &[]);
        assert_eq!(status, 0);
        assert_eq!(listed, "gs='git status'\nll='ls -l'\n");

        let (status, shown) = run(&mut state, &["ll"]);
        assert_eq!(status, 0);
        assert_eq!(shown, "ll='ls -l'\n");
    }

    #[test]
    fn test_alias_overwrite() {
        let mut state = state();
        run(&mut state, &["ll=ls"]);
        run(&mut state, &["ll=ls", "-l"]);
        assert_eq!(state.aliases.get("ll"), Some("ls -l"));
    }

    #[test]
    fn test_alias_missing_name() {
        let mut state = state();
        let (status, shown) = run(&mut state, &["nope"]);
        assert_eq!(status, 1);
        assert!(shown.is_empty());
    }

    #[test]
    fn test_alias_empty_name() {
        let mut state = state();
        let err = AliasCommand
            .execute(&args(&["=ls"]), &mut state, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.status(), 2);
    }
}
