use std::io::Write;

use super::{Command, CommandError};
use crate::core::state::ShellState;

const HELP_TEXT: &str = "\
Builtin commands:
  exit [n]                 leave the shell with status n (default: last status)
  cd [dir | -]             change directory (default: $HOME, -: $OLDPWD)
  env                      print the environment
  setenv NAME VALUE        set an environment variable
  unsetenv NAME...         remove environment variables
  alias [NAME[=VALUE]...]  list, show or define aliases
  history                  list previous input lines
  help                     show this text

Commands may be joined with `;`, `&&` and `||`.
$?, $$ and $NAME are expanded at the start of a word.";

#[derive(Clone)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<i32, CommandError> {
        writeln!(out, "{}", HELP_TEXT)?;
        Ok(0)
    }
}
