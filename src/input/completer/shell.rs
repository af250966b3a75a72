use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;
use crate::path::PathExpander;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line editor helper: command and path completion plus highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new<'a>(builtins: impl IntoIterator<Item = &'a str>, expander: PathExpander) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(builtins),
            path_completer: PathCompleter::new(expander),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn refresh_commands(&mut self, path_var: Option<&str>) {
        self.command_completer.refresh_commands(path_var);
    }

    pub fn update_aliases<'a>(&mut self, aliases: impl IntoIterator<Item = &'a str>) {
        self.command_completer.update_aliases(aliases);
    }

    /// Start offset and candidates for the word ending at `pos`. The first
    /// word of every chain link completes as a command.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let start = before
            .rfind(char::is_whitespace)
            .map_or(0, |index| index + 1);
        let word = &before[start..];

        let command_position = before[..start]
            .split_whitespace()
            .last()
            .map_or(true, |previous| matches!(previous, ";" | "&&" | "||"));

        if command_position {
            (start, self.command_completer.complete_command(word))
        } else {
            (start, self.path_completer.complete_path(word))
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> ShellCompleter {
        let mut completer =
            ShellCompleter::new(["cd", "exit", "env"], PathExpander::with_home(None));
        completer.update_aliases(["ll"]);
        completer
    }

    #[test]
    fn test_first_word_is_command() {
        let (start, matches) = completer().candidates("ex", 2);
        assert_eq!(start, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "exit ");
    }

    #[test]
    fn test_word_after_operator_is_command() {
        let line = "cd /tmp && l";
        let (start, matches) = completer().candidates(line, line.len());
        assert_eq!(start, line.len() - 1);
        assert_eq!(matches[0].display, "ll (alias)");
    }

    #[test]
    fn test_argument_is_path() {
        let line = "cd /nonexistent_shoal_dir/x";
        let (start, matches) = completer().candidates(line, line.len());
        assert_eq!(start, 3);
        assert!(matches.is_empty());
    }
}
