use std::borrow::Cow;

use super::tokenizer::{tokenize_with, DELIMITERS};
use crate::core::config::AliasManager;
use crate::core::state::ShellState;

/// Alias substitution followed by variable substitution.
pub fn expand_command(argv: Vec<String>, state: &ShellState) -> Vec<String> {
    let argv = expand_alias(argv, &state.aliases);
    expand_variables(argv, state)
}

/// Replaces argv[0] by the words of its alias, once. The spliced words are
/// not looked up again, so self-referencing aliases cannot loop.
pub fn expand_alias(argv: Vec<String>, aliases: &AliasManager) -> Vec<String> {
    let Some(value) = argv.first().and_then(|name| aliases.get(name)) else {
        return argv;
    };

    let mut expanded = tokenize_with(value, DELIMITERS);
    expanded.extend(argv.into_iter().skip(1));
    expanded
}

/// Expands `$?`, `$$` and `$NAME` at the start of each word. An unset
/// variable becomes an empty word; the argument count never changes.
pub fn expand_variables(argv: Vec<String>, state: &ShellState) -> Vec<String> {
    argv.iter()
        .map(|word| expand_word(word, state).into_owned())
        .collect()
}

fn expand_word<'a>(word: &'a str, state: &ShellState) -> Cow<'a, str> {
    let Some(rest) = word.strip_prefix('$') else {
        return Cow::Borrowed(word);
    };

    match rest.chars().next() {
        Some('?') => Cow::Owned(format!("{}{}", state.status().code(), &rest[1..])),
        Some('$') => Cow::Owned(format!("{}{}", std::process::id(), &rest[1..])),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            let end = rest
                .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
                .unwrap_or(rest.len());
            let value = state.env.get(&rest[..end]).unwrap_or_default();
            Cow::Owned(format!("{}{}", value, &rest[end..]))
        }
        _ => Cow::Borrowed(word),
    }
}
