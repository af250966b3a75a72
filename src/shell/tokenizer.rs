/// Default word delimiters.
pub const DELIMITERS: &[char] = &[' ', '\t', '\n'];

/// Drops a comment: a `#` at the start of the line or right after whitespace,
/// together with everything that follows it.
pub fn strip_comment(line: &str) -> &str {
    let mut previous: Option<char> = None;
    for (index, c) in line.char_indices() {
        if c == '#' && previous.map_or(true, char::is_whitespace) {
            return &line[..index];
        }
        previous = Some(c);
    }
    line
}

/// Splits `line` on any of `delimiters`, skipping empty words.
pub fn tokenize_with(line: &str, delimiters: &[char]) -> Vec<String> {
    line.split(|c: char| delimiters.contains(&c))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Comment stripping followed by a split on [`DELIMITERS`].
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_with(strip_comment(line), DELIMITERS)
}
