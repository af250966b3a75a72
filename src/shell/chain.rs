use std::fmt;

/// Relation between a command and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOperator {
    None,     // end of line
    And,      // &&
    Or,       // ||
    Sequence, // ;
}

impl ChainOperator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "&&" => Some(ChainOperator::And),
            "||" => Some(ChainOperator::Or),
            ";" => Some(ChainOperator::Sequence),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainOperator::None => "",
            ChainOperator::And => "&&",
            ChainOperator::Or => "||",
            ChainOperator::Sequence => ";",
        }
    }

    /// Whether the command after this operator runs, given the status of the
    /// last command that actually ran.
    pub fn allows_next(&self, last_status: i32) -> bool {
        match self {
            ChainOperator::And => last_status == 0,
            ChainOperator::Or => last_status != 0,
            ChainOperator::Sequence | ChainOperator::None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    Unexpected(&'static str),
}

impl ChainError {
    pub fn status(&self) -> i32 {
        2
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Unexpected(token) => write!(f, "Syntax error: \"{}\" unexpected", token),
        }
    }
}

impl std::error::Error for ChainError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub argv: Vec<String>,
    pub operator: ChainOperator,
}

/// Commands of one input line. The last link's operator is always
/// [`ChainOperator::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain {
    links: Vec<ChainLink>,
}

impl Chain {
    /// Splits `tokens` at standalone `;`, `&&` and `||`. A trailing `;` just
    /// ends the chain; any other misplaced operator is a syntax error.
    pub fn parse(tokens: Vec<String>) -> Result<Self, ChainError> {
        let mut links = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for token in tokens {
            match ChainOperator::from_token(&token) {
                Some(operator) => {
                    if current.is_empty() {
                        return Err(ChainError::Unexpected(operator.as_str()));
                    }
                    links.push(ChainLink {
                        argv: std::mem::take(&mut current),
                        operator,
                    });
                }
                None => current.push(token),
            }
        }

        if current.is_empty() {
            match links.last_mut() {
                Some(last) if last.operator == ChainOperator::Sequence => {
                    last.operator = ChainOperator::None;
                }
                Some(last) => return Err(ChainError::Unexpected(last.operator.as_str())),
                None => {}
            }
        } else {
            links.push(ChainLink {
                argv: current,
                operator: ChainOperator::None,
            });
        }

        Ok(Self { links })
    }

    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl IntoIterator for Chain {
    type Item = ChainLink;
    type IntoIter = std::vec::IntoIter<ChainLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tokenizer::tokenize;

    fn parse(line: &str) -> Result<Chain, ChainError> {
        Chain::parse(tokenize(line))
    }

    fn shape(chain: &Chain) -> Vec<(String, ChainOperator)> {
        chain
            .links()
            .iter()
            .map(|link| (link.argv.join(" "), link.operator))
            .collect()
    }

    #[test]
    fn test_single_command() {
        let chain = parse("ls -l").unwrap();
        assert_eq!(shape(&chain), vec![("ls -l".to_string(), ChainOperator::None)]);
    }

    #[test]
    fn test_mixed_operators() {
        let chain = parse("false && echo hi ; echo bye || true").unwrap();
        assert_eq!(
            shape(&chain),
            vec![
                ("false".to_string(), ChainOperator::And),
                ("echo hi".to_string(), ChainOperator::Sequence),
                ("echo bye".to_string(), ChainOperator::Or),
                ("true".to_string(), ChainOperator::None),
            ]
        );
    }

    #[test]
    fn test_trailing_semicolon_tolerated() {
        let chain = parse("echo a ;").unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.links()[0].operator, ChainOperator::None);
    }

    #[test]
    fn test_empty_line() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse("; ls"), Err(ChainError::Unexpected(";")));
        assert_eq!(parse("&& ls"), Err(ChainError::Unexpected("&&")));
        assert_eq!(parse("ls && || pwd"), Err(ChainError::Unexpected("||")));
        assert_eq!(parse("ls ; ; pwd"), Err(ChainError::Unexpected(";")));
        assert_eq!(parse("ls &&"), Err(ChainError::Unexpected("&&")));
        assert_eq!(parse("ls ||"), Err(ChainError::Unexpected("||")));
        assert_eq!(parse(";"), Err(ChainError::Unexpected(";")));
    }

    #[test]
    fn test_glued_operators_are_words() {
        let chain = parse("echo a;b&&c").unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.links()[0].argv, vec!["echo", "a;b&&c"]);
    }

    #[test]
    fn test_error_message() {
        let err = parse("&& ls").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: \"&&\" unexpected");
        assert_eq!(err.status(), 2);
    }

    #[test]
    fn test_allows_next() {
        assert!(ChainOperator::And.allows_next(0));
        assert!(!ChainOperator::And.allows_next(1));
        assert!(ChainOperator::Or.allows_next(1));
        assert!(!ChainOperator::Or.allows_next(0));
        assert!(ChainOperator::Sequence.allows_next(127));
        assert!(ChainOperator::None.allows_next(0));
    }
}
