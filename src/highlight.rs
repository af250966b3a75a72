use inksac::prelude::*;

const OPERATORS: [&str; 3] = [";", "&&", "||"];

/// Colours the words of an input line while it is being edited: command
/// words in cyan, chain operators in yellow.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Rebuilds `input` word by word, so runs of whitespace collapse to a
    /// single space only when colour is enabled.
    pub fn highlight_command(&self, input: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let command_style = Style::builder().foreground(Color::Cyan).bold().build();
        let operator_style = Style::builder().foreground(Color::Yellow).build();

        let mut expect_command = true;
        let mut parts = Vec::new();
        for word in input.split(' ') {
            if word.is_empty() {
                parts.push(String::new());
            } else if OPERATORS.contains(&word) {
                parts.push(word.to_string().style(operator_style).to_string());
                expect_command = true;
            } else if expect_command {
                parts.push(word.to_string().style(command_style).to_string());
                expect_command = false;
            } else {
                parts.push(word.to_string());
            }
        }

        parts.join(" ")
    }
}
