use std::{fs, path::Path};

use rustyline::completion::Pair;

use crate::path::PathExpander;

/// File name candidates for argument words. A leading `~` is resolved for the
/// lookup but kept in the replacement text.
#[derive(Clone)]
pub struct PathCompleter {
    expander: PathExpander,
}

impl PathCompleter {
    pub fn new(expander: PathExpander) -> Self {
        Self { expander }
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        // Everything up to the last '/' is kept verbatim.
        let (typed_dir, prefix) = match incomplete.rfind('/') {
            Some(index) => incomplete.split_at(index + 1),
            None => ("", incomplete),
        };

        let search_dir = if typed_dir.is_empty() {
            Path::new(".").to_path_buf()
        } else {
            self.expander.expand(typed_dir)
        };

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                    return None;
                }
                let candidate = format!("{}{}", typed_dir, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_complete_in_directory() {
        let dir = env::temp_dir().join(format!("shoal_path_complete_{}", std::process::id()));
        fs::create_dir_all(dir.join("notes")).unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(dir.join("other"), "").unwrap();

        let completer = PathCompleter::new(PathExpander::with_home(None));
        let typed = format!("{}/no", dir.display());
        let matches = completer.complete_path(&typed);

        let displays: Vec<_> = matches.iter().map(|p| p.display.as_str()).collect();
        assert_eq!(displays, vec!["notes.txt", "notes/"]);
        assert_eq!(matches[1].replacement, format!("{}/notes/", dir.display()));
        assert_eq!(matches[0].replacement, format!("{}/notes.txt ", dir.display()));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_tilde_kept_in_replacement() {
        let home = env::temp_dir().join(format!("shoal_path_home_{}", std::process::id()));
        fs::create_dir_all(&home).unwrap();
        fs::write(home.join("plan.md"), "").unwrap();

        let completer = PathCompleter::new(PathExpander::with_home(Some(home.clone())));
        let matches = completer.complete_path("~/pl");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "~/plan.md ");

        let _ = fs::remove_dir_all(home);
    }
}
