use std::{collections::BTreeSet, fs, path::Path};

use rustyline::completion::Pair;

/// Candidates for the command word: builtins, aliases and whatever is
/// executable on `PATH`.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    builtins: BTreeSet<String>,
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new<'a>(builtins: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            builtins: builtins.into_iter().map(str::to_owned).collect(),
            ..Self::default()
        }
    }

    /// Rescans the directories of `path_var`. Unreadable entries are skipped.
    pub fn refresh_commands(&mut self, path_var: Option<&str>) {
        self.commands.clear();
        let Some(path_var) = path_var else {
            return;
        };

        for dir in path_var.split(':').filter(|dir| !dir.is_empty()) {
            let Ok(entries) = fs::read_dir(Path::new(dir)) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_candidate, entry.file_name().to_str()) {
                    self.commands.insert(name.to_string());
                }
            }
        }
        log::trace!("{} commands on PATH", self.commands.len());
    }

    pub fn update_aliases<'a>(&mut self, aliases: impl IntoIterator<Item = &'a str>) {
        self.aliases = aliases.into_iter().map(str::to_owned).collect();
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        for name in self.builtins.union(&self.commands) {
            if name.starts_with(input) {
                matches.push(Pair {
                    display: name.clone(),
                    replacement: format!("{} ", name),
                });
            }
        }

        for alias in &self.aliases {
            if alias.starts_with(input) {
                matches.push(Pair {
                    display: format!("{} (alias)", alias),
                    replacement: format!("{} ", alias),
                });
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn replacements(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.replacement.as_str()).collect()
    }

    #[test]
    fn test_builtins_and_aliases() {
        let mut completer = CommandCompleter::new(["cd", "exit", "env"]);
        completer.update_aliases(["ex"]);

        let matches = completer.complete_command("e");
        assert_eq!(replacements(&matches), vec!["env ", "exit ", "ex "]);
        assert_eq!(matches[2].display, "ex (alias)");
    }

    #[test]
    fn test_path_commands() {
        let dir = env::temp_dir().join(format!("shoal_complete_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("zzshoaltool"), "").unwrap();

        let mut completer = CommandCompleter::new(["cd"]);
        completer.refresh_commands(dir.to_str());
        assert_eq!(
            replacements(&completer.complete_command("zzshoal")),
            vec!["zzshoaltool "]
        );

        completer.refresh_commands(None);
        assert!(completer.complete_command("zzshoal").is_empty());

        let _ = fs::remove_dir_all(dir);
    }
}
