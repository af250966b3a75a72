use std::path::{Path, PathBuf};

/// Expands a leading `~` against a home directory.
#[derive(Clone, Debug)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// `~` and `~/rest` are rewritten; anything else, including `~user`, is
    /// returned as given. Without a known home directory nothing changes.
    pub fn expand(&self, path: &str) -> PathBuf {
        let Some(home) = &self.home else {
            return PathBuf::from(path);
        };

        if path == "~" {
            return home.clone();
        }

        match path.strip_prefix("~/") {
            Some(rest) => {
                let mut home_path = home.clone();
                for part in rest.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                home_path
            }
            None => Path::new(path).to_path_buf(),
        }
    }
}
