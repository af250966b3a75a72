use std::{fs, path::Path};

use super::ConfigError;

/// Reads startup command files. Lines come back untouched; running them is
/// the shell's job.
pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Returns the file's lines, or nothing when the file does not exist.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        if !self.path.exists() {
            log::debug!("no startup file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(self.path)?;
        Ok(content.lines().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_file_is_empty() {
        let path = env::temp_dir().join("shoal_loader_missing_rc");
        let _ = fs::remove_file(&path);

        let lines = ConfigLoader::new(&path).load_lines().unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_load_lines() {
        let path = env::temp_dir().join(format!("shoal_loader_rc_{}", std::process::id()));
        fs::write(&path, "# startup\nalias ll=ls -l\n\nsetenv FOO bar\n").unwrap();

        let lines = ConfigLoader::new(&path).load_lines().unwrap();
        assert_eq!(
            lines,
            vec!["# startup", "alias ll=ls -l", "", "setenv FOO bar"]
        );

        let _ = fs::remove_file(path);
    }
}
