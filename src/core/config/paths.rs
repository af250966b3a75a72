use super::ConfigError;
use std::path::{Path, PathBuf};

pub const RC_FILE: &str = ".shoalrc";
pub const HISTORY_FILE: &str = ".shoal_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_home(&home))
    }

    pub fn with_home(home: &Path) -> Self {
        ConfigPaths {
            rc_path: home.join(RC_FILE),
            history_path: home.join(HISTORY_FILE),
        }
    }

    pub fn with_rc(mut self, rc_path: PathBuf) -> Self {
        self.rc_path = rc_path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_home() {
        let paths = ConfigPaths::with_home(Path::new("/home/testuser"));

        assert_eq!(paths.rc_path, PathBuf::from("/home/testuser/.shoalrc"));
        assert_eq!(
            paths.history_path,
            PathBuf::from("/home/testuser/.shoal_history")
        );
    }

    #[test]
    fn test_rc_override() {
        let paths = ConfigPaths::with_home(Path::new("/home/testuser"))
            .with_rc(PathBuf::from("/etc/shoalrc"));

        assert_eq!(paths.rc_path, PathBuf::from("/etc/shoalrc"));
        assert_eq!(
            paths.history_path,
            PathBuf::from("/home/testuser/.shoal_history")
        );
    }
}
