use std::fmt;

mod aliases;
mod loader;
mod paths;

pub use aliases::AliasManager;
pub use loader::ConfigLoader;
pub use paths::{ConfigPaths, HISTORY_FILE, RC_FILE};

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
