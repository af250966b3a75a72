mod file_ops;

use std::{collections::VecDeque, fmt, path::PathBuf};

use self::file_ops::FileOps;

pub const HISTORY_MAX: usize = 4096;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Bounded log of input lines. Once `max_entries` is reached the oldest line
/// is evicted for every new one.
pub struct History {
    entries: VecDeque<String>,
    file_ops: Option<FileOps>,
    max_entries: usize,
}

impl History {
    /// Loads `history_file` if it exists; [`History::save`] writes back to it.
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(history_file);
        let entries = file_ops.load_entries(max_entries)?;
        log::debug!(
            "loaded {} history entries from {}",
            entries.len(),
            file_ops.path().display()
        );

        Ok(History {
            entries,
            file_ops: Some(file_ops),
            max_entries,
        })
    }

    /// History that is never persisted.
    pub fn in_memory(max_entries: usize) -> Self {
        History {
            entries: VecDeque::new(),
            file_ops: None,
            max_entries,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.trim().is_empty() || self.max_entries == 0 {
            return;
        }

        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_owned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        if let Some(file_ops) = &self.file_ops {
            file_ops.save_entries(&self.entries)?;
            log::debug!(
                "saved {} history entries to {}",
                self.entries.len(),
                file_ops.path().display()
            );
        }
        Ok(())
    }
}
