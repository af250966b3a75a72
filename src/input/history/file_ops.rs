use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads at most `max_entries` lines, dropping the oldest ones first.
    pub fn load_entries(&self, max_entries: usize) -> Result<VecDeque<String>, HistoryError> {
        let mut entries = VecDeque::new();

        if self.file_path.exists() {
            let file = File::open(&self.file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                entries.push_back(line);
                if entries.len() > max_entries {
                    entries.pop_front();
                }
            }
        }

        Ok(entries)
    }

    /// Overwrites the file with `entries`, one per line.
    pub fn save_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a String>,
    ) -> Result<(), HistoryError> {
        let mut file = BufWriter::new(File::create(&self.file_path)?);
        for entry in entries {
            writeln!(file, "{}", entry)?;
        }
        file.flush()?;
        Ok(())
    }
}
