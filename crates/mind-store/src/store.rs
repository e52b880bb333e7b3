use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use mind_core::MoodEntry;
use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::record::{COLUMNS, MoodRecord};

/// Mood log backed by one CSV file.
///
/// Construct once per process and hand it to whatever needs the log.
#[derive(Debug, Clone)]
pub struct MoodLogStore {
    path: PathBuf,
}

impl MoodLogStore {
    /// Create a store for the file at `path`. Nothing is touched on disk until
    /// the first operation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load every record in file order.
    ///
    /// Never fails. A missing file is an empty log; an unreadable or malformed
    /// file is logged and also treated as an empty log. Missing columns are
    /// filled with empty strings, extra columns are dropped.
    #[must_use]
    pub fn load(&self) -> Vec<MoodRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        match self.try_load() {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "failed to read mood log; treating it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Full table for display. Same contract as [`MoodLogStore::load`].
    #[must_use]
    pub fn read_all(&self) -> Vec<MoodRecord> {
        self.load()
    }

    /// Append a new entry and rewrite the file.
    ///
    /// The score is derived from `mood` here and never recomputed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory, temp file, or rename fails.
    pub fn append(&self, date: &str, mood: &str, note: &str) -> Result<MoodEntry, StoreError> {
        let entry = MoodEntry::new(date, mood, note);

        let mut records = self.load();
        records.push(MoodRecord::from(&entry));
        self.write_all(&records)?;

        tracing::debug!(
            path = %self.path.display(),
            rows = records.len(),
            mood = %entry.mood,
            score = entry.score,
            "appended mood entry"
        );
        Ok(entry)
    }

    /// Delete the backing file. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared mood log");
                Ok(true)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(StoreError::Io(error)),
        }
    }

    fn try_load(&self) -> Result<Vec<MoodRecord>, StoreError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(StoreError::Malformed("file has no header row".to_string()));
        }

        let positions = COLUMNS.map(|column| headers.iter().position(|name| name == column));
        if positions.iter().any(Option::is_none) {
            tracing::debug!(
                path = %self.path.display(),
                "mood log is missing columns; filling with empty values"
            );
        }

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if row.len() > headers.len() {
                return Err(StoreError::Malformed(format!(
                    "row {} has {} fields, header has {}",
                    index + 1,
                    row.len(),
                    headers.len()
                )));
            }

            let field = |position: Option<usize>| {
                position
                    .and_then(|position| row.get(position))
                    .unwrap_or_default()
                    .to_string()
            };

            records.push(MoodRecord {
                date: field(positions[0]),
                mood: field(positions[1]),
                note: field(positions[2]),
                score: field(positions[3]),
            });
        }

        Ok(records)
    }

    /// Write `records` to a temp file beside the log, then rename it over the log.
    fn write_all(&self, records: &[MoodRecord]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(temp.as_file_mut());
            writer.write_record(COLUMNS)?;
            for record in records {
                writer.write_record(record.fields())?;
            }
            writer.flush()?;
        }
        temp.as_file_mut().flush()?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;

        Ok(())
    }
}
