//! Drama History Log
//!
//! Append-only JSONL export of drama events, one record per line.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use band_events::BandDramaEvent;

/// Errors reading or writing a history log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid history record on line {line}: {source}")]
    InvalidLine {
        line: usize,
        source: serde_json::Error,
    },
}

/// Writes drama events to a JSONL file.
pub struct HistoryLog {
    writer: Option<BufWriter<File>>,
    event_count: u64,
}

impl HistoryLog {
    /// Creates a new log, truncating any existing file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::from_file(file))
    }

    /// Opens a log for appending, creating it if missing.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_file(file))
    }

    /// Create a log that discards events (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            event_count: 0,
        }
    }

    fn from_file(file: File) -> Self {
        Self {
            writer: Some(BufWriter::new(file)),
            event_count: 0,
        }
    }

    /// Number of events logged through this handle.
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Log an event to the file
    pub fn log(&mut self, event: &BandDramaEvent) -> Result<(), HistoryError> {
        self.event_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = event.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Log multiple events
    pub fn log_batch(&mut self, events: &[BandDramaEvent]) -> Result<(), HistoryError> {
        for event in events {
            self.log(event)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), HistoryError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for HistoryLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush history log: {}", e);
        }
    }
}

/// Reads every event from a JSONL history file. Blank lines are skipped.
pub fn read_history(path: impl AsRef<Path>) -> Result<Vec<BandDramaEvent>, HistoryError> {
    let reader = BufReader::new(File::open(path)?);
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = BandDramaEvent::from_jsonl(&line).map_err(|source| HistoryError::InvalidLine {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use band_events::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let history = fixtures::sample_history();

        {
            let mut log = HistoryLog::create(&path).unwrap();
            log.log_batch(&history).unwrap();
            assert_eq!(log.event_count(), 3);
        }

        assert_eq!(read_history(&path).unwrap(), history);
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let history = fixtures::sample_history();

        {
            let mut log = HistoryLog::create(&path).unwrap();
            log.log(&history[0]).unwrap();
        }
        {
            let mut log = HistoryLog::append(&path).unwrap();
            log.log_batch(&history[1..]).unwrap();
        }

        assert_eq!(read_history(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_null_log_counts_but_discards() {
        let mut log = HistoryLog::null();
        log.log_batch(&fixtures::sample_history()).unwrap();
        assert_eq!(log.event_count(), 3);
        log.flush().unwrap();
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let good = fixtures::sample_history()[0].to_jsonl().unwrap();
        std::fs::write(&path, format!("{}\n\n{{not json}}\n", good)).unwrap();

        let err = read_history(&path).unwrap_err();
        assert!(matches!(err, HistoryError::InvalidLine { line: 3, .. }));
    }
}
