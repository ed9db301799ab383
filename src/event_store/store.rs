//! Event Store - append-only presence log
//!
//! One event per line, appended in arrival order. Append order stands in for
//! temporal order: the store never sorts, deduplicates or rewrites lines,
//! except when a management operation replaces the whole file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::EventStoreResult;
use crate::types::{PresenceEvent, RawRecord};
use crate::utils::atomic::atomic_write;

/// Configuration for the EventStore
#[derive(Debug, Clone)]
pub struct EventStoreConfig {
    /// Path to the active event log
    pub log_file: PathBuf,
    /// Directory holding `logs_<stamp>.txt` backups
    pub backup_dir: PathBuf,
}

impl Default for EventStoreConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("beacon_events.txt"),
            backup_dir: PathBuf::from("log_backups"),
        }
    }
}

impl EventStoreConfig {
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(log_file: P1, backup_dir: P2) -> Self {
        Self {
            log_file: log_file.as_ref().to_path_buf(),
            backup_dir: backup_dir.as_ref().to_path_buf(),
        }
    }

    /// Default file names under one data directory
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let defaults = Self::default();
        let data_dir = data_dir.as_ref();
        Self {
            log_file: data_dir.join(defaults.log_file),
            backup_dir: data_dir.join(defaults.backup_dir),
        }
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }
}

/// Append-only text log of presence events
///
/// Holds no in-memory state: every read goes back to the file, so views are
/// always recomputed from the full history.
#[derive(Debug, Clone)]
pub struct EventStore {
    config: EventStoreConfig,
}

impl EventStore {
    pub fn new(config: EventStoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        self.config.log_file()
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Create an empty log if none exists yet
    pub fn ensure_exists(&self) -> EventStoreResult<()> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)?;
        Ok(())
    }

    /// Append one record as a single line
    ///
    /// The line is written with one `write_all` on an append-mode handle, so
    /// concurrent readers see either the whole line or none of it.
    pub fn append(&self, record: &RawRecord) -> EventStoreResult<()> {
        let path = self.path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(record.to_line().as_bytes())?;
        file.sync_all()?;

        Ok(())
    }

    /// Read every raw line in append order
    ///
    /// A missing log is an empty history. Invalid UTF-8 is replaced rather
    /// than failing the whole read.
    pub fn read_lines(&self) -> EventStoreResult<Vec<String>> {
        let bytes = match fs::read(self.path()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }

    /// Load all decodable events in append order
    ///
    /// Lines that do not split into exactly four fields are skipped silently.
    pub fn load_events(&self) -> EventStoreResult<Vec<PresenceEvent>> {
        let lines = self.read_lines()?;
        let events: Vec<PresenceEvent> = lines
            .iter()
            .filter_map(|line| PresenceEvent::parse(line))
            .collect();

        tracing::debug!(
            lines = lines.len(),
            events = events.len(),
            "loaded event log"
        );

        Ok(events)
    }

    /// Replace the log with an empty file
    pub fn truncate(&self) -> EventStoreResult<()> {
        atomic_write(self.path(), "")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;
    use tempfile::TempDir;

    fn create_test_store() -> (EventStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = EventStoreConfig::with_data_dir(temp_dir.path());
        (EventStore::new(config), temp_dir)
    }

    #[test]
    fn test_append_and_load_events() {
        let (store, _temp_dir) = create_test_store();

        store
            .append(&RawRecord::new("2025-01-01 10:00:00", "Room 1", "DETECTED", "B1"))
            .unwrap();
        store
            .append(&RawRecord::new("2025-01-01 10:05:00", "Room 1", "LOST", "B1"))
            .unwrap();

        let events = store.load_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Detected);
        assert_eq!(events[1].kind, EventKind::Lost);

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "2025-01-01 10:00:00 - Room 1 - DETECTED - B1\n2025-01-01 10:05:00 - Room 1 - LOST - B1\n"
        );
    }

    #[test]
    fn test_missing_log_is_empty_history() {
        let (store, _temp_dir) = create_test_store();

        assert!(!store.exists());
        assert!(store.read_lines().unwrap().is_empty());
        assert!(store.load_events().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (store, _temp_dir) = create_test_store();

        fs::write(
            store.path(),
            "t1 - R1 - DETECTED - B1\ngarbage\n\nt2 - R1 - LOST - B1 - extra\nt3 - R1 - LOST - B1\n",
        )
        .unwrap();

        let events = store.load_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].timestamp, "t1");
        assert_eq!(events[1].timestamp, "t3");
    }

    #[test]
    fn test_malformed_ingest_is_still_appended() {
        let (store, _temp_dir) = create_test_store();

        store.append(&RawRecord::new("t1", "R - 1", "DETECTED", "B1")).unwrap();

        assert_eq!(store.read_lines().unwrap().len(), 1);
        assert!(store.load_events().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_does_not_hide_other_lines() {
        let (store, _temp_dir) = create_test_store();

        let mut bytes = b"t1 - R1 - DETECTED - B1\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"t2 - R1 - LOST - B1\n");
        fs::write(store.path(), bytes).unwrap();

        assert_eq!(store.load_events().unwrap().len(), 2);
    }

    #[test]
    fn test_truncate_and_ensure_exists() {
        let (store, _temp_dir) = create_test_store();

        store.ensure_exists().unwrap();
        assert!(store.exists());

        store.append(&RawRecord::new("t1", "R1", "DETECTED", "B1")).unwrap();
        store.truncate().unwrap();

        assert!(store.exists());
        assert!(store.read_lines().unwrap().is_empty());
    }
}
