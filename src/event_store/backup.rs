//! Backup and Restore Management
//!
//! Provides functionality for:
//! - Copying the active log to a timestamped backup
//! - Listing available backups
//! - Restoring the active log from a named backup
//! - Clearing the log (backup first, then truncate)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use super::store::{EventStore, EventStoreConfig};
use crate::error::{EventStoreError, EventStoreResult};
use crate::utils::atomic::{atomic_copy, TEMP_SUFFIX};
use crate::utils::time::{backup_stamp, now_local};

const BACKUP_PREFIX: &str = "logs_";
const BACKUP_SUFFIX: &str = ".txt";

/// Backup manager for the event log
pub struct BackupManager {
    config: EventStoreConfig,
}

impl BackupManager {
    pub fn new(config: EventStoreConfig) -> Self {
        Self { config }
    }

    /// File name for a backup taken at `at`
    pub fn backup_name(at: NaiveDateTime) -> String {
        format!("{}{}{}", BACKUP_PREFIX, backup_stamp(at), BACKUP_SUFFIX)
    }

    /// Whether `name` is a plain `logs_*.txt` file name
    pub fn is_backup_name(name: &str) -> bool {
        name.len() > BACKUP_PREFIX.len() + BACKUP_SUFFIX.len()
            && name.starts_with(BACKUP_PREFIX)
            && name.ends_with(BACKUP_SUFFIX)
            && !name.contains(['/', '\\'])
            && name != "."
            && name != ".."
    }

    /// Back up the active log, stamped with the current local time
    ///
    /// # Returns
    /// * `Ok(Some(info))` - The backup that was written
    /// * `Ok(None)` - No active log to back up
    pub fn create_backup(&self) -> EventStoreResult<Option<BackupInfo>> {
        self.create_backup_at(now_local())
    }

    /// Back up the active log under the stamp for `at`
    ///
    /// The copy is written to a temp file and renamed into place, so a failed
    /// backup never shows up in [`list_backups`](Self::list_backups). A backup
    /// taken within the same second replaces the earlier one.
    pub fn create_backup_at(&self, at: NaiveDateTime) -> EventStoreResult<Option<BackupInfo>> {
        let log_file = self.config.log_file();

        if !log_file.exists() {
            return Ok(None);
        }

        let backup_dir = self.config.backup_dir();
        fs::create_dir_all(backup_dir)?;

        let name = Self::backup_name(at);
        let path = backup_dir.join(&name);
        let size = atomic_copy(log_file, &path)?;

        tracing::info!(backup = %path.display(), size, "created log backup");

        Ok(Some(BackupInfo { name, path, size }))
    }

    /// List backups, oldest first
    pub fn list_backups(&self) -> EventStoreResult<Vec<BackupInfo>> {
        let backup_dir = self.config.backup_dir();

        if !backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(backup_dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            if !Self::is_backup_name(&name) {
                continue;
            }

            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            backups.push(BackupInfo {
                name,
                path: entry.path(),
                size: metadata.len(),
            });
        }

        // Stamps sort lexically in time order
        backups.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(backups)
    }

    /// Resolve a backup name to its path, rejecting anything outside the
    /// backup directory
    fn resolve(&self, name: &str) -> EventStoreResult<PathBuf> {
        if !Self::is_backup_name(name) {
            return Err(EventStoreError::InvalidBackupName(name.to_string()));
        }

        let path = self.config.backup_dir().join(name);
        if !path.is_file() {
            return Err(EventStoreError::BackupNotFound(name.to_string()));
        }

        Ok(path)
    }

    /// Replace the active log with the named backup
    ///
    /// The active log is left untouched when the backup does not exist. The
    /// replacement is atomic: readers never observe a partially restored log.
    pub fn restore(&self, name: &str) -> EventStoreResult<()> {
        let path = self.resolve(name)?;
        let size = atomic_copy(&path, self.config.log_file())?;

        tracing::info!(backup = %name, size, "restored log from backup");

        Ok(())
    }

    /// Back up the active log, then truncate it
    ///
    /// Does nothing when there is no active log.
    pub fn clear_all(&self, store: &EventStore) -> EventStoreResult<Option<BackupInfo>> {
        self.clear_all_at(store, now_local())
    }

    pub fn clear_all_at(
        &self,
        store: &EventStore,
        at: NaiveDateTime,
    ) -> EventStoreResult<Option<BackupInfo>> {
        if !store.exists() {
            return Ok(None);
        }

        let backup = self.create_backup_at(at)?;
        store.truncate()?;

        tracing::info!(
            backup = backup.as_ref().map(|b| b.name.as_str()).unwrap_or("-"),
            "cleared event log"
        );

        Ok(backup)
    }

    /// Remove `logs_*.txt.tmp` files left by a backup that never completed
    ///
    /// Only temp files of backups are touched; anything else in the
    /// directory is left alone.
    pub fn cleanup_partial_backups(&self) -> EventStoreResult<usize> {
        let backup_dir = self.config.backup_dir();

        if !backup_dir.exists() {
            return Ok(0);
        }

        let mut cleaned = 0;

        for entry in fs::read_dir(backup_dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            let is_partial = name
                .strip_suffix(TEMP_SUFFIX)
                .map(Self::is_backup_name)
                .unwrap_or(false);

            if is_partial && entry.metadata()?.is_file() {
                fs::remove_file(entry.path())?;
                cleaned += 1;
            }
        }

        Ok(cleaned)
    }
}

/// Information about a backup file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupInfo {
    /// File name, e.g. `logs_20250101_120000.txt`
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl BackupInfo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
