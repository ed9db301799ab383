//! Server configuration loaded from environment variables

use std::env;
use std::path::{Path, PathBuf};

use crate::event_store::EventStoreConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:5000")
    pub bind_addr: String,
    /// Paths of the active log and backup directory
    pub store: EventStoreConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional:
    /// - `PRESENCE_BIND_ADDR`: bind address (default: "0.0.0.0:5000")
    /// - `PRESENCE_LOG_FILE`: active event log (default: "beacon_events.txt")
    /// - `PRESENCE_BACKUP_DIR`: backup directory (default: "log_backups")
    ///
    /// Relative paths resolve against the current directory.
    pub fn from_env() -> anyhow::Result<Self> {
        let current_dir = env::current_dir()?;
        let defaults = EventStoreConfig::default();

        let bind_addr =
            env::var("PRESENCE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let log_file = env::var("PRESENCE_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        let backup_dir = env::var("PRESENCE_BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.backup_dir);

        let store = EventStoreConfig::new(
            resolve(&current_dir, &log_file),
            resolve(&current_dir, &backup_dir),
        );

        tracing::info!(
            bind_addr = %bind_addr,
            log_file = %store.log_file().display(),
            backup_dir = %store.backup_dir().display(),
            "configuration loaded"
        );

        Ok(Self { bind_addr, store })
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
