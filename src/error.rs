//! Error types for store and backup operations

/// Result type for EventStore operations
pub type EventStoreResult<T> = Result<T, EventStoreError>;

/// Errors that can occur in EventStore and backup operations
///
/// Only management operations and I/O surface errors. Malformed lines and
/// unparseable timestamps are absorbed by the read views.
#[derive(Debug, thiserror::Error)]
pub enum EventStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup not found: {0}")]
    BackupNotFound(String),

    #[error("Invalid backup name: {0}")]
    InvalidBackupName(String),
}
