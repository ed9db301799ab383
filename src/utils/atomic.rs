//! Atomic file replacement
//!
//! Whole-file writes go to a sibling `<name>.tmp` file, are synced, then
//! renamed over the destination. Readers see either the old file or the new
//! one, never a truncated or half-copied file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the full file name of an in-progress write
pub const TEMP_SUFFIX: &str = ".tmp";

/// Sibling temp path for `path`
///
/// The suffix is appended to the whole file name, so the temp path never
/// equals `path`, even when `path` itself ends in `.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Atomically write content to a file
///
/// ```ignore
/// atomic_write("beacon_events.txt", "")?;
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Atomically copy `from` over `to`
///
/// The copy lands in a temp file beside `to` first, so the rename never
/// crosses a filesystem boundary.
pub fn atomic_copy<P1, P2>(from: P1, to: P2) -> io::Result<u64>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let to = to.as_ref();
    let temp_path = temp_path_for(to);

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(from, &temp_path)?;
    File::open(&temp_path)?.sync_all()?;

    if let Err(e) = fs::rename(&temp_path, to) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(bytes)
}

/// Remove the temp file an interrupted write to `path` would have left
pub fn remove_temp_for<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let temp_path = temp_path_for(path.as_ref());
    if !temp_path.exists() {
        return Ok(false);
    }
    fs::remove_file(temp_path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path_for(Path::new("/data/beacon_events.txt")),
            PathBuf::from("/data/beacon_events.txt.tmp")
        );
        assert_eq!(
            temp_path_for(Path::new("/data/events.tmp")),
            PathBuf::from("/data/events.tmp.tmp")
        );
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        fs::write(&path, "old line\n").unwrap();

        atomic_write(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_copy_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("source.txt");
        let to = temp_dir.path().join("nested").join("dest.txt");
        fs::write(&from, "a - b - c - d\n").unwrap();

        let bytes = atomic_copy(&from, &to).unwrap();

        assert_eq!(bytes, 14);
        assert_eq!(fs::read_to_string(&to).unwrap(), "a - b - c - d\n");
        assert!(!temp_path_for(&to).exists());
    }

    #[test]
    fn test_atomic_copy_missing_source_leaves_destination() {
        let temp_dir = TempDir::new().unwrap();
        let to = temp_dir.path().join("dest.txt");
        fs::write(&to, "keep").unwrap();

        assert!(atomic_copy(temp_dir.path().join("missing.txt"), &to).is_err());
        assert_eq!(fs::read_to_string(&to).unwrap(), "keep");
    }

    #[test]
    fn test_remove_temp_for() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("beacon_events.txt");
        fs::write(temp_path_for(&log), "partial").unwrap();
        fs::write(temp_dir.path().join("beacon_events.tmp"), "not ours").unwrap();

        assert!(remove_temp_for(&log).unwrap());
        assert!(!remove_temp_for(&log).unwrap());
        assert!(temp_dir.path().join("beacon_events.tmp").exists());
    }

    #[test]
    fn test_log_named_tmp_survives_cleanup_and_replace() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("events.tmp");
        fs::write(&log, "t1 - R1 - DETECTED - B1\n").unwrap();

        assert!(!remove_temp_for(&log).unwrap());
        assert_eq!(fs::read_to_string(&log).unwrap(), "t1 - R1 - DETECTED - B1\n");

        let backup = temp_dir.path().join("logs_20250101_000000.txt");
        atomic_copy(&log, &backup).unwrap();
        atomic_write(&log, "").unwrap();
        assert_eq!(fs::read_to_string(&log).unwrap(), "");

        atomic_copy(&backup, &log).unwrap();
        assert_eq!(fs::read_to_string(&log).unwrap(), "t1 - R1 - DETECTED - B1\n");
    }
}
