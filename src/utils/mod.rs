//! Utility functions and helpers
//!
//! Timestamp handling and atomic file replacement.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_copy, atomic_write, remove_temp_for, temp_path_for};
pub use time::{format_duration, parse_timestamp, seconds_between};
