use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use super::write::write_atomic;

pub const RUN_MARKER_FILE: &str = "last_run.txt";

/// Record the invocation time as epoch seconds.
pub fn write_run_marker(dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(RUN_MARKER_FILE);
    write_atomic(&path, now.timestamp().to_string().as_bytes())?;
    Ok(path)
}
