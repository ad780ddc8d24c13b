use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::BadgeDocument;

/// Overwrite `path` with `doc`. Goes through a sibling temp file so readers never see a partial document.
pub fn write_badge(path: &Path, doc: &BadgeDocument) -> Result<()> {
    let json = serde_json::to_string(doc).context("failed to serialize badge")?;
    write_atomic(path, json.as_bytes())
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, bytes).with_context(|| format!("failed to write {}", Path::new(&tmp).display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
