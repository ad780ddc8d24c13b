use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::types::{Provenance, PLACEHOLDER};

// Only the message matters; the rest of the prior document is ignored.
#[derive(Deserialize)]
struct PriorBadge {
    message: Option<serde_json::Value>,
}

/// Message of the previously written badge, if the file is there and sane.
pub fn load_existing_message(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let prior: PriorBadge = serde_json::from_str(&raw).ok()?;
    let msg = prior.message?.as_str()?.trim().to_string();
    if msg.is_empty() { None } else { Some(msg) }
}

/// fresh -> prior -> placeholder
pub fn resolve(fresh: Option<String>, prior: Option<String>) -> (String, Provenance) {
    let non_blank = |m: &String| !m.trim().is_empty();
    if let Some(m) = fresh.filter(non_blank) { return (m, Provenance::Fresh); }
    if let Some(m) = prior.filter(non_blank) { return (m, Provenance::Prior); }
    (PLACEHOLDER.to_string(), Provenance::Placeholder)
}
