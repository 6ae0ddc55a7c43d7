//! # Snapshot Store
//!
//! Reads the widget snapshot persisted by the main application: a single JSON
//! object mapping snapshot keys to values. String values pass through as-is;
//! numbers and booleans are stringified, since host builds have written both
//! forms over time. Structured values and nulls carry no flat representation
//! and are skipped.
//!
//! Rendering must never fail because storage did: `load_snapshot_or_empty`
//! degrades any read or parse failure to the empty snapshot (logged at warn
//! level), so the widgets show zeros and placeholders instead of going blank.

use std::fs;
use std::path::Path;

use models::Snapshot;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Reading snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot root is not a JSON object")]
    NotAnObject,
}

/// Loads a snapshot from a JSON file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, StoreError> {
    let raw = fs::read_to_string(path)?;
    parse_snapshot(&raw)
}

/// Parses a snapshot from raw JSON text.
pub fn parse_snapshot(raw: &str) -> Result<Snapshot, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(StoreError::NotAnObject)?;

    let snapshot: Snapshot = object
        .iter()
        .filter_map(|(key, value)| {
            let flat = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // No flat representation; downstream defaults cover the key.
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key.clone(), flat))
        })
        .collect();
    Ok(snapshot)
}

/// Loads a snapshot, degrading any failure to the empty snapshot so the
/// widgets render zeros and placeholders rather than failing.
pub fn load_snapshot_or_empty<P: AsRef<Path>>(path: P) -> Snapshot {
    let path = path.as_ref();
    match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(
                "Snapshot unavailable at {}, rendering with empty snapshot: {}",
                path.display(),
                err
            );
            Snapshot::new()
        }
    }
}
