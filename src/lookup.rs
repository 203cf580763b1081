use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{json_kind, AppError, Result};
use crate::models::{BuildRecord, Lookup};

/// Reads `path` and returns the id of the first build whose `buildNumber` is `target`.
pub fn find_build(path: &Path, target: &str) -> Result<Lookup> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read builds file");

    scan_text(&text, path, target)
}

/// Same as [`find_build`], for text already in memory.
pub fn find_in_str(text: &str, target: &str) -> Result<Lookup> {
    scan_text(text, Path::new("<input>"), target)
}

fn scan_text(text: &str, origin: &Path, target: &str) -> Result<Lookup> {
    let value: Value = serde_json::from_str(text).map_err(|source| AppError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(records) => find_in_records(&records, target),
        // An empty object or string holds no builds to scan
        Value::Object(ref fields) if fields.is_empty() => Ok(Lookup::NotFound),
        Value::String(ref s) if s.is_empty() => Ok(Lookup::NotFound),
        other => Err(AppError::NotAList {
            path: origin.to_path_buf(),
            found: json_kind(&other),
        }),
    }
}

/// Scans in order and stops at the first match. Entries after the match are never inspected.
pub fn find_in_records(records: &[Value], target: &str) -> Result<Lookup> {
    for (index, value) in records.iter().enumerate() {
        let record = BuildRecord::from_value(index, value)?;
        if record.matches(target) {
            let id = record.id().into_owned();
            tracing::info!(index = record.index, build_number = target, id = %id, "Build found");
            return Ok(Lookup::Found(id));
        }
    }

    tracing::info!(
        scanned = records.len(),
        build_number = target,
        "No build with that number"
    );
    Ok(Lookup::NotFound)
}

/// The single line printed for an outcome, errors included.
pub fn render_outcome(outcome: &Result<Lookup>) -> String {
    match outcome {
        Ok(lookup) => lookup.to_string(),
        Err(e) => format!("ERROR:{}", e),
    }
}
