//! Parsers for rating data files.
//!
//! Two formats are supported:
//! - line format: `user::item::rating`, one rating per line
//! - JSON: a nested object `{"user": {"item": rating}}`
//!
//! Item and user names may contain spaces ("Blues Traveler"), so fields are
//! separated by `::` just like the MovieLens `.dat` files.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;
use tracing::debug;

const FIELD_SEPARATOR: &str = "::";
const FIELD_COUNT: usize = 3;

/// Read a whole file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a ratings file in line format
///
/// Format: user::item::rating
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_ratings(path: &Path) -> Result<Dataset> {
    let content = read_file(path)?;
    parse_ratings_str(&content, &file_label(path))
}

/// Parse line-format ratings from an in-memory string
///
/// `file` is only used to label parse errors.
pub fn parse_ratings_str(content: &str, file: &str) -> Result<Dataset> {
    let mut dataset = Dataset::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(DataLoadError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let (user, item, rating_value) = (parts[0], parts[1], parts[2]);
        if user.is_empty() {
            return Err(DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing user".to_string(),
            });
        }
        if item.is_empty() {
            return Err(DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing item".to_string(),
            });
        }

        let rating: RatingValue = rating_value.parse().map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid rating: {}", e),
        })?;

        if let Some(previous) = dataset.insert_rating(user, item, rating) {
            debug!(
                "Line {} in {} overrides rating {} for ({}, {})",
                line_no, file, previous, user, item
            );
        }
    }

    Ok(dataset)
}

/// Parse a JSON ratings file
///
/// Format: {"user": {"item": rating, ...}, ...}
pub fn parse_json(path: &Path) -> Result<Dataset> {
    let content = read_file(path)?;
    parse_json_str(&content)
}

/// Parse a JSON dataset from an in-memory string
pub fn parse_json_str(content: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(content)?)
}
