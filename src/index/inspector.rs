//! Qualification and summary extraction for a single candidate directory.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::id::project_id;
use super::layout::{marker_path, PRODUCT_FILE, TECH_STACK_FILE, WORKFLOW_FILE};
use super::tracks::read_tracks;
use crate::models::ProjectSummary;

const DESCRIPTION_LIMIT: usize = 200;
const TECH_STACK_LIMIT: usize = 5;

/// `- **Rust**` or `* **Axum** - web framework`
static TECH_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\*\*([^*]+)\*\*").expect("valid regex"));

/// Summarise `path` if it carries the marker subtree.
///
/// `path` should already be absolute; it is used verbatim for the id and the
/// reported path. Nothing inside the marker subtree is required: unreadable
/// or missing files only leave the matching fields empty.
pub fn inspect(path: &Path) -> Option<ProjectSummary> {
    let marker = marker_path(path);
    if !marker.is_dir() {
        return None;
    }

    let path_str = path.to_string_lossy().into_owned();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_str.clone());

    let description = fs::read_to_string(marker.join(PRODUCT_FILE))
        .ok()
        .and_then(|content| extract_description(&content));
    let tech_stack = fs::read_to_string(marker.join(TECH_STACK_FILE))
        .map(|content| extract_tech_stack(&content))
        .unwrap_or_default();
    let setup_complete = [PRODUCT_FILE, TECH_STACK_FILE, WORKFLOW_FILE]
        .iter()
        .all(|file| marker.join(file).is_file());

    Some(ProjectSummary {
        id: project_id(&path_str),
        name,
        path: path_str,
        description,
        tech_stack,
        last_modified: modified_time(&marker),
        setup_complete,
        tracks: read_tracks(&marker),
    })
}

/// Modification time of the marker directory, or now if it cannot be read.
fn modified_time(marker: &Path) -> DateTime<Utc> {
    match fs::metadata(marker).and_then(|m| m.modified()) {
        Ok(time) => DateTime::<Utc>::from(time),
        Err(e) => {
            tracing::debug!(path = %marker.display(), "No modification time, using now: {}", e);
            Utc::now()
        }
    }
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// First non-blank, non-heading line after the first heading.
fn extract_description(content: &str) -> Option<String> {
    let line = content
        .lines()
        .skip_while(|line| !is_heading(line))
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty() && !is_heading(line))?;

    Some(line.chars().take(DESCRIPTION_LIMIT).collect())
}

fn extract_tech_stack(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| TECH_ITEM.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|label| !label.is_empty())
        .take(TECH_STACK_LIMIT)
        .collect()
}
