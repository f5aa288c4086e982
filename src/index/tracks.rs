//! Track enumeration under `conductor/tracks/`.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::layout::{TRACKS_DIR, TRACK_METADATA_FILE};
use crate::models::{TrackStatus, TrackSummary, TrackType};

/// List the tracks of a project, one per subdirectory of the tracks area.
///
/// Order follows the directory listing. A missing or unreadable tracks area
/// yields an empty list; a bad metadata file only affects its own track.
pub fn read_tracks(marker: &Path) -> Vec<TrackSummary> {
    let tracks_dir = marker.join(TRACKS_DIR);
    if !tracks_dir.is_dir() {
        return Vec::new();
    }

    let entries = match fs::read_dir(&tracks_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %tracks_dir.display(), "Failed to list tracks: {}", e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        // Follows symlinks, so linked track directories count.
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            let id = entry.file_name().to_string_lossy().into_owned();
            let metadata = read_metadata(&entry.path().join(TRACK_METADATA_FILE));
            build_track(id, metadata)
        })
        .collect()
}

/// Parse a metadata file into a JSON object, or `None` if it is missing,
/// unreadable, malformed, or not an object.
fn read_metadata(path: &Path) -> Option<Map<String, Value>> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            tracing::debug!(path = %path.display(), "Track metadata is not an object");
            None
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), "Malformed track metadata: {}", e);
            None
        }
    }
}

/// Build a summary, falling back field by field where metadata is absent or
/// holds an unexpected value.
fn build_track(id: String, metadata: Option<Map<String, Value>>) -> TrackSummary {
    let metadata = metadata.unwrap_or_default();
    let text = |key: &str| metadata.get(key).and_then(Value::as_str);

    let kind = text("type")
        .and_then(TrackType::from_str)
        .unwrap_or_default();
    let status = text("status")
        .and_then(TrackStatus::from_str)
        .unwrap_or_default();
    let title = text("title")
        .map(str::to_string)
        .unwrap_or_else(|| id.replace('_', " "));
    let progress = metadata.get("progress").and_then(Value::as_f64);

    TrackSummary {
        id,
        kind,
        status,
        title,
        progress,
    }
}
