use serde::{Deserialize, Serialize};

/// A tracked unit of work stored as `conductor/tracks/<id>/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSummary {
    /// The track's directory name, passed through untouched.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TrackType,
    pub status: TrackStatus,
    pub title: String,
    /// Completion indicator copied from metadata; unit is up to the writer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// The kind of work a track represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    #[default]
    Feature,
    Bug,
}

impl TrackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "feature" => Some(Self::Feature),
            "bug" => Some(Self::Bug),
            _ => None,
        }
    }
}

/// Lifecycle state of a track.
///
/// - `Planned`: created but not started (also the fallback for bad metadata)
/// - `InProgress`: actively being worked on
/// - `Completed`: done
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl TrackStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}
