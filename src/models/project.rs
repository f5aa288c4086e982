use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TrackSummary;

/// Summary of a discovered project.
///
/// A project is any directory containing the marker subtree. The summary is
/// derived entirely from files inside that subtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// URL-safe identifier derived from the absolute path.
    pub id: String,
    pub name: String,
    /// Absolute path to the project root.
    pub path: String,
    /// First paragraph line of `product.md`, at most 200 characters.
    pub description: Option<String>,
    /// Up to five bolded list labels from `tech-stack.md`.
    pub tech_stack: Vec<String>,
    /// Modification time of the marker subtree, not of the project root.
    pub last_modified: DateTime<Utc>,
    /// Whether the product, tech stack and workflow files are all present.
    pub setup_complete: bool,
    pub tracks: Vec<TrackSummary>,
}
