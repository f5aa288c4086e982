//! Plain-text rendering of projects and documents for the terminal.

use std::collections::BTreeMap;

use crate::models::{DocumentDescriptor, ProjectSummary, TrackStatus, TrackType};

const PLANNED: char = '○';
const IN_PROGRESS: char = '◐';
const COMPLETED: char = '●';

fn status_symbol(status: TrackStatus) -> char {
    match status {
        TrackStatus::Planned => PLANNED,
        TrackStatus::InProgress => IN_PROGRESS,
        TrackStatus::Completed => COMPLETED,
    }
}

/// Render projects with their tracks as branches.
///
/// Example output:
/// ```text
/// webshop  (Rust, Axum)
/// ├── ● Add checkout
/// └── ◐ Fix login [bug] 40%
/// ```
pub fn render_projects(projects: &[ProjectSummary]) -> String {
    let mut output = String::new();
    for project in projects {
        output.push_str(&project.name);
        if !project.tech_stack.is_empty() {
            output.push_str(&format!("  ({})", project.tech_stack.join(", ")));
        }
        output.push('\n');

        for (i, track) in project.tracks.iter().enumerate() {
            let branch = if i == project.tracks.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(branch);
            output.push(status_symbol(track.status));
            output.push(' ');
            output.push_str(&track.title);
            if track.kind != TrackType::Feature {
                output.push_str(&format!(" [{}]", track.kind.as_str()));
            }
            if let Some(progress) = track.progress {
                output.push_str(&format!(" {}%", progress));
            }
            output.push('\n');
        }
    }
    output
}

/// Render documents grouped by category, categories in alphabetical order.
pub fn render_documents(documents: &[DocumentDescriptor]) -> String {
    let mut groups: BTreeMap<&str, Vec<&DocumentDescriptor>> = BTreeMap::new();
    for doc in documents {
        groups.entry(doc.category.as_str()).or_default().push(doc);
    }

    let mut output = String::new();
    for (category, docs) in groups {
        output.push_str(category);
        output.push('\n');
        for (i, doc) in docs.iter().enumerate() {
            let branch = if i == docs.len() - 1 { "└── " } else { "├── " };
            output.push_str(branch);
            output.push_str(&doc.path);
            output.push('\n');
        }
    }
    output
}
