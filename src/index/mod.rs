//! The discovery engine.
//!
//! [`ProjectIndex`] turns the configured explicit projects and search roots
//! into a deduplicated list of [`ProjectSummary`] values, newest first. It
//! holds no state beyond the config store: ids are resolved by rescanning.

mod documents;
mod id;
mod inspector;
pub mod layout;
mod tracks;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{expand_home, Config, ConfigStore};
use crate::error::{IndexError, Result};
use crate::models::{DocumentDescriptor, ProjectSummary};

pub use documents::{is_safe_relative, list_documents, read_document};
pub use id::project_id;
pub use inspector::inspect;
pub use tracks::read_tracks;

#[derive(Debug, Clone)]
pub struct ProjectIndex {
    store: ConfigStore,
}

impl ProjectIndex {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(ConfigStore::open_default()?))
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    // ============================================================
    // Discovery
    // ============================================================

    /// Discover every project reachable from the current config.
    ///
    /// Explicit projects are inspected first, then the immediate children of
    /// each existing search path. A path seen twice is inspected once. The
    /// result is sorted by `last_modified`, newest first; ties keep ascending
    /// path order.
    pub fn discover_all(&self) -> Vec<ProjectSummary> {
        discover(&self.store.load())
    }

    /// Find a project by id. This is a full rescan.
    pub fn discover_one(&self, id: &str) -> Result<ProjectSummary> {
        self.discover_all()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| IndexError::ProjectNotFound(id.to_string()))
    }

    // ============================================================
    // Documents
    // ============================================================

    pub fn list_documents(&self, project_id: &str) -> Result<Vec<DocumentDescriptor>> {
        let project = self.discover_one(project_id)?;
        Ok(list_documents(Path::new(&project.path)))
    }

    pub fn read_document(&self, project_id: &str, relative: &str) -> Result<String> {
        let project = self.discover_one(project_id)?;
        read_document(Path::new(&project.path), relative)
    }

    // ============================================================
    // Config
    // ============================================================

    pub fn config(&self) -> Config {
        self.store.load()
    }

    pub fn add_search_path(&self, path: &str) -> Config {
        self.store.add_search_path(path)
    }

    pub fn add_project(&self, path: &str) -> Config {
        self.store.add_project(path)
    }
}

/// Run discovery against an already loaded config.
pub fn discover(config: &Config) -> Vec<ProjectSummary> {
    let mut found: BTreeMap<PathBuf, ProjectSummary> = BTreeMap::new();

    for entry in &config.projects {
        let path = absolute(&expand_home(entry));
        if found.contains_key(&path) || !path.exists() {
            continue;
        }
        match inspect(&path) {
            Some(summary) => {
                found.insert(path, summary);
            }
            None => tracing::debug!(path = %path.display(), "Explicit project has no marker"),
        }
    }

    for entry in &config.search_paths {
        let root = absolute(&expand_home(entry));
        if !root.exists() {
            tracing::debug!(path = %root.display(), "Search path does not exist");
            continue;
        }
        let children = match child_directories(&root) {
            Ok(children) => children,
            Err(e) => {
                tracing::warn!(path = %root.display(), "Failed to scan search path: {}", e);
                continue;
            }
        };
        for child in children {
            if found.contains_key(&child) {
                continue;
            }
            if let Some(summary) = inspect(&child) {
                found.insert(child, summary);
            }
        }
    }

    let mut projects: Vec<ProjectSummary> = found.into_values().collect();
    projects.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    projects
}

/// Immediate child directories of `root`, in listing order.
fn child_directories(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(path = %root.display(), "Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        // Follows symlinks, so linked project directories are picked up.
        if path.is_dir() {
            children.push(path);
        }
    }
    Ok(children)
}

/// Absolute form of `path` with trailing separators and `.` segments
/// removed, so the same directory always yields the same id.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .components()
        .collect()
}
