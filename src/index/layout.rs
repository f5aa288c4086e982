//! Fixed layout of the `conductor/` marker subtree.

use std::path::{Path, PathBuf};

pub const MARKER_DIR: &str = "conductor";
pub const PRODUCT_FILE: &str = "product.md";
pub const TECH_STACK_FILE: &str = "tech-stack.md";
pub const WORKFLOW_FILE: &str = "workflow.md";
pub const TRACKS_DIR: &str = "tracks";
pub const TRACK_METADATA_FILE: &str = "metadata.json";
pub const DOCS_DIR: &str = "docs";
pub const MARKDOWN_EXT: &str = "md";

pub fn marker_path(project: &Path) -> PathBuf {
    project.join(MARKER_DIR)
}

pub fn docs_root(project: &Path) -> PathBuf {
    marker_path(project).join(DOCS_DIR)
}
