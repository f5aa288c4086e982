use serde::{Deserialize, Serialize};

/// Category assigned to documents sitting directly under the documentation root.
pub const ROOT_CATEGORY: &str = "root";

/// A markdown document found under a project's documentation root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentDescriptor {
    /// File name without the `.md` extension.
    pub name: String,
    /// Path relative to the documentation root, always `/`-separated.
    pub path: String,
    /// First segment of `path`, or [`ROOT_CATEGORY`].
    pub category: String,
}

/// Contents of a single document, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    pub path: String,
    pub content: String,
}
