//! Markdown documents under `conductor/docs/`.

use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use super::layout::{docs_root, MARKDOWN_EXT};
use crate::error::{IndexError, Result};
use crate::models::{DocumentDescriptor, ROOT_CATEGORY};

/// Walk the documentation root of `project` in pre-order.
///
/// Entries at each level come in directory listing order. Symlinks are
/// followed. A missing root gives an empty list; unreadable entries (and
/// symlink loops) are skipped.
pub fn list_documents(project: &Path) -> Vec<DocumentDescriptor> {
    let root = docs_root(project);
    if !root.is_dir() {
        return Vec::new();
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(&root).follow_links(true).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable document entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if let Some(document) = describe(relative) {
            documents.push(document);
        }
    }

    documents
}

/// Build a descriptor for a path relative to the docs root, or `None` if it
/// is not a markdown file.
fn describe(relative: &Path) -> Option<DocumentDescriptor> {
    let file_name = relative.file_name()?.to_string_lossy();
    let name = file_name.strip_suffix(&format!(".{}", MARKDOWN_EXT))?;

    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let category = if segments.len() > 1 {
        segments[0].clone()
    } else {
        ROOT_CATEGORY.to_string()
    };

    Some(DocumentDescriptor {
        name: name.to_string(),
        path: segments.join("/"),
        category,
    })
}

/// Read a document by its path relative to the docs root.
///
/// The join is not checked for `..` or absolute segments; callers exposing
/// this over a network must validate with [`is_safe_relative`] first.
pub fn read_document(project: &Path, relative: &str) -> Result<String> {
    let path = docs_root(project).join(relative);
    fs::read_to_string(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), "Failed to read document: {}", e);
        IndexError::DocumentNotFound(relative.to_string())
    })
}

/// True when `relative` stays inside whatever directory it is joined onto.
pub fn is_safe_relative(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::layout::DOCS_DIR;
    use crate::index::layout::MARKER_DIR;
    use tempfile::TempDir;

    fn write_doc(project: &Path, relative: &str, content: &str) {
        let path = project.join(MARKER_DIR).join(DOCS_DIR).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_docs_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_documents(dir.path()).is_empty());
    }

    #[test]
    fn categorises_by_first_segment() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "overview.md", "# Overview");
        write_doc(dir.path(), "guides/setup/install.md", "# Install");
        write_doc(dir.path(), "guides/notes.txt", "ignored");

        let mut docs = list_documents(dir.path());
        docs.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(
            docs,
            vec![
                DocumentDescriptor {
                    name: "install".to_string(),
                    path: "guides/setup/install.md".to_string(),
                    category: "guides".to_string(),
                },
                DocumentDescriptor {
                    name: "overview".to_string(),
                    path: "overview.md".to_string(),
                    category: ROOT_CATEGORY.to_string(),
                },
            ]
        );
    }

    #[test]
    fn directories_named_like_markdown_are_walked_not_emitted() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "odd.md/inner.md", "x");

        let docs = list_documents(dir.path());
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path, "odd.md/inner.md");
        assert_eq!(docs[0].category, "odd.md");
    }

    #[test]
    fn walks_in_pre_order_following_listing_order() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "alpha.md", "a");
        write_doc(dir.path(), "guides/one.md", "1");
        write_doc(dir.path(), "guides/two.md", "2");
        write_doc(dir.path(), "guides/deep/three.md", "3");
        write_doc(dir.path(), "zeta.md", "z");

        let docs = list_documents(dir.path());
        let paths: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths.len(), 5);

        // Everything under guides/ is emitted as one contiguous block.
        let in_guides: Vec<usize> = paths
            .iter()
            .enumerate()
            .filter(|(_, p)| p.starts_with("guides/"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(in_guides.len(), 3);
        assert_eq!(in_guides[2] - in_guides[0], 2);

        // Top-level order matches the directory listing.
        let root = dir.path().join(MARKER_DIR).join(DOCS_DIR);
        let listed: Vec<String> = fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        let mut top_level: Vec<&str> = Vec::new();
        for path in &paths {
            let first = path.split('/').next().unwrap();
            if top_level.last() != Some(&first) {
                top_level.push(first);
            }
        }
        assert_eq!(top_level, listed);

        // Within guides/, its own listing order decides between files and deep/.
        let guides_listed: Vec<String> = fs::read_dir(root.join("guides"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        let guides_seen: Vec<&str> = paths[in_guides[0]..=in_guides[2]]
            .iter()
            .map(|p| p.split('/').nth(1).unwrap())
            .collect();
        assert_eq!(guides_seen, guides_listed);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_documents_are_listed() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("elsewhere.md");
        fs::write(&real, "# Shared").unwrap();
        write_doc(dir.path(), "local.md", "x");
        let link = dir.path().join(MARKER_DIR).join(DOCS_DIR).join("linked.md");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let docs = list_documents(dir.path());
        assert!(docs
            .iter()
            .any(|d| d.path == "linked.md" && d.category == ROOT_CATEGORY));
        assert_eq!(read_document(dir.path(), "linked.md").unwrap(), "# Shared");
    }

    #[test]
    fn reads_existing_document() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "api/auth.md", "# Auth");

        assert_eq!(read_document(dir.path(), "api/auth.md").unwrap(), "# Auth");
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_document(dir.path(), "nope.md").unwrap_err();
        assert!(matches!(err, IndexError::DocumentNotFound(p) if p == "nope.md"));
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(is_safe_relative("guides/setup.md"));
        assert!(is_safe_relative("./overview.md"));
        assert!(!is_safe_relative("../secrets.md"));
        assert!(!is_safe_relative("guides/../../x.md"));
        assert!(!is_safe_relative("/etc/passwd"));
        assert!(!is_safe_relative(""));
    }
}
