use thiserror::Error;

/// Failures surfaced to callers of the project index.
///
/// Transient I/O problems never show up here: they are absorbed where they
/// happen and turned into absent or default values.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid document path: {0}")]
    InvalidDocumentPath(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
