//! Data model for the project index.
//!
//! Every type here is transient: summaries are rebuilt from the filesystem on
//! each discovery call and never mutated afterwards. The only persistent
//! entity is [`Config`](crate::config::Config).
//!
//! - [`ProjectSummary`]: a directory carrying a `conductor/` marker subtree.
//! - [`TrackSummary`]: one unit of work under `conductor/tracks/`.
//! - [`DocumentDescriptor`]: one markdown file under `conductor/docs/`.

mod document;
mod project;
mod track;

pub use document::*;
pub use project::*;
pub use track::*;
