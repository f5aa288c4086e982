//! Discovery and indexing of conductor-managed projects on the local disk.
//!
//! [`index::ProjectIndex`] is the entry point: it reads search roots from a
//! [`config::ConfigStore`], finds directories carrying a `conductor/` marker
//! subtree and summarises each one. Nothing is cached; every call rescans.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod models;
