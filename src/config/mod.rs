//! Persistent search configuration.
//!
//! The config file is advisory: a missing or corrupt file yields the built-in
//! defaults, and a failed save is logged and ignored. There is no locking, so
//! overlapping load-modify-save sequences race and the last writer wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "devpattern";
const CONFIG_FILE: &str = "config.json";

/// Conventional project roots under the home directory.
const DEFAULT_ROOTS: &[&str] = &["Projects", "projects", "code", "dev", "src", "workspace"];

/// Where to look for projects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories whose immediate children are checked for the marker subtree.
    #[serde(default)]
    pub search_paths: Vec<String>,
    /// Project directories included directly, scanned before `search_paths`.
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut search_paths: Vec<String> = match dirs::home_dir() {
            Some(home) => DEFAULT_ROOTS
                .iter()
                .map(|root| home.join(root).to_string_lossy().into_owned())
                .collect(),
            None => Vec::new(),
        };
        if let Ok(cwd) = std::env::current_dir() {
            search_paths.push(cwd.to_string_lossy().into_owned());
        }

        Self {
            search_paths,
            projects: Vec::new(),
        }
    }
}

impl Config {
    /// Append a search path unless an identical string is already present.
    /// Returns whether the config changed.
    pub fn add_search_path(&mut self, path: &str) -> bool {
        push_unique(&mut self.search_paths, path)
    }

    /// Append an explicit project unless an identical string is already present.
    /// Returns whether the config changed.
    pub fn add_project(&mut self, path: &str) -> bool {
        push_unique(&mut self.projects, path)
    }
}

fn push_unique(list: &mut Vec<String>, path: &str) -> bool {
    if list.iter().any(|p| p == path) {
        return false;
    }
    list.push(path.to_string());
    true
}

/// Reads and writes [`Config`] at a fixed location.
///
/// The store only remembers the file path; every call goes back to disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<user config dir>/devpattern/config.json`.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, falling back to defaults if the file is missing or
    /// cannot be parsed.
    pub fn load(&self) -> Config {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Config::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Config>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(Some(config))
    }

    /// Persist the config, creating parent directories as needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Add a search path and persist. The returned config reflects the
    /// change even when saving fails.
    pub fn add_search_path(&self, path: &str) -> Config {
        self.update(|config| config.add_search_path(path))
    }

    /// Add an explicit project path and persist. The returned config reflects
    /// the change even when saving fails.
    pub fn add_project(&self, path: &str) -> Config {
        self.update(|config| config.add_project(path))
    }

    fn update(&self, apply: impl FnOnce(&mut Config) -> bool) -> Config {
        let mut config = self.load();
        apply(&mut config);
        if let Err(e) = self.save(&config) {
            tracing::warn!(path = %self.path.display(), "Failed to save config: {:#}", e);
        }
        config
    }
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
