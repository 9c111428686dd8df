use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{ProgressError, Result};
use crate::{io, paths};

/// Project configuration read from `progress.yaml`.
///
/// Every field has a default, so a missing file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_project")]
    pub project: String,
    /// Endpoint the dashboard loads from. `None` means the server's own
    /// `/api/progress`.
    #[serde(default)]
    pub progress_url: Option<String>,
    /// Data file served at `/api/progress`, relative to the project root.
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,
    #[serde(default = "default_screenshots_dir")]
    pub screenshots_dir: PathBuf,
    #[serde(default = "default_screenshots_prefix")]
    pub screenshots_prefix: String,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_project() -> String {
    "Forget Me Not".to_string()
}

fn default_progress_file() -> PathBuf {
    PathBuf::from(paths::DATA_FILE)
}

fn default_screenshots_dir() -> PathBuf {
    PathBuf::from(paths::SCREENSHOTS_DIR)
}

fn default_screenshots_prefix() -> String {
    paths::SCREENSHOTS_PREFIX.to_string()
}

fn default_fetch_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: default_project(),
            progress_url: None,
            progress_file: default_progress_file(),
            screenshots_dir: default_screenshots_dir(),
            screenshots_prefix: default_screenshots_prefix(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Config {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Load `progress.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot mount.
    ///
    /// The screenshot prefix may not contain route syntax and may not live
    /// under a path the server already owns.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.public_prefix();
        if prefix.contains(|c| matches!(c, '{' | '}' | '*' | '?' | '#')) {
            return Err(ProgressError::InvalidConfig(format!(
                "screenshots_prefix '{}' contains reserved characters",
                self.screenshots_prefix
            )));
        }
        let first = prefix.trim_start_matches('/').split('/').next().unwrap_or("");
        if paths::RESERVED_SEGMENTS.contains(&first) {
            return Err(ProgressError::InvalidConfig(format!(
                "screenshots_prefix '{}' collides with /{first}",
                self.screenshots_prefix
            )));
        }
        Ok(())
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&paths::config_path(root), data.as_bytes())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Public path prefix for screenshots: one leading slash, no trailing one.
    pub fn public_prefix(&self) -> String {
        match self.screenshots_prefix.trim_matches('/') {
            "" => paths::SCREENSHOTS_PREFIX.to_string(),
            prefix => format!("/{prefix}"),
        }
    }

    pub fn screenshots_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.screenshots_dir)
    }

    pub fn progress_file_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.progress_file)
    }

    /// The endpoint to load from, given the port the server is bound to.
    pub fn progress_url_for_port(&self, port: u16) -> String {
        match &self.progress_url {
            Some(url) => url.clone(),
            None => format!("http://127.0.0.1:{port}{}", paths::PROGRESS_API_PATH),
        }
    }
}
