use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File and directory defaults
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "progress.yaml";
pub const DATA_FILE: &str = "progress.json";
pub const SCREENSHOTS_DIR: &str = "public/screenshots";
pub const SCREENSHOTS_PREFIX: &str = "/screenshots";
pub const PROGRESS_API_PATH: &str = "/api/progress";
pub const DEFAULT_PORT: u16 = 3141;

/// First path segments the server routes itself.
pub const RESERVED_SEGMENTS: &[&str] = &["api", "assets"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a configured path against the project root. Absolute paths are
/// returned unchanged.
pub fn resolve(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/progress.yaml"));
        assert_eq!(
            resolve(root, Path::new(SCREENSHOTS_DIR)),
            PathBuf::from("/tmp/proj/public/screenshots")
        );
        assert_eq!(
            resolve(root, Path::new("/srv/shots")),
            PathBuf::from("/srv/shots")
        );
    }
}
