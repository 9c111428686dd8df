use serde::Serialize;
use std::path::Path;

use crate::error::Result;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// One image in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    pub name: String,
    /// Public path the image is served under.
    pub src: String,
    pub alt: String,
}

impl Screenshot {
    pub fn new(name: &str, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            src: format!("{}/{}", prefix.trim_end_matches('/'), name),
            alt: name.to_string(),
        }
    }
}

/// True if `name` ends in one of the gallery's image extensions.
///
/// Only the extension is compared case-insensitively. A bare `.png` counts.
pub fn is_image_name(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

/// List the image files in `dir`, sorted by name.
///
/// Symlinks are followed; a link is listed when its target is a regular file.
pub fn list_screenshots(dir: &Path, prefix: &str) -> Result<Vec<Screenshot>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // Dangling links have no metadata.
        let Ok(meta) = std::fs::metadata(entry.path()) else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        // Non-UTF-8 names can't be expressed as a public path.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_image_name(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names.iter().map(|n| Screenshot::new(n, prefix)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_matching() {
        for name in ["a.png", "c.JPG", "d.jpeg", "e.WebP", "shot.final.png", ".png", ".JPG"] {
            assert!(is_image_name(name), "expected image: {name}");
        }
        for name in ["b.txt", "png", "a.png.bak", "a.gif", "a.pngx", ".txt"] {
            assert!(!is_image_name(name), "expected non-image: {name}");
        }
    }

    #[test]
    fn lists_only_images() {
        let dir = TempDir::new().unwrap();
        for name in ["a.png", "b.txt", "c.JPG"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let shots = list_screenshots(dir.path(), "/screenshots").unwrap();
        let names: Vec<&str> = shots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.JPG"]);
    }

    #[test]
    fn src_and_alt_use_entry_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("home.webp"), b"x").unwrap();

        let shots = list_screenshots(dir.path(), "/screenshots/").unwrap();
        assert_eq!(shots[0].src, "/screenshots/home.webp");
        assert_eq!(shots[0].alt, "home.webp");
    }

    #[test]
    fn skips_directories_with_image_names() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        std::fs::write(dir.path().join("real.png"), b"x").unwrap();

        let shots = list_screenshots(dir.path(), "/screenshots").unwrap();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].name, "real.png");
    }

    #[test]
    fn extension_only_names_are_listed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".png"), b"x").unwrap();
        std::fs::write(dir.path().join(".hidden"), b"x").unwrap();

        let shots = list_screenshots(dir.path(), "/screenshots").unwrap();
        let names: Vec<&str> = shots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![".png"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_listed() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("other")).unwrap();
        std::fs::write(dir.path().join("other/real.png"), b"x").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("other/real.png"),
            dir.path().join("link.png"),
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("dangling.png"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("other"), dir.path().join("dir.png")).unwrap();

        let shots = list_screenshots(dir.path(), "/screenshots").unwrap();
        let names: Vec<&str> = shots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["link.png"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(list_screenshots(&dir.path().join("nope"), "/screenshots").is_err());
    }
}
