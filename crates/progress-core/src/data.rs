use std::path::Path;

use crate::error::{ProgressError, Result};
use crate::types::ProgressPayload;

/// Read a payload from a `.json`, `.yaml` or `.yml` data file.
///
/// The payload is validated; a file with out-of-range fractions or duplicate
/// ids is rejected rather than served.
pub fn load_payload(path: &Path) -> Result<ProgressPayload> {
    if !path.exists() {
        return Err(ProgressError::DataFileNotFound(path.display().to_string()));
    }
    let data = std::fs::read_to_string(path)?;
    let payload: ProgressPayload = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&data)?,
        _ => serde_json::from_str(&data)?,
    };
    payload.validate()?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use tempfile::TempDir;

    #[test]
    fn loads_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(
            &path,
            r#"{"overall":0.2,"milestones":[{"id":1,"title":"A","status":"todo","percent":0.2}],"features":[]}"#,
        )
        .unwrap();
        let p = load_payload(&path).unwrap();
        assert_eq!(p.milestones[0].status, Status::Todo);
    }

    #[test]
    fn loads_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.yaml");
        std::fs::write(
            &path,
            "overall: 0.9\nmilestones: []\nfeatures:\n  - id: fall\n    title: Fall Detection\n    status: done\n",
        )
        .unwrap();
        let p = load_payload(&path).unwrap();
        assert_eq!(p.features[0].status, Status::Done);
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_payload(&dir.path().join("progress.json")).unwrap_err();
        assert!(matches!(err, ProgressError::DataFileNotFound(_)));
    }

    #[test]
    fn invalid_payload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, r#"{"overall":65,"milestones":[],"features":[]}"#).unwrap();
        let err = load_payload(&path).unwrap_err();
        assert!(matches!(err, ProgressError::InvalidPayload(_)));
    }
}
