//! Content snapshot persistence.
//!
//! The engine itself owns no persisted state; the host application keeps
//! the whole [`ContentSet`] as one JSON snapshot and hands the engine a
//! repository built from it. These helpers read and write that snapshot:
//! a missing file loads the default (empty) set, mirroring the original
//! deployment where first-run storage is seeded lazily.

use std::path::Path;

use anyhow::{Context, Result};

use crate::content::ContentSet;

/// Load a content snapshot, falling back to the default set when the file
/// does not exist yet.
pub fn load_content(path: &Path) -> Result<ContentSet> {
    if !path.exists() {
        return Ok(ContentSet::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content snapshot: {}", path.display()))?;

    let content: ContentSet = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse content snapshot: {}", path.display()))?;

    Ok(content)
}

/// Write a content snapshot as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_content(path: &Path, content: &ContentSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(content)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write content snapshot: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Skill;
    use tempfile::TempDir;

    #[test]
    fn test_missing_snapshot_loads_default_set() {
        let tmp = TempDir::new().unwrap();
        let content = load_content(&tmp.path().join("content.json")).unwrap();
        assert!(content.skills.is_empty());
        assert!(content.about.name.is_empty());
    }

    #[test]
    fn test_snapshot_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("content.json");

        let mut content = ContentSet::default();
        content.skills.push(Skill {
            id: "1".to_string(),
            name: "React.js".to_string(),
            level: 90,
            category: "Frontend".to_string(),
        });
        content.about.contact_email = "jane@example.com".to_string();

        save_content(&path, &content).unwrap();
        let loaded = load_content(&path).unwrap();

        assert_eq!(loaded.skills.len(), 1);
        assert_eq!(loaded.skills[0].name, "React.js");
        assert_eq!(loaded.about.contact_email, "jane@example.com");
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_content(&path).is_err());
    }
}
