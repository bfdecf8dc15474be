//! Skill discovery for plugin directories
//!
//! A plugin bundles its skills under `<root>/skills/`; bare collections
//! keep them directly under the root. Either way, every immediate
//! subdirectory is one independent skill.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use skillcheck_types::{Result, ValidateError};

/// Find the skill directories under a plugin root, sorted by path
pub fn discover_skills(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ValidateError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let skills_dir = root.join("skills");
    let base = if skills_dir.is_dir() {
        skills_dir
    } else {
        root.to_path_buf()
    };

    let mut skills: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&base)? {
        let path = entry?.path();
        if path.is_dir() {
            debug!("Discovered skill candidate: {:?}", path);
            skills.push(path);
        }
    }
    skills.sort();

    if skills.is_empty() {
        return Err(ValidateError::NoSkillsFound {
            path: root.display().to_string(),
        });
    }

    info!("Discovered {} skills under {:?}", skills.len(), root);
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prefers_skills_subdirectory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("skills/alpha")).unwrap();
        fs::create_dir_all(tmp.path().join("skills/beta")).unwrap();
        fs::create_dir_all(tmp.path().join("agents")).unwrap();

        let skills = discover_skills(tmp.path()).unwrap();
        assert_eq!(skills.len(), 2);
        assert!(skills[0].ends_with("skills/alpha"));
    }

    #[test]
    fn test_falls_back_to_root_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("alpha")).unwrap();

        let skills = discover_skills(tmp.path()).unwrap();
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_empty_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = discover_skills(tmp.path()).unwrap_err();
        assert!(matches!(err, ValidateError::NoSkillsFound { .. }));
    }
}
