//! Skill directory layout
//!
//! A skill is a folder with a SKILL.md entrypoint and optional
//! `references/`, `examples/`, and `scripts/` subdirectories.

use std::path::{Path, PathBuf};

use skillcheck_types::{Result, ValidateError};

/// Name of the required entrypoint file
pub const SKILL_FILE: &str = "SKILL.md";

/// A skill directory under validation
#[derive(Debug, Clone)]
pub struct SkillDirectory {
    root: PathBuf,
}

impl SkillDirectory {
    /// Open a skill directory, failing if the path is not a directory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(ValidateError::NotADirectory {
                path: root.display().to_string(),
            });
        }
        Ok(Self { root })
    }

    /// Root path of the skill
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory's own name, used for naming-convention checks
    pub fn dir_name(&self) -> Option<&str> {
        self.root.file_name().and_then(|n| n.to_str())
    }

    /// Path to the SKILL.md entrypoint (may not exist)
    pub fn skill_file(&self) -> PathBuf {
        self.root.join(SKILL_FILE)
    }

    /// Path to the references/ subdirectory (may not exist)
    pub fn references_dir(&self) -> PathBuf {
        self.root.join("references")
    }

    /// Path to the scripts/ subdirectory (may not exist)
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    /// Path to the examples/ subdirectory (may not exist)
    pub fn examples_dir(&self) -> PathBuf {
        self.root.join("examples")
    }
}
