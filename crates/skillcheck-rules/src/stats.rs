//! Word-count statistics for a skill
//!
//! Backs the `--stats` mode: per-skill body and reference word counts,
//! independent of rule evaluation.

use std::fs;

use serde::Serialize;
use tracing::debug;

use skillcheck_frontmatter::{count_words, parse_document};
use skillcheck_types::Result;

use crate::skill_dir::SkillDirectory;

/// Word counts for one skill
#[derive(Debug, Clone, Serialize)]
pub struct SkillStats {
    /// Frontmatter name when available, directory name otherwise
    pub name: String,
    pub path: String,
    pub body_words: usize,
    pub reference_files: usize,
    pub reference_words: usize,
    pub total_words: usize,
}

/// Count words in a skill's SKILL.md body and its reference files
pub fn collect(skill: &SkillDirectory) -> Result<SkillStats> {
    let mut name = skill.dir_name().unwrap_or("(unnamed)").to_string();
    let mut body_words = 0;

    let skill_file = skill.skill_file();
    if skill_file.exists() {
        let content = fs::read_to_string(&skill_file)?;
        match parse_document(&content) {
            Ok(doc) => {
                if let Some(ref fm_name) = doc.frontmatter.name {
                    name = fm_name.clone();
                }
                body_words = doc.body_word_count();
            }
            // No frontmatter to separate out; count the whole file
            Err(_) => body_words = count_words(&content),
        }
    }

    let mut reference_files = 0;
    let mut reference_words = 0;
    let references = skill.references_dir();
    if references.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(&references)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|e| e.path())
            .collect();
        entries.sort();
        for path in entries {
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                reference_files += 1;
                reference_words += count_words(&fs::read_to_string(&path)?);
            }
        }
    }

    debug!(
        "Stats for {:?}: {} body words, {} reference words",
        skill.root(),
        body_words,
        reference_words
    );

    Ok(SkillStats {
        name,
        path: skill.root().display().to_string(),
        body_words,
        reference_files,
        reference_words,
        total_words: body_words + reference_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill_dir::SKILL_FILE;
    use std::fs;

    #[test]
    fn test_collect_counts_body_and_references() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("counted");
        fs::create_dir_all(root.join("references")).unwrap();
        fs::write(
            root.join(SKILL_FILE),
            "---\nname: counted\ndescription: d\n---\none two three\n",
        )
        .unwrap();
        fs::write(root.join("references/topic.md"), "four five\n").unwrap();

        let skill = SkillDirectory::open(&root).unwrap();
        let stats = collect(&skill).unwrap();
        assert_eq!(stats.name, "counted");
        assert_eq!(stats.body_words, 3);
        assert_eq!(stats.reference_files, 1);
        assert_eq!(stats.reference_words, 2);
        assert_eq!(stats.total_words, 5);
    }

    #[test]
    fn test_collect_without_skill_file() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("empty-skill");
        fs::create_dir(&root).unwrap();

        let skill = SkillDirectory::open(&root).unwrap();
        let stats = collect(&skill).unwrap();
        assert_eq!(stats.name, "empty-skill");
        assert_eq!(stats.total_words, 0);
    }
}
