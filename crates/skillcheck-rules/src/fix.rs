//! Fix mode
//!
//! Direct, non-transactional in-place edits for the mechanical violations:
//! frontmatter name normalization and reference file renames. No rollback;
//! anything that cannot be fixed safely is left alone.

use std::fs;

use tracing::{debug, warn};

use skillcheck_frontmatter::parse_document;
use skillcheck_types::{Category, Finding, Result};

use crate::skill_dir::{SkillDirectory, SKILL_FILE};

/// Apply every available fix to the skill, returning one finding per edit
pub fn apply_fixes(skill: &SkillDirectory) -> Result<Vec<Finding>> {
    let mut applied = Vec::new();
    fix_frontmatter_name(skill, &mut applied)?;
    fix_reference_names(skill, &mut applied)?;
    debug!("Applied {} fixes to {:?}", applied.len(), skill.root());
    Ok(applied)
}

/// Lowercase the frontmatter name and replace anything outside
/// `[a-z0-9-]` with hyphens
fn fix_frontmatter_name(skill: &SkillDirectory, applied: &mut Vec<Finding>) -> Result<()> {
    let skill_file = skill.skill_file();
    if !skill_file.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&skill_file)?;
    let Ok(doc) = parse_document(&content) else {
        // A malformed block cannot be edited mechanically
        return Ok(());
    };
    let Some(name) = doc.frontmatter.name else {
        return Ok(());
    };

    let normalized = normalize_name(&name);
    if normalized == name || normalized.is_empty() {
        return Ok(());
    }

    let Some(rewritten) = replace_name_line(&content, &normalized) else {
        warn!("Could not locate the name line in {:?}", skill_file);
        return Ok(());
    };
    fs::write(&skill_file, rewritten)?;

    applied.push(
        Finding::pass(
            Category::StructuralViolation,
            format!("fixed: normalized name '{name}' to '{normalized}'"),
        )
        .with_file(SKILL_FILE),
    );
    Ok(())
}

/// Rename non-kebab-case markdown files under references/
fn fix_reference_names(skill: &SkillDirectory, applied: &mut Vec<Finding>) -> Result<()> {
    let references = skill.references_dir();
    if !references.is_dir() {
        return Ok(());
    }

    let mut entries: Vec<_> = fs::read_dir(&references)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    entries.sort();

    for path in entries {
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let normalized = normalize_name(stem);
        if normalized == stem || normalized.is_empty() {
            continue;
        }

        let target = references.join(format!("{normalized}.md"));
        if target.exists() {
            warn!("Not renaming {:?}: {:?} already exists", path, target);
            continue;
        }
        fs::rename(&path, &target)?;

        applied.push(
            Finding::pass(
                Category::StructuralViolation,
                format!("fixed: renamed '{stem}.md' to '{normalized}.md'"),
            )
            .with_file(format!("references/{normalized}.md")),
        );
    }
    Ok(())
}

/// Normalize a name to the `[a-z][a-z0-9-]*` convention: lowercase,
/// whitespace and underscores become hyphens, everything else outside the
/// class is dropped, runs of hyphens collapse
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => Some(c),
            '-' | '_' => Some('-'),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        };
        if let Some(m) = mapped {
            if m == '-' && out.ends_with('-') {
                continue;
            }
            out.push(m);
        }
    }
    out.trim_matches('-').to_string()
}

/// Replace the `name:` line inside the leading frontmatter block only
fn replace_name_line(content: &str, new_name: &str) -> Option<String> {
    let mut out: Vec<String> = Vec::new();
    let mut in_frontmatter = false;
    let mut replaced = false;

    for (i, line) in content.lines().enumerate() {
        if i == 0 {
            in_frontmatter = line.trim_end() == "---";
            out.push(line.to_string());
            continue;
        }
        if in_frontmatter && line.trim_end() == "---" {
            in_frontmatter = false;
        }
        if in_frontmatter && !replaced && line.trim_start().starts_with("name:") {
            out.push(format!("name: {new_name}"));
            replaced = true;
            continue;
        }
        out.push(line.to_string());
    }

    replaced.then(|| out.join("\n") + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("My Skill"), "my-skill");
        assert_eq!(normalize_name("API_Notes"), "api-notes");
        assert_eq!(normalize_name("already-fine"), "already-fine");
        assert_eq!(normalize_name("--edges--"), "edges");
        assert_eq!(normalize_name("a  b"), "a-b");
    }

    #[test]
    fn test_replace_name_line_only_touches_frontmatter() {
        let content = "---\nname: My Skill\ndescription: d\n---\nname: not this one\n";
        let rewritten = replace_name_line(content, "my-skill").unwrap();
        assert!(rewritten.contains("name: my-skill\n"));
        assert!(rewritten.contains("name: not this one"));
    }

    #[test]
    fn test_fix_normalizes_name_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-skill");
        fs::create_dir(&root).unwrap();
        fs::write(
            root.join(SKILL_FILE),
            "---\nname: My Skill\ndescription: A description.\n---\nbody\n",
        )
        .unwrap();

        let skill = SkillDirectory::open(&root).unwrap();
        let applied = apply_fixes(&skill).unwrap();
        assert_eq!(applied.len(), 1);

        let content = fs::read_to_string(root.join(SKILL_FILE)).unwrap();
        assert!(content.contains("name: my-skill"));
    }

    #[test]
    fn test_fix_renames_reference_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("refs");
        fs::create_dir_all(root.join("references")).unwrap();
        fs::write(
            root.join(SKILL_FILE),
            "---\nname: refs\ndescription: d\n---\nbody\n",
        )
        .unwrap();
        fs::write(root.join("references/API_Notes.md"), "notes\n").unwrap();

        let skill = SkillDirectory::open(&root).unwrap();
        let applied = apply_fixes(&skill).unwrap();
        assert_eq!(applied.len(), 1);
        assert!(root.join("references/api-notes.md").is_file());
        assert!(!root.join("references/API_Notes.md").exists());
    }

    #[test]
    fn test_fix_is_noop_on_conforming_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("fine");
        fs::create_dir(&root).unwrap();
        fs::write(
            root.join(SKILL_FILE),
            "---\nname: fine\ndescription: d\n---\nbody\n",
        )
        .unwrap();

        let skill = SkillDirectory::open(&root).unwrap();
        assert!(apply_fixes(&skill).unwrap().is_empty());
    }
}
