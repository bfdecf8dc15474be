//! End-to-end rule evaluation against real directory trees

use std::fs;
use std::path::Path;

use skillcheck_rules::{fix, Checker, Limits, SkillDirectory};
use skillcheck_types::{Category, Finding, Report, Severity, Verdict};

fn make_skill(root: &Path, name: &str) {
    fs::create_dir_all(root.join("references")).unwrap();
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(
        root.join("SKILL.md"),
        format!(
            "---\nname: {name}\ndescription: Explains a topic. Use when asked about the topic.\n---\n\n# {name}\n\nRead references/overview.md first.\n"
        ),
    )
    .unwrap();
    fs::write(root.join("references/overview.md"), "An overview.\n").unwrap();
    fs::write(root.join("scripts/check.sh"), "#!/bin/sh\nexit 0\n").unwrap();
}

fn check(root: &Path, deep: bool) -> Vec<Finding> {
    let skill = SkillDirectory::open(root).unwrap();
    Checker::new(Limits::default())
        .with_deep(deep)
        .check(&skill)
        .unwrap()
}

#[test]
fn test_conforming_skill_passes_deep_validation() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("topic-explainer");
    make_skill(&root, "topic-explainer");

    let findings = check(&root, true);
    let report = Report::new(root.display().to_string(), findings);
    assert_eq!(report.verdict(), Verdict::Pass);
    assert_eq!(report.count(Severity::Error), 0);
    assert!(report.count(Severity::Pass) >= 5);
}

#[test]
fn test_broken_skill_accumulates_independent_findings() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("broken");
    make_skill(&root, "Broken Name");
    fs::create_dir_all(root.join("references/nested")).unwrap();
    fs::write(root.join("references/Bad_Name.md"), "notes\n").unwrap();

    let findings = check(&root, false);
    let report = Report::new(root.display().to_string(), findings);
    assert_eq!(report.verdict(), Verdict::Fail);

    // Name violation and nesting violation are reported independently
    assert!(report
        .with_severity(Severity::Error)
        .any(|f| f.category == Category::StructuralViolation && f.message.contains("lowercase")));
    assert!(report
        .with_severity(Severity::Error)
        .any(|f| f.message.contains("one level deep")));
    assert!(report
        .with_severity(Severity::Warning)
        .any(|f| f.message.contains("kebab-case")));
}

#[test]
fn test_fix_then_validate_clears_mechanical_findings() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("fixable");
    make_skill(&root, "Fixable Skill");
    fs::write(root.join("references/API_Notes.md"), "notes\n").unwrap();

    let skill = SkillDirectory::open(&root).unwrap();
    let applied = fix::apply_fixes(&skill).unwrap();
    assert_eq!(applied.len(), 2);

    // The directory name still mismatches (fix mode does not move the
    // skill itself), but the hard naming errors are gone.
    let findings = check(&root, false);
    let report = Report::new(root.display().to_string(), findings);
    assert_eq!(report.verdict(), Verdict::Pass);
}

#[test]
fn test_missing_entrypoint_fails_with_one_error() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("hollow");
    fs::create_dir_all(root.join("references")).unwrap();

    let findings = check(&root, true);
    let report = Report::new(root.display().to_string(), findings);
    assert_eq!(report.verdict(), Verdict::Fail);
    assert_eq!(report.count(Severity::Error), 1);
    assert_eq!(
        report
            .with_severity(Severity::Error)
            .next()
            .map(|f| f.category),
        Some(Category::MissingRequiredFile)
    );
}
