//! Structural rule checker
//!
//! Evaluates each rule against a skill directory and collects findings.
//! Rules are independent and order-insensitive; a rule whose input is
//! missing (e.g. body size when SKILL.md does not exist) is skipped rather
//! than reported twice.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use skillcheck_frontmatter::{count_words, parse_document, Frontmatter};
use skillcheck_types::{Category, Finding, Result, ValidateError};

use crate::limits::Limits;
use crate::skill_dir::{SkillDirectory, SKILL_FILE};

/// Skill names: lowercase letter first, then lowercase letters, digits,
/// hyphens
pub const NAME_PATTERN: &str = "^[a-z][a-z0-9-]*$";

/// Kebab-case markdown file names under references/
const REFERENCE_FILE_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*\.md$";

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ValidateError::Config(format!("bad rule pattern '{pattern}': {e}")))
}

/// Evaluates validation rules against one skill directory
pub struct Checker {
    limits: Limits,
    deep: bool,
}

impl Checker {
    /// Create a checker with the given thresholds
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            deep: false,
        }
    }

    /// Enable deep mode: per-file checks on references/ and scripts/
    pub fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Run every rule against the skill and return the findings in
    /// emission order
    pub fn check(&self, skill: &SkillDirectory) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        let skill_file = skill.skill_file();
        if skill_file.exists() {
            findings.push(Finding::pass(
                Category::MissingRequiredFile,
                format!("{SKILL_FILE} present"),
            ));

            let content = fs::read_to_string(&skill_file)?;
            match parse_document(&content) {
                Ok(doc) => {
                    debug!("Parsed frontmatter for {:?}", skill.root());
                    self.check_frontmatter(skill, &doc.frontmatter, &mut findings)?;
                    self.check_body_size(doc.body_word_count(), &mut findings);
                }
                Err(e) => {
                    findings.push(
                        Finding::error(Category::MalformedFrontmatter, e.to_string())
                            .with_file(SKILL_FILE),
                    );
                }
            }
        } else {
            // Exactly one error for the missing entrypoint; the content
            // rules have no input and are skipped, not failed again.
            findings.push(Finding::error(
                Category::MissingRequiredFile,
                format!("{SKILL_FILE} not found"),
            ));
        }

        self.check_reference_nesting(skill, &mut findings)?;
        self.check_reference_naming(skill, &mut findings)?;

        if self.deep {
            self.check_reference_sizes(skill, &mut findings)?;
            self.check_script_shebangs(skill, &mut findings)?;
        }

        debug!(
            "Checked {:?}: {} findings (deep={})",
            skill.root(),
            findings.len(),
            self.deep
        );
        Ok(findings)
    }

    /// Frontmatter field presence and shape
    fn check_frontmatter(
        &self,
        skill: &SkillDirectory,
        frontmatter: &Frontmatter,
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        let before = findings.len();
        let name_re = compile(NAME_PATTERN)?;

        match frontmatter.name.as_deref() {
            None => {
                findings.push(
                    Finding::error(Category::MalformedFrontmatter, "missing 'name' field")
                        .with_file(SKILL_FILE),
                );
            }
            Some(name) => {
                if !name_re.is_match(name) {
                    findings.push(
                        Finding::error(
                            Category::StructuralViolation,
                            format!(
                                "name '{name}' must be lowercase letters, digits, and hyphens, \
                                 starting with a letter"
                            ),
                        )
                        .with_file(SKILL_FILE),
                    );
                }
                if name.len() > self.limits.max_name_length {
                    findings.push(
                        Finding::warning(
                            Category::StructuralViolation,
                            format!(
                                "name is {} characters (limit {})",
                                name.len(),
                                self.limits.max_name_length
                            ),
                        )
                        .with_file(SKILL_FILE),
                    );
                }
                if let Some(dir_name) = skill.dir_name() {
                    if dir_name != name {
                        findings.push(
                            Finding::warning(
                                Category::StructuralViolation,
                                format!("directory '{dir_name}' does not match name '{name}'"),
                            )
                            .with_file(SKILL_FILE),
                        );
                    }
                }
            }
        }

        match frontmatter.description.as_deref() {
            None | Some("") => {
                findings.push(
                    Finding::error(Category::MalformedFrontmatter, "missing 'description' field")
                        .with_file(SKILL_FILE),
                );
            }
            Some(description) => {
                if description.len() > self.limits.max_description_length {
                    findings.push(
                        Finding::warning(
                            Category::ContentSizeViolation,
                            format!(
                                "description is {} characters (limit {})",
                                description.len(),
                                self.limits.max_description_length
                            ),
                        )
                        .with_file(SKILL_FILE),
                    );
                }
            }
        }

        if findings.len() == before {
            findings.push(Finding::pass(
                Category::MalformedFrontmatter,
                "frontmatter well-formed",
            ));
        }
        Ok(())
    }

    /// Word-count bounds on the SKILL.md body
    fn check_body_size(&self, words: usize, findings: &mut Vec<Finding>) {
        if words > self.limits.max_body_words {
            findings.push(
                Finding::error(
                    Category::ContentSizeViolation,
                    format!(
                        "body is {words} words (hard limit {})",
                        self.limits.max_body_words
                    ),
                )
                .with_file(SKILL_FILE),
            );
        } else if words > self.limits.warn_body_words {
            findings.push(
                Finding::warning(
                    Category::ContentSizeViolation,
                    format!(
                        "body is {words} words (recommended limit {})",
                        self.limits.warn_body_words
                    ),
                )
                .with_file(SKILL_FILE),
            );
        } else {
            findings.push(Finding::pass(
                Category::ContentSizeViolation,
                format!("body is {words} words"),
            ));
        }
    }

    /// references/ holds files only, never nested directories
    fn check_reference_nesting(
        &self,
        skill: &SkillDirectory,
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        let references = skill.references_dir();
        if !references.is_dir() {
            return Ok(());
        }

        let before = findings.len();
        for entry in sorted_entries(&references)? {
            if entry.is_dir() {
                findings.push(
                    Finding::error(
                        Category::StructuralViolation,
                        format!(
                            "nested directory '{}' in references/ (one level deep only)",
                            file_name(&entry)
                        ),
                    )
                    .with_file(format!("references/{}", file_name(&entry))),
                );
            }
        }

        if findings.len() == before {
            findings.push(Finding::pass(
                Category::StructuralViolation,
                "references/ is one level deep",
            ));
        }
        Ok(())
    }

    /// Markdown files under references/ follow kebab-case naming
    fn check_reference_naming(
        &self,
        skill: &SkillDirectory,
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        let references = skill.references_dir();
        if !references.is_dir() {
            return Ok(());
        }

        let file_re = compile(REFERENCE_FILE_PATTERN)?;
        let before = findings.len();
        for entry in markdown_files(&references)? {
            let name = file_name(&entry);
            if !file_re.is_match(&name) {
                findings.push(
                    Finding::warning(
                        Category::StructuralViolation,
                        format!("reference file '{name}' is not kebab-case"),
                    )
                    .with_file(format!("references/{name}")),
                );
            }
        }

        if findings.len() == before {
            findings.push(Finding::pass(
                Category::StructuralViolation,
                "reference file names are kebab-case",
            ));
        }
        Ok(())
    }

    /// Deep mode: per-file word counts under references/
    fn check_reference_sizes(
        &self,
        skill: &SkillDirectory,
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        let references = skill.references_dir();
        if !references.is_dir() {
            return Ok(());
        }

        let before = findings.len();
        for entry in markdown_files(&references)? {
            let words = count_words(&fs::read_to_string(&entry)?);
            if words > self.limits.max_reference_words {
                findings.push(
                    Finding::warning(
                        Category::ContentSizeViolation,
                        format!(
                            "reference is {words} words (recommended limit {})",
                            self.limits.max_reference_words
                        ),
                    )
                    .with_file(format!("references/{}", file_name(&entry))),
                );
            }
        }

        if findings.len() == before {
            findings.push(Finding::pass(
                Category::ContentSizeViolation,
                "reference files within size bounds",
            ));
        }
        Ok(())
    }

    /// Deep mode: scripts/ files start with a shebang line
    fn check_script_shebangs(
        &self,
        skill: &SkillDirectory,
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        let scripts = skill.scripts_dir();
        if !scripts.is_dir() {
            return Ok(());
        }

        let before = findings.len();
        for entry in sorted_entries(&scripts)? {
            if !entry.is_file() {
                continue;
            }
            let content = fs::read_to_string(&entry)?;
            if !content.starts_with("#!") {
                findings.push(
                    Finding::warning(
                        Category::StructuralViolation,
                        format!("script '{}' has no shebang line", file_name(&entry)),
                    )
                    .with_file(format!("scripts/{}", file_name(&entry)))
                    .with_line(1),
                );
            }
        }

        if findings.len() == before {
            findings.push(Finding::pass(
                Category::StructuralViolation,
                "scripts carry shebang lines",
            ));
        }
        Ok(())
    }
}

/// Directory entries sorted by name, for deterministic reports
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Sorted `.md` files directly under `dir`
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
