//! Findings produced by rule evaluation
//!
//! A finding is immutable once created and lives only for the run that
//! produced it.

use serde::{Deserialize, Serialize};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule satisfied
    Pass,
    /// Rule violated, but the skill is still usable
    Warning,
    /// Rule violated; the skill fails validation
    Error,
}

impl Severity {
    /// Short uppercase label for report rows
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// What kind of rule produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Frontmatter block absent or unparsable
    MalformedFrontmatter,
    /// A required file (SKILL.md) is missing
    MissingRequiredFile,
    /// Nesting or naming rule violated
    StructuralViolation,
    /// Word count out of bounds
    ContentSizeViolation,
}

impl Category {
    /// Human-readable category name for report rows
    pub fn label(&self) -> &'static str {
        match self {
            Category::MalformedFrontmatter => "frontmatter",
            Category::MissingRequiredFile => "required-file",
            Category::StructuralViolation => "structure",
            Category::ContentSizeViolation => "content-size",
        }
    }
}

/// One result of evaluating a rule against a skill directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    /// File the finding refers to, relative to the skill root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number within `file`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Finding {
    /// Create an Error finding
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, message)
    }

    /// Create a Warning finding
    pub fn warning(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    /// Create a Pass finding
    pub fn pass(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Pass, category, message)
    }

    fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            file: None,
            line: None,
        }
    }

    /// Attach the file this finding refers to
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a 1-based line number
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Where the finding points, as `file` or `file:line`
    pub fn location(&self) -> Option<String> {
        let file = self.file.as_ref()?;
        Some(match self.line {
            Some(line) => format!("{}:{}", file, line),
            None => file.clone(),
        })
    }
}
