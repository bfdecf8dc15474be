//! Frontmatter extraction for skill documents
//!
//! Every SKILL.md starts with a `---` delimited YAML block carrying the
//! skill's metadata:
//!
//! ```text
//! ---
//! name: my-skill
//! description: Does something useful
//! ---
//!
//! Instructions follow in Markdown...
//! ```
//!
//! Parsing is deliberately permissive: `name` and `description` stay
//! optional here so the rule checker, not the parser, decides which
//! omissions are errors. The parser fails only when the delimiter block
//! itself is absent or the YAML inside it does not parse.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use skillcheck_types::{Result, ValidateError};

/// Metadata from a skill document's leading YAML block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    /// Skill name (lowercase letters, digits, hyphens; max 64 chars)
    pub name: Option<String>,
    /// Skill description (describes WHAT and WHEN; max 1024 chars)
    pub description: Option<String>,
    /// Hint shown when the skill takes an argument
    #[serde(rename = "argument-hint")]
    pub argument_hint: Option<String>,
    /// Tools the skill is allowed to invoke
    #[serde(rename = "allowed-tools")]
    pub allowed_tools: Option<serde_yaml::Value>,
    /// Any keys this tool does not recognize, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A parsed skill document: frontmatter plus the Markdown body after the
/// closing delimiter
#[derive(Debug, Clone)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    /// Number of whitespace-separated words in the body
    pub fn body_word_count(&self) -> usize {
        count_words(&self.body)
    }
}

/// Parse a skill document into frontmatter and body
pub fn parse_document(content: &str) -> Result<Document> {
    let frontmatter_re = Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n?([\s\S]*)$")
        .map_err(|e| ValidateError::MalformedFrontmatter {
            reason: format!("failed to compile frontmatter regex: {e}"),
        })?;

    let captures =
        frontmatter_re
            .captures(content)
            .ok_or_else(|| ValidateError::MalformedFrontmatter {
                reason: "no leading '---' delimited block".to_string(),
            })?;

    let yaml_str = captures
        .get(1)
        .ok_or_else(|| ValidateError::MalformedFrontmatter {
            reason: "empty frontmatter block".to_string(),
        })?
        .as_str();

    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let frontmatter: Frontmatter =
        serde_yaml::from_str(yaml_str).map_err(|e| ValidateError::MalformedFrontmatter {
            reason: format!("invalid YAML: {e}"),
        })?;

    Ok(Document {
        frontmatter,
        body: body.to_string(),
    })
}

/// Count whitespace-separated words, the same way `wc -w` does
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let content = r#"---
name: code-reviewer
description: Reviews code for best practices. Use when reviewing code.
---

# Code Reviewer

This skill helps review code.
"#;

        let doc = parse_document(content).unwrap();
        assert_eq!(doc.frontmatter.name.as_deref(), Some("code-reviewer"));
        assert_eq!(
            doc.frontmatter.description.as_deref(),
            Some("Reviews code for best practices. Use when reviewing code.")
        );
        assert!(doc.body.contains("# Code Reviewer"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let content = "---\nname: bare-skill\n---\nbody\n";
        let doc = parse_document(content).unwrap();
        assert_eq!(doc.frontmatter.name.as_deref(), Some("bare-skill"));
        assert!(doc.frontmatter.description.is_none());
    }

    #[test]
    fn test_extra_keys_preserved() {
        let content = r#"---
name: commit-helper
description: Writes commit messages.
argument-hint: "[message]"
model: haiku
---
body
"#;
        let doc = parse_document(content).unwrap();
        assert_eq!(doc.frontmatter.argument_hint.as_deref(), Some("[message]"));
        assert!(doc.frontmatter.extra.contains_key("model"));
    }

    #[test]
    fn test_no_frontmatter_is_malformed() {
        let err = parse_document("# Just a heading\n\nNo metadata here.\n").unwrap_err();
        assert!(matches!(
            err,
            ValidateError::MalformedFrontmatter { .. }
        ));
    }

    #[test]
    fn test_unclosed_frontmatter_is_malformed() {
        let err = parse_document("---\nname: broken\n").unwrap_err();
        assert!(matches!(
            err,
            ValidateError::MalformedFrontmatter { .. }
        ));
    }

    #[test]
    fn test_body_word_count() {
        let doc = parse_document("---\nname: n\n---\none two  three\nfour\n").unwrap();
        assert_eq!(doc.body_word_count(), 4);
    }
}
