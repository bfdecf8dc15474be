//! Configurable rule thresholds

use serde::Deserialize;

/// Hard body word limit: a SKILL.md body above this fails validation
pub const DEFAULT_MAX_BODY_WORDS: usize = 5000;
/// Soft body word limit: warn when the body grows past this
pub const DEFAULT_WARN_BODY_WORDS: usize = 4000;
/// Soft per-file word limit for reference documents (deep mode)
pub const DEFAULT_MAX_REFERENCE_WORDS: usize = 2000;
/// Maximum allowed name length
pub const DEFAULT_MAX_NAME_LENGTH: usize = 64;
/// Maximum allowed description length
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Thresholds used by the rule checker, overridable from configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_body_words: usize,
    pub warn_body_words: usize,
    pub max_reference_words: usize,
    pub max_name_length: usize,
    pub max_description_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_body_words: DEFAULT_MAX_BODY_WORDS,
            warn_body_words: DEFAULT_WARN_BODY_WORDS,
            max_reference_words: DEFAULT_MAX_REFERENCE_WORDS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}
