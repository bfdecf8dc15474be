//! Error types for validation runs

use thiserror::Error;

/// Errors that abort a validation run (as opposed to findings, which are
/// the run's normal output)
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The leading frontmatter block is absent or unparsable
    #[error("Malformed frontmatter: {reason}")]
    MalformedFrontmatter {
        /// What made the block unparsable
        reason: String,
    },

    /// The target path is not a directory
    #[error("'{path}' is not a skill directory")]
    NotADirectory {
        /// Offending path
        path: String,
    },

    /// Plugin root contains no skill directories to validate
    #[error("No skill directories found under '{path}'")]
    NoSkillsFound {
        /// Plugin root path
        path: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ValidateError>;
