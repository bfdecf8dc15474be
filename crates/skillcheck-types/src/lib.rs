//! Skillcheck Types - Core types for the skillcheck validator
//!
//! This module defines the data model shared by every stage of a validation
//! run: findings, severities, reports, and the error taxonomy.

mod error;
mod finding;
mod report;

pub use error::{Result, ValidateError};
pub use finding::{Category, Finding, Severity};
pub use report::{Report, Verdict};
