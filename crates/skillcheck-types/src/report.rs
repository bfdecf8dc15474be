//! Validation reports
//!
//! A report is the ordered set of findings from a single run. It has no
//! identity beyond that run and is discarded after rendering.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};

/// Overall outcome of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// All findings from one validation run, in emission order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Path of the skill directory this run validated
    pub skill_path: String,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Create a report from a run's findings
    pub fn new(skill_path: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            skill_path: skill_path.into(),
            findings,
        }
    }

    /// Findings with the given severity, in emission order
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Number of findings with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }

    /// Fail iff at least one Error finding exists
    pub fn verdict(&self) -> Verdict {
        if self.count(Severity::Error) > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}
