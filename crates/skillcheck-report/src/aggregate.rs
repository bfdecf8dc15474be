//! Severity aggregation

use skillcheck_types::{Finding, Report, Severity};

/// Group findings into error/warning/pass order, preserving emission order
/// within each bucket
pub fn aggregate(skill_path: impl Into<String>, findings: Vec<Finding>) -> Report {
    let mut grouped = Vec::with_capacity(findings.len());
    for severity in [Severity::Error, Severity::Warning, Severity::Pass] {
        grouped.extend(findings.iter().filter(|f| f.severity == severity).cloned());
    }
    Report::new(skill_path, grouped)
}
