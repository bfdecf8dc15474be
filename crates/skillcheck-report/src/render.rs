//! Console rendering

use colored::Colorize;

use skillcheck_types::{Report, Severity, Verdict};

/// Render a grouped report as a table for console consumption
///
/// With `color` set, severities and the verdict are colorized for
/// terminals; the layout is identical either way.
pub fn render(report: &Report, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&report.skill_path);
    out.push('\n');

    let category_width = report
        .findings
        .iter()
        .map(|f| f.category.label().len())
        .max()
        .unwrap_or(0);

    for finding in &report.findings {
        let severity = format!("{:<5}", finding.severity.label());
        let severity = if color {
            colorize_severity(&severity, finding.severity)
        } else {
            severity
        };
        let category = format!("{:<category_width$}", finding.category.label());

        out.push_str(&format!("  {severity}  {category}  {}", finding.message));
        if let Some(location) = finding.location() {
            out.push_str(&format!(" [{location}]"));
        }
        out.push('\n');
    }

    let verdict = match report.verdict() {
        Verdict::Pass => {
            if color {
                "PASS".green().bold().to_string()
            } else {
                "PASS".to_string()
            }
        }
        Verdict::Fail => {
            if color {
                "FAIL".red().bold().to_string()
            } else {
                "FAIL".to_string()
            }
        }
    };

    out.push_str(&format!(
        "{}, {}, {} passed: {verdict}\n",
        pluralize(report.count(Severity::Error), "error"),
        pluralize(report.count(Severity::Warning), "warning"),
        report.count(Severity::Pass),
    ));
    out
}

fn colorize_severity(padded: &str, severity: Severity) -> String {
    match severity {
        Severity::Error => padded.red().bold().to_string(),
        Severity::Warning => padded.yellow().to_string(),
        Severity::Pass => padded.green().to_string(),
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
