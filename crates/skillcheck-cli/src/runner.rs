use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use skillcheck_report::{aggregate, render};
use skillcheck_rules::stats::SkillStats;
use skillcheck_rules::{discover, fix, stats, Checker, SkillDirectory};
use skillcheck_types::Verdict;

use crate::config::Config;

/// What one invocation was asked to do
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Skill directory, or plugin root with `plugin_dir`
    pub path: PathBuf,
    pub plugin_dir: bool,
    pub deep: bool,
    pub fix: bool,
    pub stats: bool,
    pub json: bool,
    pub color: bool,
}

/// Validator run - drives discovery, rule evaluation, and rendering
pub struct Runner {
    config: Config,
    opts: RunOptions,
}

impl Runner {
    /// Create a runner for one invocation
    pub fn new(config: Config, opts: RunOptions) -> Self {
        Self { config, opts }
    }

    /// Execute the run and return the overall verdict
    pub fn run(self) -> Result<Verdict> {
        debug!("Run options: {:?}", self.opts);

        let targets = if self.opts.plugin_dir {
            discover::discover_skills(&self.opts.path)?
        } else {
            vec![self.opts.path.clone()]
        };

        if self.opts.stats {
            self.run_stats(&targets)
        } else {
            self.run_validate(&targets)
        }
    }

    /// Validate each target independently; the exit verdict is the worst
    /// individual outcome
    fn run_validate(&self, targets: &[PathBuf]) -> Result<Verdict> {
        let checker = Checker::new(self.config.limits.clone()).with_deep(self.opts.deep);
        let mut worst = Verdict::Pass;

        for target in targets {
            let skill = SkillDirectory::open(target)
                .with_context(|| format!("Cannot open skill directory {}", target.display()))?;

            let mut findings = Vec::new();
            if self.opts.fix {
                let applied = fix::apply_fixes(&skill)
                    .with_context(|| format!("Fix mode failed in {}", target.display()))?;
                info!("Applied {} fixes in {}", applied.len(), target.display());
                findings.extend(applied);
            }

            findings.extend(
                checker
                    .check(&skill)
                    .with_context(|| format!("Validation failed in {}", target.display()))?,
            );

            let report = aggregate(target.display().to_string(), findings);
            if report.verdict() == Verdict::Fail {
                worst = Verdict::Fail;
            }
            print!("{}", render(&report, self.opts.color));
        }

        Ok(worst)
    }

    /// Word-count statistics instead of rule findings
    fn run_stats(&self, targets: &[PathBuf]) -> Result<Verdict> {
        let mut all = Vec::with_capacity(targets.len());
        for target in targets {
            let skill = SkillDirectory::open(target)
                .with_context(|| format!("Cannot open skill directory {}", target.display()))?;
            all.push(stats::collect(&skill)?);
        }

        if self.opts.json {
            println!("{}", serde_json::to_string_pretty(&all)?);
        } else {
            print!("{}", render_stats(&all));
        }
        Ok(Verdict::Pass)
    }
}

/// Stats table: one row per skill plus an aggregate line
fn render_stats(all: &[SkillStats]) -> String {
    let name_width = all
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>6}  {:>5}  {:>9}  {:>6}\n",
        "NAME", "BODY", "REFS", "REF WORDS", "TOTAL"
    ));
    for s in all {
        out.push_str(&format!(
            "{:<name_width$}  {:>6}  {:>5}  {:>9}  {:>6}\n",
            s.name, s.body_words, s.reference_files, s.reference_words, s.total_words
        ));
    }

    let total: usize = all.iter().map(|s| s.total_words).sum();
    let largest = all.iter().max_by_key(|s| s.total_words);
    out.push_str(&format!(
        "{} skills, {} words total",
        all.len(),
        total
    ));
    if let Some(largest) = largest {
        out.push_str(&format!(
            ", largest: {} ({} words)",
            largest.name, largest.total_words
        ));
    }
    out.push('\n');
    out
}
