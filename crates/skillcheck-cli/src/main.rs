//! skillcheck - skill directory validator
//!
//! Checks a skill directory (SKILL.md plus optional references/, examples/,
//! scripts/) against structural and content rules and prints a severity
//! graded report. Exit code 0 when no Errors were found, 1 when validation
//! failed, 2 on operational failure.

mod config;
mod runner;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use config::Config;
use runner::{RunOptions, Runner};
use skillcheck_types::Verdict;

/// Validate AI-assistant skill directories
#[derive(Parser, Debug)]
#[command(
    name = "skillcheck",
    version,
    about = "Validate skill directories against structure and content rules"
)]
struct Cli {
    /// Skill directory to validate (plugin root with --plugin-dir)
    path: PathBuf,

    /// Treat PATH as a plugin root and validate every skill under it
    #[arg(long)]
    plugin_dir: bool,

    /// Also run per-file checks on references/ and scripts/
    #[arg(long)]
    deep: bool,

    /// Apply mechanical fixes in place before validating
    #[arg(long)]
    fix: bool,

    /// Print word-count statistics instead of rule findings
    #[arg(long)]
    stats: bool,

    /// With --stats, emit JSON
    #[arg(long, requires = "stats")]
    json: bool,

    /// Disable colorized output
    #[arg(long)]
    no_color: bool,
}

fn run(cli: Cli) -> Result<Verdict> {
    let config = Config::load()?;
    skillcheck_logging::init_logging(&config.logging.level)?;

    let opts = RunOptions {
        path: cli.path,
        plugin_dir: cli.plugin_dir,
        deep: cli.deep,
        fix: cli.fix,
        stats: cli.stats,
        json: cli.json,
        color: !cli.no_color && io::stdout().is_terminal(),
    };

    Runner::new(config, opts).run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Verdict::Pass) => ExitCode::SUCCESS,
        Ok(Verdict::Fail) => ExitCode::from(1),
        Err(e) => {
            eprintln!("skillcheck: {e:#}");
            ExitCode::from(2)
        }
    }
}
