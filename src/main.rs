mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod scan;
mod types;

use crate::error::SeoScoreError;
use crate::types::config::{FormatSetting, SeoScoreConfig};
use crate::types::report::{Priority, Severity};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config(config_dir: Option<&Path>) -> Result<SeoScoreConfig, SeoScoreError> {
    let root = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    Ok(config::load_config(&root)?.unwrap_or_default())
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &SeoScoreConfig) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        Some(cli::ReportFormat::Sarif) => report::OutputFormat::Sarif,
        None => match cfg.format() {
            Some(FormatSetting::Json) => report::OutputFormat::Json,
            Some(FormatSetting::Sarif) => report::OutputFormat::Sarif,
            Some(FormatSetting::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32, SeoScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let cfg = resolve_config(cmd.config_dir.as_deref())?;
            let page = input::load_page(&cmd.input)?;
            let score_report = analyze::analyze(&page);
            tracing::info!(
                url = %score_report.url,
                percentage = score_report.percentage,
                "scored page"
            );

            let rendered = report::render(&score_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");

            let thresholds = cfg.thresholds();
            if score_report.percentage < thresholds.fail_under {
                eprintln!(
                    "score {} is below fail_under {}",
                    score_report.percentage, thresholds.fail_under
                );
                Ok(exit_code::BLOCKING)
            } else if score_report.percentage < thresholds.warn_under {
                eprintln!(
                    "warning: score {} is below warn_under {}",
                    score_report.percentage, thresholds.warn_under
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Keywords(cmd) => {
            let page = input::load_page(&cmd.input)?;
            let score_report = analyze::analyze(&page);

            println!("keywords:");
            for record in &score_report.keywords {
                println!(
                    "- {}{}: {} (recommended {}-{}) [{}]",
                    record.keyword,
                    if record.is_target { " (target)" } else { "" },
                    record.count,
                    record.recommended_min,
                    record.recommended_max,
                    record.status
                );
            }
            println!(
                "covered: {}, needs work: {}, missing: {}",
                score_report.tally.covered,
                score_report.tally.needs_work,
                score_report.tally.missing
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Suggest(cmd) => {
            let cfg = resolve_config(cmd.config_dir.as_deref())?;
            let page = input::load_page(&cmd.input)?;
            let score_report = analyze::analyze(&page);

            let floor = match cmd.min_priority {
                Some(cli::MinPriority::High) => Priority::High,
                Some(cli::MinPriority::Medium) => Priority::Medium,
                Some(cli::MinPriority::Low) => Priority::Low,
                None => cfg.min_priority(),
            };
            let wins = score_report
                .quick_wins
                .iter()
                .filter(|win| win.priority <= floor)
                .collect::<Vec<_>>();

            if wins.is_empty() {
                println!("suggest: no quick wins");
            } else {
                println!("quick wins:");
                for win in wins {
                    println!("- [{}] {}: {}", win.priority, win.title, win.detail);
                }
            }

            println!("content gaps:");
            for gap in &score_report.content_gaps {
                println!("- {} [{}] {}: {}", gap.id, gap.severity, gap.title, gap.description);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let page = input::load_page(&cmd.input)?;
            let score_report = analyze::analyze(&page);

            let failing = score_report
                .recommendations
                .iter()
                .filter(|recommendation| recommendation.severity != Severity::Ok)
                .collect::<Vec<_>>();
            if failing.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for recommendation in &failing {
                let level = match recommendation.severity {
                    Severity::Error => "ERROR",
                    _ => "WARN",
                };
                println!("[{}] {}: {}", level, recommendation.id, recommendation.label);
                println!("  {}", recommendation.detail);
            }

            match score_report.worst_severity() {
                Severity::Error => Ok(exit_code::BLOCKING),
                _ => Ok(exit_code::WARNINGS),
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
