use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seoscore",
    version,
    about = "Rule-based on-page SEO content scoring"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a page and print the full report
    Score(ScoreCommand),
    /// Show keyword occurrence counts and status
    Keywords(KeywordsCommand),
    /// Show quick wins and content gaps
    Suggest(SuggestCommand),
    /// List failing on-page checks
    Lint(LintCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MinPriority {
    High,
    Medium,
    Low,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Page document (.toml or .json), or `-` for JSON on stdin
    pub input: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Directory holding seoscore.toml (defaults to the working directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct KeywordsCommand {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct SuggestCommand {
    pub input: PathBuf,
    #[arg(long, value_enum)]
    pub min_priority: Option<MinPriority>,
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct LintCommand {
    pub input: PathBuf,
}
