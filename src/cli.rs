use clap::{Args, Parser, Subcommand};
use pagescore::MetricKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pagescore",
    version,
    about = "PageSpeed-style performance report for a page's lab measurements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the full report from a measurement snapshot
    Report(ReportArgs),
    /// Classify a single metric value
    Metric(MetricArgs),
    /// Print the general recommendation catalog
    Recommendations(OutputArgs),
    /// Write a default pagescore.toml to the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    /// Measurements file (.json or .toml) overriding [measurements]
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct MetricArgs {
    #[arg(value_enum)]
    pub metric: MetricKind,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
