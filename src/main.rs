mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, MetricArgs, OutputArgs, ReportArgs};
use pagescore::config::{self, CONFIG_FILE_NAME, LoadedConfig};
use pagescore::core::metrics::build_metric_info_with;
use pagescore::core::report::{self, JsonReport};
use pagescore::{build_general_recommendations, build_report};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("PAGESCORE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => run_report(args),
        Commands::Metric(args) => run_metric(args),
        Commands::Recommendations(args) => run_recommendations(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                warn!("--config is ignored by `pagescore init`; writing ./{CONFIG_FILE_NAME}");
            }

            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load(output: &OutputArgs) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    config::load_config(output.config.as_deref(), &cwd)
}

fn run_report(args: ReportArgs) -> Result<i32> {
    let loaded = load(&args.output)?;
    let metrics = match &args.input {
        Some(path) => config::load_measurements(path)?,
        None => loaded.config.measurements,
    };
    let report = build_report(&metrics, &loaded.config).context("failed to build report")?;

    if args.output.json || loaded.config.general.json {
        let json_report = JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_metric(args: MetricArgs) -> Result<i32> {
    let loaded = load(&args.output)?;
    let thresholds = loaded.config.thresholds.for_metric(args.metric);
    let info = build_metric_info_with(args.metric, args.value, thresholds)?;

    if args.output.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        report::print_metric_card(&info);
    }

    if info.severity.meets_fail_on(loaded.config.general.fail_on) {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn run_recommendations(args: OutputArgs) -> Result<i32> {
    let loaded = load(&args)?;
    let catalog = build_general_recommendations();

    if args.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        report::print_catalog(&catalog);
    }
    Ok(0)
}
