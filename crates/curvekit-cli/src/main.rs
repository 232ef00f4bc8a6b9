//! curvekit CLI
//!
//! Generates a collection of random curves, prints each curve's position and
//! tangent at the evaluation parameter, then the circle radii in ascending
//! order and their sum.
//!
//! # Usage
//!
//! ```bash
//! # Reference run: 10 curves from [-10, 10], evaluated at PI / 4
//! curvekit
//!
//! # Reproducible run with a custom domain
//! curvekit --seed 7 --min -2 --max 2 --count 25
//!
//! # Settings from a file, JSON output
//! curvekit --config run.toml --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use curvekit_pipeline::PipelineConfig;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "curvekit", version, about = "Random 3D curve generator and circle radius report")]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of curves to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Parameter t at which curves are evaluated
    #[arg(short = 't', long = "param", allow_hyphen_values = true)]
    parameter: Option<f64>,

    /// Lower bound of the sampling domain
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,

    /// Upper bound of the sampling domain
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draws allowed per shape parameter before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layers command-line flags over the config file over built-in defaults.
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(parameter) = self.parameter {
            config.parameter = parameter;
        }
        if let Some(min) = self.min {
            config.domain_min = min;
        }
        if let Some(max) = self.max {
            config.domain_max = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn execute(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");
    let (_curves, report) = curvekit_pipeline::run(&config).context("pipeline run failed")?;

    let output = match cli.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
