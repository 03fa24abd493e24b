//! lufa-validate-theme: check a theme file before it ships
//!
//! Exit codes: `0` valid, `1` validation failed, `2` input or configuration error.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lufa_theme::{ConformanceLevel, ThemeValidator};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;
use crate::output::OutputMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// 4.5:1 text, 3:1 UI
    Aa,
    /// 7:1 text, 3:1 UI
    Aaa,
}

impl From<LevelArg> for ConformanceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Aa => ConformanceLevel::Aa,
            LevelArg::Aaa => ConformanceLevel::Aaa,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lufa-validate-theme")]
#[command(
    version,
    about = "Validate a Lufa theme: required tokens, WCAG contrast and value formats"
)]
struct Args {
    /// Theme CSS file
    #[arg(required_unless_present = "print_config")]
    theme: Option<PathBuf>,

    /// Config file (default: ./lufa-theme.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Token prefix, without the leading `--`
    #[arg(long)]
    prefix: Option<String>,

    /// WCAG conformance level for contrast checks
    #[arg(long, value_enum)]
    level: Option<LevelArg>,

    /// Required-token list, one name per line
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Skip the required-token check
    #[arg(long)]
    skip_completeness: bool,

    /// Skip the contrast check
    #[arg(long)]
    skip_contrast: bool,

    /// Skip the value format check
    #[arg(long)]
    skip_format: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Debug logging and parse warnings in the report
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            prefix: self.prefix.clone(),
            level: self.level.map(Into::into),
            skip_completeness: self.skip_completeness,
            skip_contrast: self.skip_contrast,
            skip_format: self.skip_format,
            manifest: self.manifest.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether the theme passed every enabled check
fn run(args: &Args) -> Result<bool> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let (mut config, config_path) = config::load(args.config.as_deref(), &cwd)?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "loaded config");
    }
    config::apply_overrides(&mut config, &args.overrides())?;

    if args.print_config {
        print!("{}", config::to_toml(&config)?);
        return Ok(true);
    }

    let Some(theme) = &args.theme else {
        anyhow::bail!("No theme file given");
    };

    let validator = ThemeValidator::new(&config).context("Invalid configuration")?;

    let bytes = std::fs::read(theme)
        .with_context(|| format!("Failed to read {}", theme.display()))?;
    let report = validator
        .validate_bytes(&bytes)
        .with_context(|| format!("Failed to parse {}", theme.display()))?;
    report.log_summary();

    let mode = OutputMode::detect(args.json, args.no_color, std::io::stdout().is_terminal());
    print!("{}", output::render(&report, mode, args.verbose)?);

    Ok(report.is_valid())
}
