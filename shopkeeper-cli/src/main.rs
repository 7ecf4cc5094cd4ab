use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;
use url::Url;

use shopkeeper::{ApiConfig, AppOptions, Console};

const BASE_ENV: &str = "SHOPKEEPER_API_BASE";
const PATH_ENV: &str = "SHOPKEEPER_API_PATH";

#[derive(Debug, Parser)]
#[command(
    name = "shopkeeper",
    version,
    about = "Manage a remote product catalog from the terminal"
)]
struct Cli {
    /// Base URL of the catalog service (falls back to SHOPKEEPER_API_BASE)
    #[arg(short = 'b', long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// API path segment identifying your catalog (falls back to SHOPKEEPER_API_PATH)
    #[arg(short = 'p', long = "api-path", value_name = "NAME")]
    api_path: Option<String>,

    /// Where the bearer credential is cached between runs
    #[arg(long = "credentials-file", value_name = "PATH")]
    credentials_file: Option<PathBuf>,

    /// Append tracing output to this file (the UI owns stdout)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Event-loop tick in milliseconds
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 250)]
    tick_ms: u64,

    /// Hide the shortcut help line
    #[arg(long = "no-help")]
    no_help: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_tracing(path)?;
    }

    let base = resolve(cli.base_url, BASE_ENV)
        .ok_or_else(|| eyre!("provide --base-url or set {BASE_ENV}"))?;
    let path = resolve(cli.api_path, PATH_ENV)
        .ok_or_else(|| eyre!("provide --api-path or set {PATH_ENV}"))?;
    let base = Url::parse(&base).wrap_err_with(|| format!("invalid base URL '{base}'"))?;

    let options = AppOptions::default()
        .with_tick_rate(Duration::from_millis(cli.tick_ms.max(10)))
        .with_help(!cli.no_help);

    let mut console = Console::new(ApiConfig::new(base, path)).with_options(options);
    if let Some(file) = cli.credentials_file {
        console = console.with_credentials_path(file);
    }
    console.run().map_err(Report::msg)?;
    Ok(())
}

fn resolve(flag: Option<String>, env: &str) -> Option<String> {
    flag.or_else(|| std::env::var(env).ok())
        .filter(|value| !value.is_empty())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("could not open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
