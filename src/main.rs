use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use termsgate::config::{AppConfig, Overrides};
use termsgate::runtime::Runtime;
use termsgate::state::{AppState, FormController};
use termsgate::submit::{HttpTransport, SubmitExecutor};
use termsgate::terminal::Terminal;
use termsgate::ui::Renderer;
use termsgate::validation::FormSchema;
use termsgate::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "termsgate", version, about = "Password and terms form with remote submission")]
struct Cli {
    /// YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Submission endpoint; overrides the config file.
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write logs here. Nothing is logged otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = cli.log_file.as_ref() {
        init_logging(path, cli.log_level.as_str())?;
    }

    let config = AppConfig::load(
        cli.config.as_deref(),
        Overrides {
            endpoint: cli.endpoint,
            timeout_ms: cli.timeout_ms,
        },
    )?;
    tracing::info!(endpoint = %config.endpoint, "starting form");

    let transport = match config.timeout {
        Some(timeout) => HttpTransport::with_timeout(timeout),
        None => HttpTransport::new(),
    };
    let form = FormController::new(FormSchema::standard(), config.endpoint);
    let mut runtime = Runtime::new(
        AppState::new(form),
        Terminal::new()?,
        SubmitExecutor::new(Arc::new(transport)),
        Renderer::new(config.title),
    );
    runtime.run()?;
    Ok(())
}

fn init_logging(path: &Path, level: &str) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_new(level).map_err(|err| AppError::Logging(err.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
