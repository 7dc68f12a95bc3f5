//! # V.A.N.I-xAI - Desktop Voice Assistant Backend
//!
//! Classifies short commands into intents and answers them with system
//! reports, app and browser actions, or a chat-completion fallback. Serves
//! the browser frontend and a small JSON API.

mod actions;
mod ai;
mod assistant;
mod classifier;
mod config;
pub mod constants;
mod environment;
mod error;
mod models;
mod monitor;
mod report;
mod server;
mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use actions::{ActionExecutor, SystemLauncher};
use ai::OpenRouterClient;
use assistant::Assistant;
use classifier::Classifier;
use config::Config;
use environment::Environment;
use monitor::SysinfoSource;
use report::Reporter;
use server::Router;

/// V.A.N.I-xAI - voice assistant backend
#[derive(Parser, Debug)]
#[command(name = "vani", version, about = "Intent-driven desktop assistant with system reports and AI chat")]
struct Cli {
    /// Listen address (e.g. "127.0.0.1:5000")
    #[arg(long, short = 'b', value_name = "ADDR")]
    bind: Option<String>,

    /// Directory holding the web frontend
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Disable the AI chat fallback (no API calls)
    #[arg(long)]
    no_ai: bool,

    /// Treat the host as headless even if a display is present
    #[arg(long)]
    headless: bool,

    /// Open the web interface in the default browser after startup
    #[arg(long)]
    open_browser: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    config::load_env_files();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(dir) = cli.static_dir {
        config.server.static_dir = dir;
    }
    if cli.no_ai {
        config.ai.enabled = false;
    }

    let environment = if cli.headless {
        Environment::headless()
    } else {
        Environment::detect()
    };

    let chat = OpenRouterClient::new(config.ai.clone());
    if config.ai.enabled && !chat.is_ready() {
        warn!(
            "{} is not set; unmatched commands will get an error reply",
            constants::ENV_API_KEY
        );
    }

    let assistant = Assistant::new(
        Classifier::default(),
        Reporter::new(SysinfoSource::new(&config.metrics)),
        ActionExecutor::new(environment, SystemLauncher),
        chat,
    );
    info!(
        headless = assistant.executor().environment().is_headless(),
        "environment detected"
    );
    let router = Arc::new(Router::new(assistant, config.server.static_dir.clone()));

    let handle = server::start(
        &config.server,
        Arc::clone(&router),
        tokio::runtime::Handle::current(),
    )?;
    let url = match handle.local_addr() {
        Some(addr) => format!("http://{}", addr),
        None => format!("http://{}", config.server.bind),
    };
    info!(%url, static_dir = %config.server.static_dir.display(), "V.A.N.I-xAI listening");

    if cli.open_browser {
        let outcome = router.assistant().executor().open_interface(&url);
        info!("{}", outcome);
    }

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutting down");

    tokio::task::spawn_blocking(move || handle.shutdown())
        .await
        .context("server shutdown task failed")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
