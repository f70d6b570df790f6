pub mod cli;
pub mod config;
pub mod datetime;
pub mod db;
pub mod entities;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

use std::path::Path;
use tokio::signal;

use anyhow::Context;
use cli::{Cli, Commands};
pub use config::Config;
use db::Store;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Loads the config named on the command line, or searches the default locations.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) if path.exists() => Config::load_from_path(path)?,
        Some(_) if cli.command() == Commands::Init => Config::default(),
        Some(path) => anyhow::bail!("Config file not found: {}", path.display()),
        None => return Config::load(),
    };
    config.apply_env();
    Ok(config)
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let _log_guard = init_tracing(&config)?;

    match cli.command() {
        Commands::Init => {
            let path = cli.config.unwrap_or_else(Config::default_config_path);
            if Config::create_default_if_missing(&path)? {
                println!("Created {}", path.display());
            } else {
                println!("{} already exists", path.display());
            }
            Ok(())
        }
        Commands::Migrate => {
            config.validate()?;
            run_migrations(&config).await
        }
        Commands::Serve => {
            config.validate()?;
            serve(config).await
        }
    }
}

/// Installs the global subscriber. The returned guard flushes the log file on drop.
fn init_tracing(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer());

    if config.general.debug {
        registry.try_init().context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    let log_file = Path::new(&config.general.log_file);
    let file_name = log_file
        .file_name()
        .context("general.log_file must name a file")?;
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!("Logging to {}", log_file.display());
    Ok(Some(guard))
}

async fn run_migrations(config: &Config) -> anyhow::Result<()> {
    Store::with_pool_options(&config.general.database_path, 1, 1)
        .await
        .with_context(|| format!("Failed to open {}", config.general.database_path))?;
    info!("Migrations applied to {}", config.general.database_path);
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.server.address();

    let state = web::create_app_state_from_config(config)
        .await
        .context("Failed to initialize application state")?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Fyyur running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
