use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payroll_registry::api::{AppState, create_router};
use payroll_registry::config::{AppConfig, ConfigLoader};
use payroll_registry::registry::PayrollRegistry;

#[derive(Parser, Debug)]
#[command(name = "payroll-registry", version, about = "In-memory payroll registry server")]
struct Cli {
    /// YAML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Address to bind, overriding the configuration file.
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overriding the configuration file.
    #[arg(long)]
    port: Option<u16>,
}

impl Cli {
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading {}", path.display()))?
                .into_config(),
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let env_filter = EnvFilter::try_new(filter).context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

/// Resolves once `signal` fires. A handler that fails to install is logged
/// and never resolves, so it cannot stop the server by itself.
async fn wait_for_signal<F, E>(name: &str, signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    match signal.await {
        Ok(()) => info!(signal = name, "Shutdown signal received"),
        Err(err) => {
            error!(signal = name, error = %err, "Failed to install signal handler");
            std::future::pending::<()>().await;
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("ctrl_c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("terminate", async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.logging.filter)?;

    let state = AppState::new(PayrollRegistry::new());
    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(address = %addr, "Payroll registry listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
