// src/main.rs
// persona-gateway - chatbot persona pages and chat proxy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use persona_gateway::config::GatewayConfig;
use persona_gateway::{build_state, web};

#[derive(Parser)]
#[command(name = "persona-gateway")]
#[command(about = "Serve chatbot persona pages and proxy chat to an LLM API")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory of persona JSON documents
    #[arg(short, long)]
    configs_dir: Option<PathBuf>,

    /// Directory with index.html / bot.html overrides
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut GatewayConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.configs_dir {
            config.configs_dir = dir;
        }
        if let Some(dir) = self.templates_dir {
            config.templates_dir = Some(dir);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env();
    cli.apply(&mut config);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Persona configs: {}", config.configs_dir.display());
    info!("Model: {}", config.model);
    if !config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; /chat will answer 500 until it is");
    }
    if !config.configs_dir.is_dir() {
        warn!("Config directory {} does not exist", config.configs_dir.display());
    }

    let state = build_state(&config)?;
    let app = web::create_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
