use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optiscan_core::{
    load_config, validate_config, OmrEngine, OmrOrchestrator, OrchestratorOptions,
    PdftoppmRasterizer, ProcessEngine, Rasterizer, WorkspaceManager,
};

use optiscan_server::api::create_router;
use optiscan_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("OPTISCAN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Engine command: {:?}", config.engine.command);
    info!("Workspace root: {:?}", config.workspace.root);

    // Build the pipeline collaborators
    let rasterizer = PdftoppmRasterizer::new(config.rasterizer.clone());
    if let Err(e) = rasterizer.validate().await {
        warn!("Rasterizer validation failed: {} (requests will fail)", e);
    }

    let engine = ProcessEngine::new(config.engine.clone());
    if let Err(e) = engine.validate().await {
        warn!("Engine validation failed: {} (requests will fail)", e);
    }

    let workspaces = WorkspaceManager::new(config.workspace.root.clone());
    let orchestrator = OmrOrchestrator::new(
        workspaces,
        Arc::new(rasterizer),
        Arc::new(engine),
        OrchestratorOptions::from_config(&config),
    );

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), orchestrator));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
