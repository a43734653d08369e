use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bordro_tools::api::{AppState, create_router};
use bordro_tools::config::SettingsLoader;
use bordro_tools::engine::HttpPayrollEngine;
use bordro_tools::tools::ToolRegistry;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bordro_tools=info")),
        )
        .init();

    let settings = match SettingsLoader::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!(code = err.code(), error = %err, "Failed to load settings");
            return ExitCode::FAILURE;
        }
    };

    let engine = match HttpPayrollEngine::from_settings(&settings) {
        Ok(engine) => engine,
        Err(err) => {
            error!(error = %err, "Failed to build engine client");
            return ExitCode::FAILURE;
        }
    };
    info!(endpoint = engine.endpoint(), "Payroll engine configured");

    let registry = ToolRegistry::new(Arc::new(engine), settings.request_timeout());
    let router = create_router(AppState::new(registry));

    let listener = match tokio::net::TcpListener::bind(settings.listen_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %settings.listen_addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %settings.listen_addr, "Listening");

    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
