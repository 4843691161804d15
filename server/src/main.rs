mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;
    let addr = config.socket_addr();

    if config.resend.is_some() {
        tracing::info!("feedback forwarding enabled");
    } else {
        tracing::warn!("RESEND_API_KEY / RESEND_FROM / FEEDBACK_TO not all set; feedback stays in memory only");
    }

    let state = state::AppState::new(config);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "okami site listening");
    axum::serve(listener, app).await.map_err(|e| format!("server error: {e}"))
}
