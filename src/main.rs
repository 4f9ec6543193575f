use al_karama_site::{config, i18n::DictionaryValidator, server};
use anyhow::{Context, Result};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("al_karama_site=info".parse()?),
        )
        .init();

    info!("Starting Al-Karama site");

    let config = config::Config::from_env()?;

    // Dictionaries ship with the binary; a mismatch is a build defect, not fatal at runtime
    let report = DictionaryValidator::validate_builtin();
    for warning in &report.warnings {
        warn!("Dictionary: {}", warning);
    }
    for problem in &report.errors {
        error!("Dictionary: {}", problem);
    }
    if report.is_clean() {
        info!("Dictionaries are in parity");
    }

    let addr = config.bind_addr();
    let state = server::AppState::new(config);
    info!(
        "Form submissions use the {} submitter",
        state.submitter.describe()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
