use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskdeck_api::config::ServerConfig;
use taskdeck_api::router::build_app_router;
use taskdeck_api::state::AppState;
use taskdeck_db::store::PgStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        jwt_expiry_hours = config.jwt.expiry_hours,
        "Loaded server configuration",
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = taskdeck_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    taskdeck_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    taskdeck_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- App state ---
    let store = Arc::new(PgStore::new(pool.clone()));
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let state = AppState::new(config, store.clone(), store);

    let app = build_app_router(state).context("Invalid CORS origin")?;

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
