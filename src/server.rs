//! HTTP server bootstrap: tracing, store initialization, listener.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{SqliteStore, init_db};
use crate::errors::AppResult;
use crate::http::{AppState, create_app};
use crate::utils::SystemClock;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Initialize the store if needed and serve the API until shutdown.
pub async fn serve(cfg: &Config) -> AppResult<()> {
    let db_path = cfg.database_path();

    if init_db(&db_path)? {
        tracing::info!(path = %db_path.display(), "created new database");
        tracing::info!("default admin password: admin123");
        tracing::info!("default employee: John Doe (ID: EMP001)");
    } else {
        tracing::info!(path = %db_path.display(), "using existing database");
    }

    let state = AppState::new(
        Arc::new(SqliteStore::new(db_path)),
        Arc::new(SystemClock),
    );
    let app = create_app(state);

    let addr = cfg.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
