//! Server binary: storage picked from the environment, API under `/api/v1`.

use std::sync::Arc;

use staybook::{app, AppConfig, AppState, FileStore, MemoryStore, ObjectStore, StorageBackend};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("staybook=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn ObjectStore> = match config.storage_backend {
        StorageBackend::File => {
            tracing::info!(path = %config.storage_file.display(), "file storage");
            Arc::new(FileStore::open(&config.storage_file)?)
        }
        StorageBackend::Memory => {
            tracing::info!("in-memory storage, objects are not persisted");
            Arc::new(MemoryStore::new())
        }
    };
    let state = AppState::new(store);

    let listener = TcpListener::bind(config.address()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
