//! GeoIP Server - HTTP GeoIP lookups with an in-memory response cache

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoip_server::api::create_router;
use geoip_server::geo::MaxMindResolver;
use geoip_server::{spawn_sweep_task, AppState, Config};

/// Main entry point for the GeoIP server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build a tokio runtime with the configured worker count
/// 4. Open the database (fatal on failure)
/// 5. Create the response cache and start the sweep task, unless disabled
/// 6. Serve HTTP until SIGINT/SIGTERM
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoip_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: database={}, lookup={}, listen={}, threads={}, pretty={}, cache_ttl={}s",
        config.database_path,
        config.lookup,
        config.listen,
        config.threads,
        config.pretty,
        config.cache_ttl
    );

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.threads)
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let resolver = MaxMindResolver::open(&config.database_path)
        .with_context(|| format!("failed to open database {}", config.database_path))?;
    info!(
        "Loaded database {} (type {}, built at {})",
        config.database_path,
        resolver.database_type(),
        resolver.build_epoch()
    );
    resolver.check_mode(config.lookup);

    let state = AppState::from_config(&config, Arc::new(resolver));

    let sweep_handle = match state.service.cache() {
        Some(cache) => {
            info!("Response cache enabled with ttl {:?}", cache.read().await.ttl());
            Some(spawn_sweep_task(cache.clone(), config.sweep_interval))
        }
        None => {
            info!("Response cache disabled");
            None
        }
    };

    let app = create_router(state);

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("invalid listen address {}", config.listen))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = sweep_handle {
        handle.abort();
        warn!("Cache sweep task aborted");
    }
}
