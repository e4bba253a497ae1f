//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, cache setup, worker spawning, and the Axum server lifecycle.

use crate::application::services::{LinkRegistrar, RedirectResolver};
use crate::config::{Config, StorageBackend};
use crate::domain::hit_event::HitEvent;
use crate::domain::hit_worker::run_hit_worker;
use crate::domain::repositories::LinkStore;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The mapping store (PostgreSQL with migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Background hit worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let cache = build_cache(&config).await;

    let (hit_tx, hit_rx) = mpsc::channel::<HitEvent>(config.hit_queue_capacity);
    let worker = tokio::spawn(run_hit_worker(hit_rx, store.clone()));

    let state = build_state(&config, store, cache, hit_tx);
    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and every sender clone) is gone; let the worker drain what is queued.
    if let Err(e) = worker.await {
        tracing::warn!("Hit worker ended abnormally: {}", e);
    }
    tracing::info!("Server stopped");

    Ok(())
}

/// Wires the services over an already constructed store and cache.
pub fn build_state(
    config: &Config,
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn CacheService>,
    hit_tx: mpsc::Sender<HitEvent>,
) -> AppState {
    let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
    let registrar = Arc::new(LinkRegistrar::new(
        store.clone(),
        generator,
        config.code_max_attempts,
    ));
    let resolver = Arc::new(RedirectResolver::new(
        store.clone(),
        cache.clone(),
        hit_tx,
    ));

    AppState::new(registrar, resolver, store, cache)
}

async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings will not survive a restart");
            Ok(Arc::new(MemoryLinkStore::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres storage backend")?;

            let pool = connect_pool(config, database_url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            Ok(Arc::new(PgLinkStore::new(Arc::new(pool))))
        }
    }
}

/// Opens a PostgreSQL pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
