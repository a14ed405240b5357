//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::recorder::QueuedClickRecorder;
use crate::infrastructure::cache::{LinkCache, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::infrastructure::probe::HttpProber;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Link cache (Redis, in-memory, or disabled)
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server
/// bind fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache = build_cache(&config).await;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(
        click_rx,
        link_repository.clone(),
        click_repository.clone(),
    ));
    tracing::info!("Click worker started");

    let recorder = Arc::new(QueuedClickRecorder::new(click_tx));
    let prober = Arc::new(HttpProber::new(Duration::from_secs(
        config.probe_timeout_seconds,
    )));

    let redirect_service = Arc::new(RedirectService::new(
        link_repository.clone(),
        cache.clone(),
        recorder.clone(),
    ));
    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        cache.clone(),
        prober,
    ));
    let stats_service = Arc::new(StatsService::new(link_repository, click_repository));

    let state = AppState::new(
        redirect_service,
        link_service,
        stats_service,
        cache,
        recorder,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Selects the cache backend from the configuration.
///
/// Redis when configured and reachable, a process-local in-memory cache
/// otherwise. `CACHE_ENABLED=false` disables caching entirely.
async fn build_cache(config: &Config) -> Arc<dyn LinkCache> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled");
        return Arc::new(NullCache::new());
    }

    let ttl = Duration::from_secs(config.cache_ttl_seconds);

    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
            }
        }
    }

    tracing::info!("Cache enabled (in-memory)");
    Arc::new(MemoryCache::new(ttl))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
