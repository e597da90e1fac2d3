use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::application::ports::health_probe::HealthProbe;
use crate::bootstrap::config::Config;

pub mod error;
pub mod repositories;

pub use error::DbError;

pub type PgPool = Pool<Postgres>;

#[derive(Clone, Debug)]
pub struct PoolSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

impl From<&Config> for PoolSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            database_url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            acquire_timeout: cfg.acquire_timeout(),
            run_migrations: cfg.run_migrations,
        }
    }
}

/// Owner of the process-wide connection pool.
///
/// The pool only exists between [`Database::connect`] and
/// [`Database::disconnect`]; repositories borrow it per request through
/// [`Database::pool`], which fails with [`DbError::NotConnected`] outside
/// that window.
pub struct Database {
    settings: PoolSettings,
    pool: RwLock<Option<PgPool>>,
    // Serializes connect/disconnect so two callers never build two pools.
    lifecycle: Mutex<()>,
}

impl Database {
    pub fn new(settings: PoolSettings) -> Self {
        Self {
            settings,
            pool: RwLock::new(None),
            lifecycle: Mutex::new(()),
        }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    /// Establishes the pool, or returns the live one if already connected.
    ///
    /// Either the pool is fully usable (connected and migrated) and stored, or
    /// nothing is retained.
    pub async fn connect(&self) -> Result<PgPool, DbError> {
        let _guard = self.lifecycle.lock().await;

        if let Some(pool) = self.read_slot().as_ref().filter(|p| !p.is_closed()) {
            debug!("db_pool_already_connected");
            return Ok(pool.clone());
        }

        let pool = PgPoolOptions::new()
            .max_connections(self.settings.max_connections)
            .min_connections(self.settings.min_connections)
            .acquire_timeout(self.settings.acquire_timeout)
            .connect(&self.settings.database_url)
            .await
            .map_err(DbError::Connection)?;

        if self.settings.run_migrations {
            if let Err(e) = migrate(&pool).await {
                pool.close().await;
                return Err(e);
            }
        }

        *self.write_slot() = Some(pool.clone());
        info!(
            max_connections = self.settings.max_connections,
            open = pool.size(),
            "db_pool_connected"
        );
        Ok(pool)
    }

    /// Releases every pooled connection. Safe to call when never connected or
    /// already disconnected.
    pub async fn disconnect(&self) {
        let _guard = self.lifecycle.lock().await;

        // Taking the pool first makes new acquisitions fail while we drain.
        let taken = self.write_slot().take();
        match taken {
            Some(pool) if !pool.is_closed() => {
                pool.close().await;
                info!("db_pool_closed");
            }
            Some(_) => warn!("db_pool_was_already_closed"),
            None => debug!("db_pool_not_connected_nothing_to_close"),
        }
    }

    pub fn pool(&self) -> Result<PgPool, DbError> {
        self.read_slot()
            .as_ref()
            .filter(|p| !p.is_closed())
            .cloned()
            .ok_or(DbError::NotConnected)
    }

    pub fn is_connected(&self) -> bool {
        self.pool().is_ok()
    }

    pub fn open_connections(&self) -> u32 {
        self.read_slot().as_ref().map(|p| p.size()).unwrap_or(0)
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        let pool = self.pool()?;
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&pool)
            .await?;
        Ok(())
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<PgPool>> {
        self.pool.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<PgPool>> {
        self.pool.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl HealthProbe for Database {
    async fn is_healthy(&self) -> bool {
        self.ping().await.is_ok()
    }
}

pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
