use std::{str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use tracing::info;

use crate::{
    auth::repo::UserRepo, catalog::repo::CatalogRepo, config::DatabaseConfig,
    progress::repo::ProgressRepo,
};

#[cfg(test)]
pub mod memory;

/// Fixed cap applied to every list query.
pub const FETCH_LIMIT: i64 = 100;

/// Everything the handlers need from storage.
pub trait Store: UserRepo + CatalogRepo + ProgressRepo {}

impl<T> Store for T where T: UserRepo + CatalogRepo + ProgressRepo {}

/// Postgres-backed store. Owns the pool for the life of the process.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: PgPool,
}

impl PgStore {
    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = PgConnectOptions::from_str(&cfg.url).context("parse DATABASE_URL")?;
        if let Some(name) = &cfg.name {
            options = options.database(name);
        }
        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .connect_with(options)
            .await
            .context("connect to database")?;
        info!(max_connections = cfg.max_connections, "database pool ready");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
