use std::sync::Arc;

use crate::auth::jwt::JwtKeys;
use crate::config::AppConfig;
use crate::store::{PgStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
    pub jwt: JwtKeys,
}

impl AppState {
    /// Connects to the database and runs migrations. Returns the concrete
    /// store too so the caller can close it on shutdown.
    pub async fn init(config: AppConfig) -> anyhow::Result<(Self, PgStore)> {
        let store = PgStore::connect(&config.database).await?;
        store.migrate().await?;
        let state = Self::from_parts(Arc::new(store.clone()), Arc::new(config));
        Ok((state, store))
    }

    pub fn from_parts(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        let jwt = JwtKeys::from_config(&config.jwt);
        Self { store, config, jwt }
    }
}
