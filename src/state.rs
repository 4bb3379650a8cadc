use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::session::SessionKeys;
use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub keys: Arc<SessionKeys>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database_url, config.max_connections).await?;
        db::init_schema(&db).await?;
        Ok(Self::from_parts(db, config))
    }

    /// Signing keys are derived from the session secret once, here.
    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        let keys = Arc::new(SessionKeys::new(&config.session));
        Self { db, config, keys }
    }
}
