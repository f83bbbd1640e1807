use std::sync::Arc;

use crate::{
    accounts::repo::{AccountStore, PgAccountStore},
    config::AppConfig,
    db,
};

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Loads configuration and connects to the database. A failure here is
    /// meant to stop the process before the listener is bound.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let pool = db::connect(&config.database).await?;
        db::migrate(&pool).await;

        Ok(Self {
            accounts: Arc::new(PgAccountStore::new(pool)) as Arc<dyn AccountStore>,
            config,
        })
    }

    #[cfg(test)]
    pub fn with_store(accounts: Arc<dyn AccountStore>) -> Self {
        use crate::config::{DatabaseConfig, RegistrationConfig};

        let config = Arc::new(AppConfig {
            database: DatabaseConfig {
                url: None,
                host: "localhost".into(),
                port: 5432,
                name: "test".into(),
                user: "test".into(),
                password: "test".into(),
                max_connections: 1,
            },
            registration: RegistrationConfig::default(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
        });
        Self { accounts, config }
    }
}
