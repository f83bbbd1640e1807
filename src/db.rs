use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::config::DatabaseConfig;

fn connect_options(cfg: &DatabaseConfig) -> anyhow::Result<PgConnectOptions> {
    match &cfg.url {
        Some(url) => url.parse().context("parse DATABASE_URL"),
        None => Ok(PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .database(&cfg.name)
            .username(&cfg.user)
            .password(&cfg.password)),
    }
}

/// Opens the pool and proves it with a first connection; errors are fatal at
/// startup.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = connect_options(cfg)?;
    let db = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("connect to database {} on {}:{}", cfg.name, cfg.host, cfg.port))?;
    tracing::info!(host = %cfg.host, database = %cfg.name, "database connected");
    Ok(db)
}

pub async fn migrate(db: &PgPool) {
    if let Err(e) = sqlx::migrate!("./migrations").run(db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }
}
