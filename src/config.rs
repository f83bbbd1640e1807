use anyhow::Context;

use crate::accounts::Role;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection string; takes precedence over the individual parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationConfig {
    /// Role stored when the form omits `tipo`.
    pub default_role: Role,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub registration: RegistrationConfig,
    pub http_host: String,
    pub http_port: u16,
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_var_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            host: var_or("DB_HOST", "localhost"),
            port: parsed_var_or("DB_PORT", 5432)?,
            name: var_or("DB_NAME", "nome_do_banco"),
            user: var_or("DB_USER", "usuario"),
            password: var_or("DB_PASSWORD", "senha"),
            max_connections: parsed_var_or("DB_MAX_CONNECTIONS", 10)?,
        };
        let registration = RegistrationConfig {
            default_role: parsed_var_or("DEFAULT_ROLE", Role::default())?,
        };
        Ok(Self {
            database,
            registration,
            http_host: var_or("APP_HOST", "0.0.0.0"),
            http_port: parsed_var_or("APP_PORT", 8080)?,
        })
    }
}
