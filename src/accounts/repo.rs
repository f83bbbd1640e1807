use axum::async_trait;
use sqlx::PgPool;

use crate::accounts::repo_types::{Account, NewAccount};

/// Result of an insert that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created { id: i32 },
    /// The unique constraint on `email` rejected the row.
    Duplicate,
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by its exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>>;
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Insert with `status = true` and `primeiro_acesso = true`.
    async fn insert(&self, account: &NewAccount) -> anyhow::Result<InsertOutcome>;
}

/// Postgres-backed store. Each query checks a connection out of the pool and
/// hands it back when the query completes.
#[derive(Clone)]
pub struct PgAccountStore {
    db: PgPool,
}

impl PgAccountStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, nome, email, senha, status
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let row: Option<(i32,)> = sqlx::query_as(r#"SELECT id FROM usuarios WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.is_some())
    }

    async fn insert(&self, account: &NewAccount) -> anyhow::Result<InsertOutcome> {
        let inserted: Result<(i32,), sqlx::Error> = sqlx::query_as(
            r#"
            INSERT INTO usuarios (nome, email, senha, tipo, status, primeiro_acesso)
            VALUES ($1, $2, $3, $4, true, true)
            RETURNING id
            "#,
        )
        .bind(&account.display_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .fetch_one(&self.db)
        .await;

        match inserted {
            Ok((id,)) => Ok(InsertOutcome::Created { id }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(e.into()),
        }
    }
}
