//! In-memory `AccountStore` for service and router tests.

use axum::async_trait;
use tokio::sync::Mutex;

use crate::accounts::{
    repo::{AccountStore, InsertOutcome},
    repo_types::{Account, NewAccount, Role},
};

#[derive(Debug, Clone)]
pub struct StoredRow {
    pub id: i32,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
    pub first_access: bool,
}

#[derive(Default)]
struct Inner {
    rows: Vec<StoredRow>,
    calls: usize,
}

#[derive(Default)]
pub struct MemoryAccountStore {
    inner: Mutex<Inner>,
    fail: bool,
    blind_lookup: bool,
}

impl MemoryAccountStore {
    /// Every store call returns an error, as if the database were gone.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `email_exists` always answers false, so only the insert can notice a
    /// duplicate: the window between check and insert of two concurrent
    /// registrations.
    pub fn blind_lookup() -> Self {
        Self {
            blind_lookup: true,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> usize {
        self.inner.lock().await.calls
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn count(&self, email: &str) -> usize {
        let inner = self.inner.lock().await;
        inner.rows.iter().filter(|r| r.email == email).count()
    }

    pub async fn row(&self, email: &str) -> Option<StoredRow> {
        let inner = self.inner.lock().await;
        inner.rows.iter().find(|r| r.email == email).cloned()
    }

    pub async fn set_active(&self, email: &str, active: bool) {
        let mut inner = self.inner.lock().await;
        for row in inner.rows.iter_mut().filter(|r| r.email == email) {
            row.active = active;
        }
    }

    /// Seeds a row bypassing hashing, e.g. with a hash from an older scheme.
    pub async fn insert_raw(&self, email: &str, display_name: &str, password_hash: &str) {
        let mut inner = self.inner.lock().await;
        let id = inner.rows.len() as i32 + 1;
        inner.rows.push(StoredRow {
            id,
            display_name: display_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::default(),
            active: true,
            first_access: true,
        });
    }

    async fn touch(&self) -> anyhow::Result<tokio::sync::MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().await;
        inner.calls += 1;
        if self.fail {
            anyhow::bail!("database unavailable");
        }
        Ok(inner)
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        let inner = self.touch().await?;
        Ok(inner.rows.iter().find(|r| r.email == email).map(|r| Account {
            id: r.id,
            display_name: r.display_name.clone(),
            email: r.email.clone(),
            password_hash: r.password_hash.clone(),
            active: r.active,
        }))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let inner = self.touch().await?;
        Ok(!self.blind_lookup && inner.rows.iter().any(|r| r.email == email))
    }

    async fn insert(&self, account: &NewAccount) -> anyhow::Result<InsertOutcome> {
        let mut inner = self.touch().await?;
        if inner.rows.iter().any(|r| r.email == account.email) {
            return Ok(InsertOutcome::Duplicate);
        }
        let id = inner.rows.len() as i32 + 1;
        inner.rows.push(StoredRow {
            id,
            display_name: account.display_name.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            role: account.role,
            active: true,
            first_access: true,
        });
        Ok(InsertOutcome::Created { id })
    }
}
