// Connected-account persistence port
//
// The engine's view of persistence is narrow: look up the active connected
// account for a host, and write back resolved profile data. The real backing
// store lives in the embedding application; the in-memory implementation here
// serves tests and small embeddings.

use crate::model::{AccountData, ConnectedAccount};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors from connected-account persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("connected account {0} not found")]
    AccountNotFound(i64),
}

/// Read/update access to connected accounts
#[async_trait]
pub trait ConnectedAccountStore: Send + Sync {
    /// Active (non-deleted) connected account for a host and service, if any
    async fn find_active(
        &self,
        host_id: i64,
        service: &str,
    ) -> Result<Option<ConnectedAccount>, StoreError>;

    /// Persist an account's network data field.
    /// Last write wins under concurrent profile resolution; profile selection
    /// is deterministic given the same upstream list, so the race is benign.
    async fn update_data(&self, account_id: i64, data: &AccountData) -> Result<(), StoreError>;
}

/// In-memory account store keyed by account id
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<i64, ConnectedAccount>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account
    pub async fn insert(&self, account: ConnectedAccount) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id, account);
    }

    /// Current state of an account, if present
    pub async fn get(&self, account_id: i64) -> Option<ConnectedAccount> {
        let accounts = self.accounts.read().await;
        accounts.get(&account_id).cloned()
    }
}

#[async_trait]
impl ConnectedAccountStore for InMemoryAccountStore {
    async fn find_active(
        &self,
        host_id: i64,
        service: &str,
    ) -> Result<Option<ConnectedAccount>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.host_id == host_id && a.service == service && a.is_active())
            .cloned())
    }

    async fn update_data(&self, account_id: i64, data: &AccountData) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&account_id)
            .ok_or(StoreError::AccountNotFound(account_id))?;
        account.data = data.clone();
        Ok(())
    }
}
