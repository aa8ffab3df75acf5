use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{AuthError, UserAccount};

/// Persistence seam for user accounts. Email uniqueness is enforced at this
/// layer so both signup paths see the same behavior.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, account: UserAccount) -> Result<UserAccount, AuthError>;
    async fn find_by_email(&self, email: &str) -> Option<UserAccount>;
    async fn find_by_id(&self, id: Uuid) -> Option<UserAccount>;
    async fn list_all(&self) -> Vec<UserAccount>;
}

pub struct MemoryUserStore {
    accounts: RwLock<Vec<UserAccount>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, account: UserAccount) -> Result<UserAccount, AuthError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AuthError::EmailTaken);
        }

        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<UserAccount> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn list_all(&self) -> Vec<UserAccount> {
        self.accounts.read().await.clone()
    }
}
