//! Port abstraction for wallet persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewWallet, UserId, Wallet};

/// Persistence errors raised by wallet repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletPersistenceError {
    /// The user already owns a wallet.
    #[error("user already owns a wallet: {user_id}")]
    AlreadyExists { user_id: String },
    /// Query or mutation failed during execution.
    #[error("wallet repository query failed: {message}")]
    Query { message: String },
}

impl WalletPersistenceError {
    pub fn already_exists(user_id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            user_id: user_id.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for wallet persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Persist a new wallet and return the stored record.
    ///
    /// The one-wallet-per-user rule is enforced here, atomically with the
    /// insert.
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet, WalletPersistenceError>;

    /// Fetch the wallet owned by a user, if any.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Wallet>, WalletPersistenceError>;
}
