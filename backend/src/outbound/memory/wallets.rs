//! Hash-map-backed wallet repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{WalletPersistenceError, WalletRepository};
use crate::domain::{NewWallet, UserId, Wallet, WalletId};

/// In-memory implementation of the wallet persistence port.
///
/// The map is keyed by owner, which makes the one-wallet-per-user rule a
/// plain key collision.
#[derive(Debug, Default)]
pub struct InMemoryWalletRepository {
    store: RwLock<HashMap<UserId, Wallet>>,
}

impl InMemoryWalletRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<UserId, Wallet>>, WalletPersistenceError> {
        self.store
            .read()
            .map_err(|_| WalletPersistenceError::query("wallet store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<UserId, Wallet>>, WalletPersistenceError> {
        self.store
            .write()
            .map_err(|_| WalletPersistenceError::query("wallet store lock poisoned"))
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet, WalletPersistenceError> {
        let mut store = self.write()?;
        if store.contains_key(&new_wallet.user_id) {
            return Err(WalletPersistenceError::already_exists(
                new_wallet.user_id.as_ref(),
            ));
        }
        let wallet = Wallet::new(
            WalletId::random(),
            new_wallet.user_id,
            new_wallet.title,
            new_wallet.description,
            new_wallet.balance,
        );
        store.insert(wallet.user_id().clone(), wallet.clone());
        Ok(wallet)
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Wallet>, WalletPersistenceError> {
        let store = self.read()?;
        Ok(store.get(user_id).cloned())
    }
}
