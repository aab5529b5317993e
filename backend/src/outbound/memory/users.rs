//! Hash-map-backed user repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId};

/// In-memory implementation of the user persistence port.
///
/// Shared across workers behind an [`std::sync::Arc`]; cloning the store
/// itself would fork its state, so the type deliberately does not implement
/// `Clone`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<UserId, User>>, UserPersistenceError> {
        self.store
            .read()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<UserId, User>>, UserPersistenceError> {
        self.store
            .write()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.write()?;
        // Uniqueness check and insert happen under one write lock.
        if store.values().any(|user| user.email() == &new_user.email) {
            return Err(UserPersistenceError::email_taken(new_user.email.as_ref()));
        }
        let user = User::new(
            UserId::random(),
            new_user.name,
            new_user.email,
            new_user.password_hash,
        );
        store.insert(user.id().clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let store = self.read()?;
        Ok(store.values().find(|user| user.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.read()?;
        Ok(store.get(id).cloned())
    }
}
