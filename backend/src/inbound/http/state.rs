//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, UserRepository, WalletRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub users: Arc<dyn UserRepository>,
    pub wallets: Arc<dyn WalletRepository>,
}

impl HttpState {
    /// Construct state from its port implementations.
    pub fn new(
        accounts: Arc<dyn AccountService>,
        users: Arc<dyn UserRepository>,
        wallets: Arc<dyn WalletRepository>,
    ) -> Self {
        Self {
            accounts,
            users,
            wallets,
        }
    }
}
