//! Domain ports and supporting types for the hexagonal boundary.

mod account_service;
mod user_repository;
mod wallet_repository;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::AccountService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use wallet_repository::MockWalletRepository;
pub use wallet_repository::{WalletPersistenceError, WalletRepository};
