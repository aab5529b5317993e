//! Process-local repository adapters backed by locked hash maps.
//!
//! Each store guards its map with a [`std::sync::RwLock`]; uniqueness rules
//! (one account per email, one wallet per user) are checked under the write
//! lock so concurrent creates cannot both pass the check.

mod users;
mod wallets;

pub use users::InMemoryUserRepository;
pub use wallets::InMemoryWalletRepository;
