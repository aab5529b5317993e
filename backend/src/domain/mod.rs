//! Domain core: strongly typed entities, validation, and the account
//! service, all free of HTTP and storage concerns.
//!
//! Inbound adapters translate transport payloads into these types before
//! calling a port; outbound adapters implement the ports over concrete
//! infrastructure. Invariants and serialisation contracts are documented on
//! each type.

pub mod account;
pub mod credentials;
pub mod error;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod validation;
pub mod wallet;

pub use self::account::AccountServiceImpl;
pub use self::credentials::{LoginCredentials, SignupCredentials};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, PasswordHash, User, UserId, UserName};
pub use self::validation::FieldErrors;
pub use self::wallet::{NewWallet, Wallet, WalletDraft, WalletId, WalletTitle};
