//! Driving port for the signup and login use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register or authenticate an account without knowing (or importing) the
//! backing infrastructure. HTTP handler tests substitute a test double
//! instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupCredentials, User};

/// Domain use-case port for account registration and authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account and return the stored user.
    ///
    /// Fails with an invalid-request error when the email is already
    /// registered.
    async fn sign_up(&self, credentials: SignupCredentials) -> Result<User, Error>;

    /// Authenticate an existing account.
    ///
    /// An unknown email and a wrong password fail with the same
    /// unauthorized error, so responses do not reveal which was wrong.
    async fn sign_in(&self, credentials: LoginCredentials) -> Result<User, Error>;
}
