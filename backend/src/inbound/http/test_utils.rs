//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::web;

use crate::domain::AccountServiceImpl;
use crate::outbound::memory::{InMemoryUserRepository, InMemoryWalletRepository};

use super::session::SESSION_COOKIE_NAME;
use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Keeps the production cookie name but disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie from a response, panicking when absent.
pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .expect("session cookie set")
        .into_owned()
}

/// Build handler state backed by fresh in-memory repositories.
///
/// Signup, login, and wallet flows behave exactly as in production, just
/// without any process-external storage.
pub fn memory_state() -> web::Data<HttpState> {
    let users = Arc::new(InMemoryUserRepository::new());
    let wallets = Arc::new(InMemoryWalletRepository::new());
    let accounts = Arc::new(AccountServiceImpl::new(users.clone()));
    web::Data::new(HttpState::new(accounts, users, wallets))
}
