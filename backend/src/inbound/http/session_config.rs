//! Session configuration parsing and validation.
//!
//! This module centralises the environment-driven session settings so they
//! are validated consistently and can be tested in isolation. There is no
//! fallback to an ephemeral key: a deployment without a usable
//! `SESSION_SECRET` must not start, in any mode, because every restart
//! would silently invalidate all live sessions.

use std::fmt;

use actix_web::cookie::Key;
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SECRET_ENV: &str = "SESSION_SECRET";
const ENVIRONMENT_ENV: &str = "APP_ENV";
const PRODUCTION: &str = "production";

/// Minimum byte length for the session secret. `Key::derive_from` panics on
/// anything shorter, so this is validated up front.
pub const SESSION_SECRET_MIN_LEN: usize = 32;

/// Session settings derived from the environment.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

impl fmt::Debug for SessionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSettings")
            .field("key", &"..")
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// The session secret is too short to derive a signing key from.
    #[error("{name} too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        name: &'static str,
        length: usize,
        min_len: usize,
    },
}

/// Build session settings from environment variables.
///
/// `SESSION_SECRET` is required and must be at least
/// [`SESSION_SECRET_MIN_LEN`] bytes. Cookies are marked `Secure` exactly
/// when `APP_ENV` equals `production`.
///
/// # Examples
///
/// ```rust
/// use kym_backend::inbound::http::session_config::session_settings_from_env;
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SESSION_SECRET" => Some("0123456789abcdef0123456789abcdef".to_string()),
///     "APP_ENV" => Some("production".to_string()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env)?;
/// assert!(settings.cookie_secure);
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(env: &E) -> Result<SessionSettings, SessionConfigError> {
    let key = session_key_from_env(env)?;
    let cookie_secure = cookie_secure_from_env(env);

    Ok(SessionSettings { key, cookie_secure })
}

fn session_key_from_env<E: Env>(env: &E) -> Result<Key, SessionConfigError> {
    let Some(mut secret) = env.string(SECRET_ENV) else {
        return Err(SessionConfigError::MissingEnv { name: SECRET_ENV });
    };
    let length = secret.len();
    if length < SESSION_SECRET_MIN_LEN {
        secret.zeroize();
        return Err(SessionConfigError::SecretTooShort {
            name: SECRET_ENV,
            length,
            min_len: SESSION_SECRET_MIN_LEN,
        });
    }
    let key = Key::derive_from(secret.as_bytes());
    secret.zeroize();
    Ok(key)
}

fn cookie_secure_from_env<E: Env>(env: &E) -> bool {
    match env.string(ENVIRONMENT_ENV) {
        // Exact match: "Production" or "prod" count as development.
        Some(value) => value == PRODUCTION,
        None => {
            warn!("APP_ENV not set; session cookies stay non-Secure");
            false
        }
    }
}
