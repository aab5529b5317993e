//! HTTP server configuration object and helpers.

use std::fmt;
use std::net::{AddrParseError, SocketAddr};

use actix_web::cookie::Key;
use mockable::Env;

use crate::inbound::http::session_config::{SessionConfigError, session_settings_from_env};

const BIND_ADDR_ENV: &str = "KYM_BIND_ADDR";

/// Errors raised while resolving the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    /// Session cookie settings were missing or unusable.
    #[error(transparent)]
    Session(#[from] SessionConfigError),
    /// The configured bind address does not parse as `host:port`.
    #[error("{BIND_ADDR_ENV} is not a valid socket address: {value:?}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("key", &"..")
            .field("cookie_secure", &self.cookie_secure)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl ServerConfig {
    /// Construct a server configuration from already-resolved settings.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
        }
    }

    /// Resolve the configuration from the environment.
    ///
    /// Session settings follow the rules documented on
    /// [`session_settings_from_env`]. The bind address comes from
    /// `KYM_BIND_ADDR` and defaults to every interface on port 8080.
    ///
    /// # Errors
    /// Returns [`ServerConfigError`] when the session secret is missing or
    /// too short, or when the bind address does not parse.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ServerConfigError> {
        let session = session_settings_from_env(env)?;
        let bind_addr = bind_addr_from_env(env)?;
        Ok(Self::new(session.key, session.cookie_secure, bind_addr))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ServerConfigError> {
    match env.string(BIND_ADDR_ENV) {
        Some(value) => value
            .parse()
            .map_err(|source| ServerConfigError::InvalidBindAddr { value, source }),
        None => Ok(SocketAddr::from(([0, 0, 0, 0], 8080))),
    }
}
