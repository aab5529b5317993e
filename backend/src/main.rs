//! Backend entry-point: wires configuration, tracing, and the HTTP server.

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kym_backend::inbound::http::health::HealthState;
use kym_backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = match ServerConfig::from_env(&DefaultEnv::new()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration rejected; refusing to start");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
