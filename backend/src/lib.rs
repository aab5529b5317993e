//! Kym backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by documentation tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
