//! HTTP inbound adapter exposing the form endpoints and page loaders.

pub mod auth;
pub mod error;
pub mod gate;
pub mod health;
pub mod overview;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod wallets;

pub use error::ApiResult;

/// Redirect target for requests that need an authenticated session.
pub const SIGN_IN_PATH: &str = "/sign-in";
/// Redirect target for authenticated users leaving the auth pages.
pub const APP_PATH: &str = "/app";
/// Redirect target after logout.
pub const LANDING_PATH: &str = "/";

/// Build a `302 Found` response pointing at `location`.
pub(crate) fn redirect_to(location: &'static str) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, location))
        .finish()
}
