//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the HTTP surface. It
//! registers:
//!
//! - **Paths**: the auth, overview, wallet, and health endpoints
//! - **Schemas**: the shared error envelope plus the form and page payloads
//! - **Security**: the session cookie scheme guarding the app pages
//!
//! Debug builds serve the generated document at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::auth::{SignInForm, SignUpForm};
use crate::inbound::http::overview::{OverviewBody, OverviewUser, WalletSummary};
use crate::inbound::http::wallets::{CreateWalletForm, WalletCreatedBody};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "kymssn",
                "Session cookie issued by POST /sign-up and POST /sign-in.",
            ))),
        );
    }
}

/// OpenAPI document for the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Kym backend API",
        description = "Session-authenticated account, overview, and wallet endpoints plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::sign_up,
        crate::inbound::http::auth::sign_in,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::sign_up_page,
        crate::inbound::http::auth::sign_in_page,
        crate::inbound::http::overview::app_overview,
        crate::inbound::http::wallets::create_wallet_page,
        crate::inbound::http::wallets::create_wallet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        SignUpForm,
        SignInForm,
        CreateWalletForm,
        WalletCreatedBody,
        OverviewBody,
        OverviewUser,
        WalletSummary,
    )),
    tags(
        (name = "auth", description = "Signup, login, and logout"),
        (name = "app", description = "Session-gated page payloads"),
        (name = "wallets", description = "Wallet creation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
