//! Server construction and middleware wiring.
//!
//! The session middleware is installed at the app level so every route
//! shares one cookie configuration, with [`Trace`] wrapped outside it so
//! responses carry a trace identifier even when session handling fails.

mod config;

pub use config::{ServerConfig, ServerConfigError};

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession, TtlExtensionPolicy},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::AccountServiceImpl;
use crate::inbound::http::auth::{logout, sign_in, sign_in_page, sign_up, sign_up_page};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::overview::app_overview;
use crate::inbound::http::session::SESSION_COOKIE_NAME;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::wallets::{create_wallet, create_wallet_page};
use crate::middleware::Trace;
use crate::outbound::memory::{InMemoryUserRepository, InMemoryWalletRepository};

/// Session lifetime. Fixed at issuance: the deadline does not slide on
/// activity, so `OnStateChanges` is the matching extension policy.
const SESSION_TTL: CookieDuration = CookieDuration::hours(24);

/// Dependency bundle consumed by [`build_app`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe state shared with the readiness and liveness handlers.
    pub health_state: web::Data<HealthState>,
    /// Port implementations backing the HTTP handlers.
    pub http_state: web::Data<HttpState>,
    /// Signing and encryption key for the session cookie.
    pub key: Key,
    /// Whether the session cookie is marked `Secure`.
    pub cookie_secure: bool,
}

/// Assemble the application: state, middleware, and every route.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(SESSION_TTL)
                .session_ttl_extension_policy(TtlExtensionPolicy::OnStateChanges),
        )
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(sign_up)
        .service(sign_in)
        .service(logout)
        .service(sign_up_page)
        .service(sign_in_page)
        .service(app_overview)
        .service(create_wallet_page)
        .service(create_wallet)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(serve_openapi));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

#[cfg(debug_assertions)]
async fn serve_openapi() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// State lives in process memory: every worker shares one repository pair,
/// and a restart starts from an empty store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
    } = config;
    let users = Arc::new(InMemoryUserRepository::new());
    let wallets = Arc::new(InMemoryWalletRepository::new());
    let accounts = Arc::new(AccountServiceImpl::new(users.clone()));
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::new(accounts, users, wallets)),
        key,
        cookie_secure,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for the assembled application.

    use actix_web::http::StatusCode;
    use actix_web::test;

    use super::*;
    use crate::inbound::http::auth::SignUpForm;
    use crate::inbound::http::test_utils::memory_state;

    fn test_deps() -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: memory_state(),
            key: Key::generate(),
            cookie_secure: false,
        }
    }

    #[actix_web::test]
    async fn session_cookie_carries_the_configured_attributes() {
        let app = test::init_service(build_app(test_deps())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/sign-up")
                .set_form(SignUpForm {
                    name: Some("Neo".to_owned()),
                    email: Some("neo@matrix.io".to_owned()),
                    password: Some("Unplugged#1999".to_owned()),
                    confirm_password: Some("Unplugged#1999".to_owned()),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FOUND);

        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .expect("session cookie set");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(SESSION_TTL));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn openapi_document_is_served_in_debug_builds() {
        let app = test::init_service(build_app(test_deps())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["paths"]["/sign-in"].is_object());
    }
}
