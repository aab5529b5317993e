//! Authentication handlers.
//!
//! ```text
//! GET  /sign-up
//! POST /sign-up  name=Neo&email=neo@matrix.io&password=..&confirmPassword=..
//! GET  /sign-in
//! POST /sign-in  email=neo@matrix.io&password=..
//! POST /logout
//! ```
//!
//! Successful signup and login answer with a redirect to the app overview
//! and a session cookie; validation failures answer 400 with a field-keyed
//! error map in the error details.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, FieldErrors, LoginCredentials, SignupCredentials};
use crate::inbound::http::gate::Anonymous;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{APP_PATH, ApiResult, LANDING_PATH, redirect_to};

/// Signup form body for `POST /sign-up`.
///
/// Every field is optional so that absent inputs surface as `Required`
/// entries in the validation error map rather than a deserialisation
/// failure.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignUpForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

impl TryFrom<SignUpForm> for SignupCredentials {
    type Error = FieldErrors;

    fn try_from(value: SignUpForm) -> Result<Self, Self::Error> {
        Self::parse(
            value.name.as_deref(),
            value.email.as_deref(),
            value.password.as_deref(),
            value.confirm_password.as_deref(),
        )
    }
}

/// Login form body for `POST /sign-in`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignInForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<SignInForm> for LoginCredentials {
    type Error = FieldErrors;

    fn try_from(value: SignInForm) -> Result<Self, Self::Error> {
        Self::parse(value.email.as_deref(), value.password.as_deref())
    }
}

/// Register a new account and establish a session.
///
/// Uses the centralised `Error` type so clients get a consistent error
/// schema across all endpoints.
#[utoipa::path(
    post,
    path = "/sign-up",
    request_body(content = SignUpForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Account created; redirect to the app overview", headers(("Set-Cookie" = String, description = "Session cookie"), ("Location" = String, description = "Redirect target"))),
        (status = 400, description = "Validation failure or email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signUp",
    security([])
)]
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignUpForm>,
) -> ApiResult<HttpResponse> {
    let credentials =
        SignupCredentials::try_from(form.into_inner()).map_err(FieldErrors::into_error)?;
    let user = state.accounts.sign_up(credentials).await?;
    session.persist_user(user.id())?;
    Ok(redirect_to(APP_PATH))
}

/// Authenticate an existing account and establish a session.
#[utoipa::path(
    post,
    path = "/sign-in",
    request_body(content = SignInForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Login success; redirect to the app overview", headers(("Set-Cookie" = String, description = "Session cookie"), ("Location" = String, description = "Redirect target"))),
        (status = 400, description = "Validation failure", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signIn",
    security([])
)]
#[post("/sign-in")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignInForm>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(form.into_inner()).map_err(FieldErrors::into_error)?;
    let user = state.accounts.sign_in(credentials).await?;
    session.persist_user(user.id())?;
    Ok(redirect_to(APP_PATH))
}

/// Destroy the session and return to the landing page.
///
/// Idempotent: logging out without a session still answers with the
/// redirect.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 302, description = "Session cleared; redirect to the landing page", headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    redirect_to(LANDING_PATH)
}

/// Serve the signup page payload to signed-out visitors.
#[utoipa::path(
    get,
    path = "/sign-up",
    responses(
        (status = 200, description = "Anonymous page payload"),
        (status = 302, description = "Already signed in; redirect to the app overview", headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "signUpPage",
    security([])
)]
#[get("/sign-up")]
pub async fn sign_up_page(_visitor: Anonymous) -> HttpResponse {
    anonymous_page()
}

/// Serve the login page payload to signed-out visitors.
#[utoipa::path(
    get,
    path = "/sign-in",
    responses(
        (status = 200, description = "Anonymous page payload"),
        (status = 302, description = "Already signed in; redirect to the app overview", headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "signInPage",
    security([])
)]
#[get("/sign-in")]
pub async fn sign_in_page(_visitor: Anonymous) -> HttpResponse {
    anonymous_page()
}

fn anonymous_page() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "userId": null }))
}
